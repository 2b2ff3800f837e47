//! Number formatting for result tables

/// Shortest decimal form of a value, the way a browser would print it
///
/// Magnitudes below `1e-6` or from `1e21` up switch to exponent notation
/// with an explicit sign (`1e-7`, `1.5e+21`).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_number(105.0), "105");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
pub fn format_number(value: f64) -> String {
    // -0.0 would print as "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    value.to_string()
}
