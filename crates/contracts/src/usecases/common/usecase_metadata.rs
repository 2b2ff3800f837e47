/// Identification of a use case for logs and page titles
pub trait UseCaseMetadata {
    /// Short index, e.g. "u101"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "invoice_extraction"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u101_invoice_extraction"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
