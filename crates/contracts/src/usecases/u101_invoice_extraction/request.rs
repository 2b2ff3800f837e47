//! Upload side of the extraction endpoint.
//!
//! The request itself is a multipart form built by the browser, so there is
//! no request DTO here, only the constants both sides agree on.

/// Path of the extraction endpoint, relative to the API base
pub const EXTRACT_PATH: &str = "/api/extract";

/// Multipart field carrying the document
pub const FILE_FIELD: &str = "file";

/// Extensions offered by the file picker
pub const ACCEPTED_EXTENSIONS: [&str; 5] = [".pdf", ".png", ".jpg", ".jpeg", ".xlsx"];

/// The one message shown for any failed upload
pub const UPLOAD_FAILED_MESSAGE: &str = "File processing failed. Please try another file.";

/// Value for the `accept` attribute of the file input
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// Case-insensitive check of the file name against [`ACCEPTED_EXTENSIONS`].
///
/// Only used to annotate the picked file; it never blocks an upload.
pub fn is_accepted_file_name(name: &str) -> bool {
    let lower = name.trim().to_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| lower.len() > ext.len() && lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.png,.jpg,.jpeg,.xlsx");
    }

    #[test]
    fn test_is_accepted_file_name() {
        assert!(is_accepted_file_name("invoice.pdf"));
        assert!(is_accepted_file_name("SCAN.JPEG"));
        assert!(is_accepted_file_name("report 2024.xlsx"));
        assert!(!is_accepted_file_name("report.xls"));
        assert!(!is_accepted_file_name("notes.txt"));
        assert!(!is_accepted_file_name(".pdf"));
        assert!(!is_accepted_file_name(""));
    }
}
