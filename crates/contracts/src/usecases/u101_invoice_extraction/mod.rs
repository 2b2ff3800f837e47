pub mod request;
pub mod response;

pub use request::{
    accept_attribute, is_accepted_file_name, ACCEPTED_EXTENSIONS, EXTRACT_PATH, FILE_FIELD,
    UPLOAD_FAILED_MESSAGE,
};
pub use response::{Customer, ExtractionResponse, FieldValue, Invoice, Product};

use crate::usecases::common::UseCaseMetadata;

pub struct InvoiceExtraction;

impl UseCaseMetadata for InvoiceExtraction {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "invoice_extraction"
    }

    fn display_name() -> &'static str {
        "Swipe Invoice Automation"
    }

    fn description() -> &'static str {
        "Upload an invoice document and review the extracted invoices, products and customers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(InvoiceExtraction::full_name(), "u101_invoice_extraction");
    }
}
