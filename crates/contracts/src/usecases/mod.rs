pub mod common;
pub mod u101_invoice_extraction;
