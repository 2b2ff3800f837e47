pub mod u101_invoice_extraction;
