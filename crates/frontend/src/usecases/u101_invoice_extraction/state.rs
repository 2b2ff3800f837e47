use super::error::ExtractError;
use contracts::usecases::u101_invoice_extraction::{
    is_accepted_file_name, Customer, ExtractionResponse, Invoice, Product, UPLOAD_FAILED_MESSAGE,
};
#[cfg(test)]
use contracts::usecases::u101_invoice_extraction::FieldValue;

/// One of the three result tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultTab {
    #[default]
    Invoices,
    Products,
    Customers,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [ResultTab::Invoices, ResultTab::Products, ResultTab::Customers];

    /// Lowercase plural, used in placeholders and logs
    pub fn kind(self) -> &'static str {
        match self {
            ResultTab::Invoices => "invoices",
            ResultTab::Products => "products",
            ResultTab::Customers => "customers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultTab::Invoices => "Invoices",
            ResultTab::Products => "Products",
            ResultTab::Customers => "Customers",
        }
    }
}

/// Latest extraction result. Only ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    invoices: Vec<Invoice>,
    products: Vec<Product>,
    customers: Vec<Customer>,
}

impl ResultStore {
    pub fn replace_all(&mut self, response: ExtractionResponse) {
        let ExtractionResponse {
            invoices,
            products,
            customers,
        } = response;
        self.invoices = invoices;
        self.products = products;
        self.customers = customers;
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self, tab: ResultTab) -> usize {
        match tab {
            ResultTab::Invoices => self.invoices.len(),
            ResultTab::Products => self.products.len(),
            ResultTab::Customers => self.customers.len(),
        }
    }
}

/// Upload lifecycle: Idle -> Uploading -> Idle | Failed -> Uploading ...
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Failed,
}

/// Shown for a picked file outside the accepted extensions
pub const UNACCEPTED_FILE_HINT: &str = "not a PDF, image or .xlsx file";

/// What the page knows about the picked file
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }

    pub fn is_accepted(&self) -> bool {
        is_accepted_file_name(&self.name)
    }

    /// Warning shown next to the file name, if any
    pub fn hint(&self) -> Option<&'static str> {
        (!self.is_accepted()).then_some(UNACCEPTED_FILE_HINT)
    }
}

/// Everything the extraction page renders from
#[derive(Debug, Clone, Default)]
pub struct ExtractionSession {
    pub store: ResultStore,
    pub phase: UploadPhase,
    pub error: Option<String>,
    pub active_tab: ResultTab,
    pub selected_file: Option<SelectedFile>,
}

impl ExtractionSession {
    pub fn is_busy(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.selected_file = file;
    }

    pub fn select_tab(&mut self, tab: ResultTab) {
        self.active_tab = tab;
    }

    /// Enter `Uploading`. Returns false when an upload is already running.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = UploadPhase::Uploading;
        self.error = None;
        true
    }

    /// Leave `Uploading`. The store is only touched on success.
    pub fn finish_upload(&mut self, outcome: Result<ExtractionResponse, ExtractError>) {
        match outcome {
            Ok(response) => {
                self.store.replace_all(response);
                self.phase = UploadPhase::Idle;
                self.error = None;
            }
            Err(_) => {
                self.phase = UploadPhase::Failed;
                self.error = Some(UPLOAD_FAILED_MESSAGE.to_string());
            }
        }
    }
}
