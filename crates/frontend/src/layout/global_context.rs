use crate::usecases::u101_invoice_extraction::state::{ExtractionSession, ResultTab};
use leptos::prelude::*;

/// Process-wide UI state. Lives as long as the page.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<ExtractionSession>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ExtractionSession::default()),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.session.with(|s| s.is_busy())
    }

    pub fn active_tab(&self) -> ResultTab {
        self.session.with(|s| s.active_tab)
    }

    pub fn activate_tab(&self, tab: ResultTab) {
        leptos::logging::log!("activate_tab: {}", tab.kind());
        self.session.update(|s| s.select_tab(tab));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
