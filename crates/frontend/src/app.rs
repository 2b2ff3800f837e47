use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::usecases::u101_invoice_extraction::InvoiceExtractionView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session-wide extraction state, shared with every component below.
    provide_context(AppGlobalContext::new());

    view! {
        <Shell>
            <InvoiceExtractionView />
        </Shell>
    }
}
