use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_invoice_extraction::InvoiceExtraction;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">{InvoiceExtraction::display_name()}</h1>
                <span class="header__subtitle">{InvoiceExtraction::description()}</span>
            </div>
        </header>
    }
}
