use super::state::{ResultTab, SelectedFile};
use super::table::build_table;
use super::{api, controller};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::table::ResultTable;
use contracts::usecases::u101_invoice_extraction::accept_attribute;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn InvoiceExtractionView() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");
    let session = ctx.session;

    // web_sys::File is not Send, keep it out of the session signal
    let picked_file = StoredValue::new_local(None::<web_sys::File>);

    let is_busy = Signal::derive(move || ctx.is_busy());
    let error = Signal::derive(move || session.with(|s| s.error.clone()));
    let selected_file = Signal::derive(move || session.with(|s| s.selected_file.clone()));

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        match &file {
            Some(f) => log!("file picked: '{}' ({} bytes)", f.name(), f.size()),
            None => log!("file selection cleared"),
        }

        let summary = file
            .as_ref()
            .map(|f| SelectedFile::new(f.name(), f.size() as u64));
        session.update(|s| s.select_file(summary));
        picked_file.set_value(file);
    };

    let handle_upload = move |_: leptos::ev::MouseEvent| {
        let file = picked_file.get_value();
        leptos::task::spawn_local(async move {
            let outcome = controller::submit(&session, file, api::extract_document).await;
            log!("submit: {:?}", outcome);
        });
    };

    view! {
        <div id="u101_invoice_extraction--usecase" class="card">
            <h2>"Upload Invoice File"</h2>

            <div class="upload__row">
                <input
                    type="file"
                    accept={accept_attribute()}
                    on:change=handle_file_select
                    prop:disabled=move || is_busy.get()
                />

                {move || match selected_file.get() {
                    Some(file) => {
                        let hint = file.hint();
                        view! {
                            <span class="upload__fileinfo">
                                <strong>{file.name.clone()}</strong>
                                {" ("}
                                {file.size_label()}
                                {")"}
                                {hint
                                    .map(|text| {
                                        view! { <span class="upload__filehint">{text}</span> }
                                    })}
                            </span>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <span class="upload__filehint">"No file selected"</span> }
                            .into_any()
                    }
                }}
            </div>

            <div class="upload__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_upload
                    disabled=is_busy
                >
                    {move || if is_busy.get() { "Processing..." } else { "Upload" }}
                </Button>
            </div>

            <Show when=move || is_busy.get()>
                <div class="loader-container">
                    <Flex gap=FlexGap::Small style="align-items: center;">
                        <Spinner />
                        <span>"Extracting and organizing invoice data…"</span>
                    </Flex>
                </div>
            </Show>

            {move || error.get().map(|msg| view! { <p class="error-text">{msg}</p> })}
        </div>

        <Show when=move || !is_busy.get()>
            <ResultTabs />
        </Show>
    }
}

/// Tab strip plus the table of the active tab
#[component]
fn ResultTabs() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");
    let session = ctx.session;

    view! {
        <div class="detail-tabs">
            {ResultTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="detail-tab"
                            class:active=move || ctx.active_tab() == tab
                            on:click=move |_| ctx.activate_tab(tab)
                        >
                            {move || {
                                format!("{} ({})", tab.label(), session.with(|s| s.store.len(tab)))
                            }}
                        </button>
                    }
                })
                .collect_view()}
        </div>

        <div class="card">
            {move || {
                let table = session.with(|s| build_table(s.active_tab, &s.store));
                view! { <ResultTable table=table /> }
            }}
        </div>
    }
}
