pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page frame: title bar on top, the use case below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-container">
            <header::Header />
            <main class="app-main">{children()}</main>
        </div>
    }
}
