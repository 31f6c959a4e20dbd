//! Graduo - graduated number lines in the browser

use graduo_components::{Chronix, HelpPopup, Natix};
use graduo_state::{WidgetKind, provide_app_state};
use leptos::prelude::*;

fn main() {
    init_logging();
    tracing::info!("Starting Graduo");
    mount_to_body(App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
}

#[component]
fn App() -> impl IntoView {
    let app = provide_app_state();
    let active = app.active;

    view! {
        <div class="graduo">
            <nav class="graduo-nav">
                <span class="graduo-brand">"Graduo"</span>
                {WidgetKind::all()
                    .iter()
                    .map(|&kind| {
                        view! {
                            <button
                                class=move || if active.get() == kind { "nav-tab active" } else { "nav-tab" }
                                title=kind.subtitle()
                                on:click=move |_| app.select(kind)
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button class="nav-help" aria-label="Aide" on:click=move |_| app.open_help()>
                    "?"
                </button>
            </nav>

            <main class="graduo-main">
                {move || match active.get() {
                    WidgetKind::Chronix => view! { <Chronix /> }.into_any(),
                    WidgetKind::Natix => view! { <Natix /> }.into_any(),
                }}
            </main>

            <HelpPopup />
        </div>
    }
}
