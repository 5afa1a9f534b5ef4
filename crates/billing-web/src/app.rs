//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::Router, hooks::use_location};

use billing_core::PageVariant;

use crate::config::FrontendConfig;
use crate::pages::{CheckoutPage, ConfigErrorPage, NotFoundPage, SuccessPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    match FrontendConfig::from_build_env() {
        Ok(config) => view! {
            <Router>
                <main class="app">
                    <PageOutlet config=config />
                </main>
            </Router>
        }
        .into_any(),
        Err(missing) => view! {
            <main class="app">
                <ConfigErrorPage missing=missing />
            </main>
        }
        .into_any(),
    }
}

/// Renders the page chosen by [`PageVariant::from_url`]
#[component]
fn PageOutlet(config: FrontendConfig) -> impl IntoView {
    let location = use_location();
    let variant = Memo::new(move |_| {
        PageVariant::from_url(&location.pathname.get(), &location.search.get())
    });

    Effect::new(move |_| {
        let title = variant.with(PageVariant::title);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    });

    move || match variant.get() {
        PageVariant::Checkout => view! { <CheckoutPage config=config.clone() /> }.into_any(),
        PageVariant::Success { session_id } => view! { <SuccessPage session_id=session_id /> }.into_any(),
        PageVariant::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}
