//! Page Components

mod checkout;
mod success;

pub use checkout::CheckoutPage;
pub use success::SuccessPage;

use leptos::prelude::*;

use crate::config::MissingConfig;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/" class="btn">"Go to checkout"</a>
        </div>
    }
}

/// Blocking page shown when the build is missing required configuration
#[component]
pub fn ConfigErrorPage(missing: MissingConfig) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Configuration error"</h1>
            <p>{missing.to_string()}</p>
            <p>"Rebuild the frontend with these variables set."</p>
        </div>
    }
}
