//! Application State

use std::sync::Arc;

use billing_payments::{setup_return_url, PaymentProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider (Stripe in production, mock in tests)
    pub provider: Arc<dyn PaymentProvider>,

    /// Post-checkout return URL, with the session id placeholder
    pub return_url: Arc<str>,
}

impl AppState {
    pub fn new(provider: Arc<dyn PaymentProvider>, frontend_url: &str) -> Self {
        Self {
            provider,
            return_url: setup_return_url(frontend_url).into(),
        }
    }
}
