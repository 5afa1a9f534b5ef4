//! Payment Provider Strategy
//!
//! The gateway proxy talks to the payment provider only through
//! [`PaymentProvider`], so the Stripe client and the in-memory mock are
//! interchangeable behind an `Arc<dyn PaymentProvider>`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Placeholder the provider replaces with the real session id on redirect
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Build the post-checkout return URL for a frontend base URL
pub fn setup_return_url(frontend_url: &str) -> String {
    format!(
        "{}/?success=true&session_id={}",
        frontend_url.trim_end_matches('/'),
        SESSION_ID_PLACEHOLDER
    )
}

/// Parameters for a setup-mode checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSessionRequest {
    /// Customer the saved card is attached to
    pub customer_id: String,

    /// Where the embedded checkout sends the browser when done
    pub return_url: String,
}

/// A created setup session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSession {
    /// Provider session id
    pub session_id: String,

    /// Single-use secret handed to the embedded checkout UI
    pub client_secret: String,

    /// Customer the session belongs to
    pub customer_id: String,
}

/// External payment provider operations used by the proxy
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a customer record tagged with its creation time; returns the customer id
    async fn create_customer(&self, created_at: DateTime<Utc>) -> Result<String>;

    /// Create a setup-mode (card save, no charge) embedded checkout session
    async fn create_setup_session(&self, request: &SetupSessionRequest) -> Result<SetupSession>;

    /// Set the customer's phone and `metadata.phone` in a single call
    async fn update_customer_phone(&self, customer_id: &str, phone: &str) -> Result<()>;

    /// Create a fresh customer and a setup session for it.
    ///
    /// Every call creates a new customer; there is no deduplication.
    async fn open_setup_session(&self, return_url: &str) -> Result<SetupSession> {
        let customer_id = self.create_customer(Utc::now()).await?;
        tracing::debug!(customer_id = %customer_id, provider = self.name(), "Created customer");

        self.create_setup_session(&SetupSessionRequest {
            customer_id,
            return_url: return_url.to_string(),
        })
        .await
    }

    /// Provider name for logs
    fn name(&self) -> &str;
}
