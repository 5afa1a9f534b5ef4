//! # billing-payments
//!
//! Payment provider access for billing-link.
//!
//! ## Setup-mode Embedded Checkout
//!
//! Cards are saved on file without a charge. The provider hosts the card
//! form inside the page; this crate only creates the objects that form
//! needs and never sees card data.
//!
//! ```text
//! ┌────────────┐  create customer   ┌──────────┐
//! │  Gateway   │───────────────────▶│          │
//! │   proxy    │  create session    │  Stripe  │
//! │            │───────────────────▶│          │
//! └─────┬──────┘   client secret    └────┬─────┘
//!       │                                │ iframe
//!       ▼                                ▼
//! ┌────────────────────────────────────────────┐
//! │  Checkout page  ┌──────────────────────┐   │
//! │                 │ Embedded Checkout    │   │
//! │                 └──────────────────────┘   │
//! └────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use billing_payments::{setup_return_url, PaymentProvider, StripePaymentProvider};
//!
//! let provider = StripePaymentProvider::new("sk_test_xxx")?;
//!
//! let session = provider
//!     .open_setup_session(&setup_return_url("https://yoursite.com"))
//!     .await?;
//!
//! // Hand session.client_secret to Stripe.js initEmbeddedCheckout
//! ```

mod error;
mod mock;
mod provider;
mod stripe_provider;

pub use error::{PaymentError, Result};
pub use mock::{MockPaymentProvider, ProviderCall, ProviderOp};
pub use provider::{
    setup_return_url, PaymentProvider, SetupSession, SetupSessionRequest, SESSION_ID_PLACEHOLDER,
};
pub use stripe_provider::{StripePaymentProvider, CREATED_AT_METADATA_KEY, PHONE_METADATA_KEY};
