//! Stripe Setup-Mode Checkout
//!
//! Implements [`PaymentProvider`] on top of async-stripe: customers are
//! created on demand and cards are collected through an embedded Checkout
//! session in `setup` mode, so nothing is charged.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, CheckoutSessionUiMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionPaymentMethodTypes, CreateCustomer, Customer,
    CustomerId, UpdateCustomer,
};

use crate::error::{PaymentError, Result};
use crate::provider::{PaymentProvider, SetupSession, SetupSessionRequest};

/// Metadata key holding the customer's creation time
pub const CREATED_AT_METADATA_KEY: &str = "created_at";

/// Metadata key mirroring the customer's phone field
pub const PHONE_METADATA_KEY: &str = "phone";

/// Prefixes of server-side keys (secret and restricted)
const SERVER_KEY_PREFIXES: [&str; 2] = ["sk_", "rk_"];

/// Stripe-backed payment provider
pub struct StripePaymentProvider {
    client: Client,
}

impl StripePaymentProvider {
    /// Create a new Stripe provider from a secret key.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Config`] when the key is not a secret or
    /// restricted key (a publishable `pk_` key is the usual mistake).
    pub fn new(secret_key: &str) -> Result<Self> {
        let secret_key = secret_key.trim();
        if !SERVER_KEY_PREFIXES
            .iter()
            .any(|prefix| secret_key.starts_with(prefix))
        {
            return Err(PaymentError::Config(
                "STRIPE_SECRET_KEY must be a secret (sk_) or restricted (rk_) key".into(),
            ));
        }

        Ok(Self {
            client: Client::new(secret_key),
        })
    }
}

fn parse_customer_id(customer_id: &str) -> Result<CustomerId> {
    customer_id
        .parse::<CustomerId>()
        .map_err(|_| PaymentError::InvalidCustomerId(customer_id.to_string()))
}

#[async_trait]
impl PaymentProvider for StripePaymentProvider {
    async fn create_customer(&self, created_at: DateTime<Utc>) -> Result<String> {
        let mut params = CreateCustomer::new();
        params.metadata = Some(HashMap::from([(
            CREATED_AT_METADATA_KEY.to_string(),
            created_at.to_rfc3339(),
        )]));

        let customer = Customer::create(&self.client, params).await?;
        Ok(customer.id.to_string())
    }

    async fn create_setup_session(&self, request: &SetupSessionRequest) -> Result<SetupSession> {
        let mut params = CreateCheckoutSession::new();
        params.mode = Some(CheckoutSessionMode::Setup);
        params.ui_mode = Some(CheckoutSessionUiMode::Embedded);
        params.customer = Some(parse_customer_id(&request.customer_id)?);
        params.return_url = Some(&request.return_url);
        params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);

        let session = StripeCheckoutSession::create(&self.client, params).await?;

        let session_id = session.id.to_string();
        let Some(client_secret) = session.client_secret else {
            tracing::error!(session_id = %session_id, "Checkout session returned without client secret");
            return Err(PaymentError::MissingClientSecret);
        };

        tracing::info!(
            session_id = %session_id,
            customer_id = %request.customer_id,
            "Created setup checkout session"
        );

        Ok(SetupSession {
            session_id,
            client_secret,
            customer_id: request.customer_id.clone(),
        })
    }

    async fn update_customer_phone(&self, customer_id: &str, phone: &str) -> Result<()> {
        let id = parse_customer_id(customer_id)?;

        let mut params = UpdateCustomer::new();
        params.phone = Some(phone);
        params.metadata = Some(HashMap::from([(
            PHONE_METADATA_KEY.to_string(),
            phone.to_string(),
        )]));

        Customer::update(&self.client, &id, params).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stripe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_customer_id() {
        assert!(parse_customer_id("cus_NffrFeUfNV2Hib").is_ok());
        assert!(matches!(
            parse_customer_id("not-a-customer"),
            Err(PaymentError::InvalidCustomerId(id)) if id == "not-a-customer"
        ));
    }

    #[test]
    fn test_provider_name() {
        let provider = StripePaymentProvider::new("sk_test_123").unwrap();
        assert_eq!(provider.name(), "stripe");
    }

    #[test]
    fn test_rejects_non_server_keys() {
        assert!(StripePaymentProvider::new("rk_test_123").is_ok());
        assert!(matches!(
            StripePaymentProvider::new("pk_test_123"),
            Err(PaymentError::Config(_))
        ));
        assert!(matches!(
            StripePaymentProvider::new(""),
            Err(PaymentError::Config(_))
        ));
    }
}
