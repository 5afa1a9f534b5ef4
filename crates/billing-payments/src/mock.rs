//! Mock Payment Provider
//!
//! In-memory provider for tests and local demos. Hands out fresh ids on
//! every call and records what it was asked to do.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{PaymentError, Result};
use crate::provider::{PaymentProvider, SetupSession, SetupSessionRequest};

/// Provider operation, used to target injected failures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderOp {
    CreateCustomer,
    CreateSetupSession,
    UpdateCustomerPhone,
}

/// A call the mock received
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderCall {
    CreateCustomer {
        customer_id: String,
        created_at: DateTime<Utc>,
    },
    CreateSetupSession(SetupSessionRequest),
    UpdateCustomerPhone {
        customer_id: String,
        phone: String,
    },
}

/// Mock provider with optional per-operation failures
#[derive(Default)]
pub struct MockPaymentProvider {
    failures: HashMap<ProviderOp, String>,
    calls: Mutex<Vec<ProviderCall>>,
    sessions: Mutex<Vec<SetupSession>>,
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `op` fail with `message` as the provider's error text
    pub fn failing_on(mut self, op: ProviderOp, message: impl Into<String>) -> Self {
        self.failures.insert(op, message.into());
        self
    }

    /// Snapshot of every call received so far, in order
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.lock().clone()
    }

    /// `(customer_id, phone)` for each phone update received
    pub fn phone_updates(&self) -> Vec<(String, String)> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                ProviderCall::UpdateCustomerPhone { customer_id, phone } => {
                    Some((customer_id.clone(), phone.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Every setup session handed out so far, in order
    pub fn sessions(&self) -> Vec<SetupSession> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ProviderCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self, op: ProviderOp) -> Result<()> {
        match self.failures.get(&op) {
            Some(message) => Err(PaymentError::Provider(message.clone())),
            None => Ok(()),
        }
    }

    fn record(&self, call: ProviderCall) {
        self.lock().push(call);
    }
}

fn mock_id(prefix: &str) -> String {
    format!("{prefix}_mock_{}", uuid::Uuid::new_v4().simple())
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_customer(&self, created_at: DateTime<Utc>) -> Result<String> {
        self.check(ProviderOp::CreateCustomer)?;

        let customer_id = mock_id("cus");
        self.record(ProviderCall::CreateCustomer {
            customer_id: customer_id.clone(),
            created_at,
        });
        Ok(customer_id)
    }

    async fn create_setup_session(&self, request: &SetupSessionRequest) -> Result<SetupSession> {
        self.check(ProviderOp::CreateSetupSession)?;

        let session_id = mock_id("cs");
        self.record(ProviderCall::CreateSetupSession(request.clone()));

        let session = SetupSession {
            client_secret: format!("{session_id}_secret"),
            session_id,
            customer_id: request.customer_id.clone(),
        };
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(session.clone());
        Ok(session)
    }

    async fn update_customer_phone(&self, customer_id: &str, phone: &str) -> Result<()> {
        self.check(ProviderOp::UpdateCustomerPhone)?;

        self.record(ProviderCall::UpdateCustomerPhone {
            customer_id: customer_id.to_string(),
            phone: phone.to_string(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
