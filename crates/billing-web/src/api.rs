//! API Client

use billing_core::{
    ErrorBody, SetupSessionResponse, UpdatePhoneRequest,
    api::{CREATE_SETUP_SESSION_PATH, UPDATE_CUSTOMER_PHONE_PATH},
};

use thiserror::Error;

use crate::config::FrontendConfig;

/// Failures talking to the gateway proxy; `Display` is the inline text
#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Could not reach the server: {0}")]
    Network(String),

    /// Non-2xx response, with the server's message when it sent one
    #[error("{message}")]
    Server {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiClientError {
    /// Build from a failed response, preferring the server's own explanation
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) if !err.message.is_empty() => Self::Server {
                status,
                code: Some(err.error),
                message: err.message,
            },
            _ => Self::Server {
                status,
                code: None,
                message: format!("Request failed ({status})"),
            },
        }
    }
}

async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<String, ApiClientError> {
    let response = reqwest::Client::new()
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| ApiClientError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiClientError::Network(e.to_string()))?;

    if status.is_success() {
        Ok(text)
    } else {
        Err(ApiClientError::from_response(status.as_u16(), &text))
    }
}

/// Create a customer and a setup-mode checkout session
pub async fn create_setup_session(
    config: &FrontendConfig,
) -> Result<SetupSessionResponse, ApiClientError> {
    let text = post_json(&config.endpoint(CREATE_SETUP_SESSION_PATH), &serde_json::json!({})).await?;
    serde_json::from_str(&text).map_err(|e| ApiClientError::Decode(e.to_string()))
}

/// Attach a canonical phone number to the customer
pub async fn update_customer_phone(
    config: &FrontendConfig,
    customer_id: &str,
    phone: &str,
) -> Result<(), ApiClientError> {
    let body = UpdatePhoneRequest {
        customer_id: Some(customer_id.to_string()),
        phone: Some(phone.to_string()),
    };
    post_json(&config.endpoint(UPDATE_CUSTOMER_PHONE_PATH), &body).await?;
    Ok(())
}
