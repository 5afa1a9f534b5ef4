//! API error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use billing_core::{ErrorBody, phone::CANONICAL_FORMAT_HINT};
use billing_payments::PaymentError;
use thiserror::Error;

/// Errors returned by the gateway endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not a JSON object of the expected shape
    #[error("{0}")]
    InvalidBody(String),

    #[error("customerId is required")]
    MissingCustomerId,

    #[error("phone is required")]
    MissingPhone,

    #[error("phone must be in the format {hint}", hint = CANONICAL_FORMAT_HINT)]
    InvalidPhoneFormat,

    /// Customer or session creation failed at the provider
    #[error("{0}")]
    SetupSession(PaymentError),

    /// Customer update failed at the provider
    #[error("{0}")]
    CustomerUpdate(PaymentError),
}

impl ApiError {
    /// Stable code placed in the `error` field
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "INVALID_REQUEST_BODY",
            Self::MissingCustomerId => "MISSING_CUSTOMER_ID",
            Self::MissingPhone => "MISSING_PHONE",
            Self::InvalidPhoneFormat => "INVALID_PHONE_FORMAT",
            Self::SetupSession(_) => "SETUP_SESSION_FAILED",
            Self::CustomerUpdate(_) => "CUSTOMER_UPDATE_FAILED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_)
            | Self::MissingCustomerId
            | Self::MissingPhone
            | Self::InvalidPhoneFormat => StatusCode::BAD_REQUEST,
            Self::SetupSession(_) | Self::CustomerUpdate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `message` field
    pub fn message(&self) -> String {
        match self {
            Self::SetupSession(err) | Self::CustomerUpdate(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Payment provider request failed");
        } else {
            tracing::warn!(error = %self, code, "Rejected request");
        }

        let body = ErrorBody {
            error: code.to_string(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}
