//! HTTP Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use billing_core::{
    HealthResponse, SetupSessionResponse, UpdatePhoneRequest, UpdatePhoneResponse, phone,
};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Validation
// ============================================================================

/// A phone update that passed validation
#[derive(Debug, PartialEq, Eq)]
pub struct PhoneUpdate {
    pub customer_id: String,
    /// Canonical `+1XXXXXXXXXX` with separators removed
    pub phone: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validate an update request; the first violation wins.
pub fn validate_phone_update(request: &UpdatePhoneRequest) -> Result<PhoneUpdate, ApiError> {
    let customer_id =
        non_blank(request.customer_id.as_deref()).ok_or(ApiError::MissingCustomerId)?;
    let raw_phone = non_blank(request.phone.as_deref()).ok_or(ApiError::MissingPhone)?;

    if !phone::is_canonical_us(raw_phone) {
        return Err(ApiError::InvalidPhoneFormat);
    }

    Ok(PhoneUpdate {
        customer_id: customer_id.to_string(),
        phone: phone::strip_formatting(raw_phone),
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        message: format!("billing-server {} is running", env!("CARGO_PKG_VERSION")),
    })
}

/// Create a customer and a setup-mode embedded checkout session.
///
/// The request body is ignored. Each call creates a new customer.
pub async fn create_setup_session(
    State(state): State<AppState>,
) -> Result<Json<SetupSessionResponse>, ApiError> {
    let session = state
        .provider
        .open_setup_session(&state.return_url)
        .await
        .map_err(ApiError::SetupSession)?;

    tracing::info!(
        customer_id = %session.customer_id,
        session_id = %session.session_id,
        provider = state.provider.name(),
        "Setup session created"
    );

    Ok(Json(SetupSessionResponse {
        client_secret: session.client_secret,
        customer_id: session.customer_id,
    }))
}

/// Attach a canonical US phone number to a customer.
///
/// Body rejections (wrong content type, malformed JSON, non-string fields)
/// are answered with the same `{error, message}` shape as validation errors.
pub async fn update_customer_phone(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePhoneRequest>, JsonRejection>,
) -> Result<Json<UpdatePhoneResponse>, ApiError> {
    let Json(payload) = payload?;
    let update = validate_phone_update(&payload)?;

    state
        .provider
        .update_customer_phone(&update.customer_id, &update.phone)
        .await
        .map_err(ApiError::CustomerUpdate)?;

    tracing::info!(customer_id = %update.customer_id, "Customer phone updated");

    Ok(Json(UpdatePhoneResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(customer_id: Option<&str>, phone: Option<&str>) -> UpdatePhoneRequest {
        UpdatePhoneRequest {
            customer_id: customer_id.map(String::from),
            phone: phone.map(String::from),
        }
    }

    #[test]
    fn test_validation_order() {
        assert!(matches!(
            validate_phone_update(&request(None, None)),
            Err(ApiError::MissingCustomerId)
        ));
        assert!(matches!(
            validate_phone_update(&request(Some("  "), Some("bad"))),
            Err(ApiError::MissingCustomerId)
        ));
        assert!(matches!(
            validate_phone_update(&request(Some("cus_123"), Some(""))),
            Err(ApiError::MissingPhone)
        ));
        assert!(matches!(
            validate_phone_update(&request(Some("cus_123"), Some("5551234"))),
            Err(ApiError::InvalidPhoneFormat)
        ));
    }

    #[test]
    fn test_display_format_is_rejected() {
        assert!(matches!(
            validate_phone_update(&request(Some("cus_123"), Some("(555) 123-4567"))),
            Err(ApiError::InvalidPhoneFormat)
        ));
    }

    #[test]
    fn test_separators_are_stripped() {
        assert_eq!(
            validate_phone_update(&request(Some(" cus_123 "), Some("+1 (555) 123-4567"))).unwrap(),
            PhoneUpdate {
                customer_id: "cus_123".into(),
                phone: "+15551234567".into(),
            }
        );
    }
}
