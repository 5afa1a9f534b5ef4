//! Wire Types
//!
//! JSON bodies exchanged between the browser and the gateway proxy.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

pub const HEALTH_PATH: &str = "/health";
pub const CREATE_SETUP_SESSION_PATH: &str = "/api/create-setup-session";
pub const UPDATE_CUSTOMER_PHONE_PATH: &str = "/api/update-customer-phone";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Returned by `POST /api/create-setup-session`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupSessionResponse {
    pub client_secret: String,
    pub customer_id: String,
}

/// Body of `POST /api/update-customer-phone`.
///
/// Both fields are optional here so that a missing field is reported by
/// request validation with a specific error code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhoneRequest {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePhoneResponse {
    pub success: bool,
}

/// Error payload for every non-2xx response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable code, e.g. `MISSING_PHONE`
    pub error: String,
    /// Human-readable detail
    pub message: String,
}
