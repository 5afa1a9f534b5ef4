//! billing-link gateway proxy
//!
//! Axum service standing between the browser and the payment provider.
//! The provider secret key stays on this side; the browser only ever sees
//! a checkout client secret and a customer id.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use billing_core::api::{CREATE_SETUP_SESSION_PATH, HEALTH_PATH, UPDATE_CUSTOMER_PHONE_PATH};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{create_setup_session, health_check, update_customer_phone};
use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route(CREATE_SETUP_SESSION_PATH, post(create_setup_session))
        .route(UPDATE_CUSTOMER_PHONE_PATH, post(update_customer_phone))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS restricted to the configured frontend origin
pub fn cors_layer(frontend_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
