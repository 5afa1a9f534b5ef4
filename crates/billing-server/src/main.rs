//! billing-link HTTP Server
//!
//! Axum-based gateway proxy providing the setup-session and phone-update
//! endpoints used by the checkout page.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billing_payments::StripePaymentProvider;
use billing_server::{config::ServerConfig, cors_layer, router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Refuse to serve without credentials
    let config = ServerConfig::from_env().inspect_err(|e| {
        tracing::error!("{e}");
        tracing::error!("  Set STRIPE_SECRET_KEY and FRONTEND_URL in .env");
    })?;

    let provider = Arc::new(StripePaymentProvider::new(&config.stripe_secret_key)?);
    let state = AppState::new(provider, &config.frontend_url);

    let app = router(state).layer(cors_layer(config.frontend_origin()?));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("billing-server running on http://{}", config.bind_addr);
    tracing::info!("  Frontend origin: {}", config.frontend_url);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                    - Health check");
    tracing::info!("  POST /api/create-setup-session  - Create customer + setup checkout");
    tracing::info!("  POST /api/update-customer-phone - Attach phone to customer");

    axum::serve(listener, app).await?;

    Ok(())
}
