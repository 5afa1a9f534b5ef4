//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STRIPE_SECRET_KEY` - Stripe secret API key (server only, never sent to the browser)
//! - `FRONTEND_URL` - Public URL of the frontend; CORS allow-origin and checkout return URL
//!
//! ## Optional
//! - `BIND_ADDR` - Listen address (default: 0.0.0.0:3000)
//! - `RUST_LOG` - Log filter (default: info,tower_http=debug)
//!
//! Startup is refused when a required variable is missing or blank.

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Gateway proxy configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Stripe secret key
    pub stripe_secret_key: String,

    /// Frontend base URL without trailing slash
    pub frontend_url: String,

    /// Socket address to bind
    pub bind_addr: String,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("stripe_secret_key", &"[REDACTED]")
            .field("frontend_url", &self.frontend_url)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let stripe_secret_key = required("STRIPE_SECRET_KEY")?;
        let frontend_url = required("FRONTEND_URL")?.trim_end_matches('/').to_string();

        if !frontend_url.starts_with("http://") && !frontend_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                "FRONTEND_URL".into(),
                "must start with http:// or https://".into(),
            ));
        }

        HeaderValue::from_str(&frontend_url).map_err(|e| {
            ConfigError::InvalidEnvVar("FRONTEND_URL".into(), e.to_string())
        })?;

        let bind_addr = lookup("BIND_ADDR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into());

        Ok(Self {
            stripe_secret_key,
            frontend_url,
            bind_addr,
        })
    }

    /// `FRONTEND_URL` as a CORS origin header value
    pub fn frontend_origin(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.frontend_url)
            .map_err(|e| ConfigError::InvalidEnvVar("FRONTEND_URL".into(), e.to_string()))
    }
}
