//! Build-time Frontend Configuration
//!
//! Both values are baked in at compile time:
//!
//! ```text
//! STRIPE_PUBLISHABLE_KEY=pk_test_xxx BACKEND_URL=http://localhost:3000 trunk build
//! ```
//!
//! The publishable key is safe to ship to browsers; the secret key never
//! leaves the server.

use std::fmt;

pub const PUBLISHABLE_KEY_VAR: &str = "STRIPE_PUBLISHABLE_KEY";
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Stripe publishable key for Stripe.js
    pub publishable_key: String,

    /// Gateway proxy base URL, without trailing slash
    pub backend_url: String,
}

/// Names of the variables that were missing at build time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingConfig(pub Vec<&'static str>);

impl fmt::Display for MissingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing configuration: {}", self.0.join(", "))
    }
}

impl FrontendConfig {
    pub fn from_build_env() -> Result<Self, MissingConfig> {
        Self::from_values(option_env!("STRIPE_PUBLISHABLE_KEY"), option_env!("BACKEND_URL"))
    }

    pub fn from_values(
        publishable_key: Option<&str>,
        backend_url: Option<&str>,
    ) -> Result<Self, MissingConfig> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        match (present(publishable_key), present(backend_url)) {
            (Some(publishable_key), Some(backend_url)) => Ok(Self {
                publishable_key: publishable_key.to_string(),
                backend_url: backend_url.trim_end_matches('/').to_string(),
            }),
            (key, url) => {
                let mut missing = Vec::new();
                if key.is_none() {
                    missing.push(PUBLISHABLE_KEY_VAR);
                }
                if url.is_none() {
                    missing.push(BACKEND_URL_VAR);
                }
                Err(MissingConfig(missing))
            }
        }
    }

    /// Absolute URL for an API path such as `/api/create-setup-session`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}
