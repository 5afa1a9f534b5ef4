//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The provider rejected or failed the call; carries the provider's own message
    #[error("{0}")]
    Provider(String),

    /// Customer id is not in the provider's id format
    #[error("Invalid customer id: {0}")]
    InvalidCustomerId(String),

    /// Session was created but came back without a client secret
    #[error("Checkout session has no client secret")]
    MissingClientSecret,

    /// Provider credentials are unusable
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Message safe to return to the browser.
    ///
    /// Provider messages pass through verbatim; local failures get a
    /// generic description.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Provider(message) => message,
            Self::InvalidCustomerId(_) => "Customer id is not valid.",
            Self::MissingClientSecret => "Checkout session could not be started.",
            Self::Config(_) => "Service configuration error.",
        }
    }
}

impl From<stripe::StripeError> for PaymentError {
    fn from(err: stripe::StripeError) -> Self {
        match err {
            stripe::StripeError::Stripe(request) => Self::Provider(
                request
                    .message
                    .unwrap_or_else(|| format!("Stripe request failed with status {}", request.http_status)),
            ),
            other => Self::Provider(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_message_is_verbatim() {
        let err = PaymentError::Provider("No such customer: 'cus_nope'".into());
        assert_eq!(err.to_string(), "No such customer: 'cus_nope'");
    }

    #[test]
    fn test_local_errors_describe_themselves() {
        let err = PaymentError::InvalidCustomerId("abc".into());
        assert_eq!(err.to_string(), "Invalid customer id: abc");

        let err = PaymentError::Config("STRIPE_SECRET_KEY is a publishable key".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: STRIPE_SECRET_KEY is a publishable key"
        );
    }

    #[test]
    fn test_user_message() {
        let err = PaymentError::Provider("No such customer: 'cus_nope'".into());
        assert_eq!(err.user_message(), "No such customer: 'cus_nope'");

        assert_eq!(
            PaymentError::InvalidCustomerId("abc".into()).user_message(),
            "Customer id is not valid."
        );
        assert_eq!(
            PaymentError::MissingClientSecret.user_message(),
            "Checkout session could not be started."
        );
        assert_eq!(
            PaymentError::Config("bad key".into()).user_message(),
            "Service configuration error."
        );
    }

    #[test]
    fn test_transport_errors_become_provider_errors() {
        let err = PaymentError::from(stripe::StripeError::ClientError("connection reset".into()));
        assert!(matches!(err, PaymentError::Provider(ref msg) if msg.contains("connection reset")));
    }
}
