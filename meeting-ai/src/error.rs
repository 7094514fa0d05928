//! Error types for meeting AI operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// Every provider implementation maps its native failures onto these variants, so callers
/// can log and recover without knowing which vendor sits behind the trait.
#[derive(Debug)]
pub enum Error {
    /// Missing, invalid, or expired credentials.
    Authentication(String),

    /// Connectivity issues, DNS failures, or dropped connections.
    Network(String),

    /// Invalid parameters or missing required configuration (e.g. no API key).
    Configuration(String),

    /// The provider answered but refused or could not complete the request,
    /// including replies that carry no usable text.
    Provider(String),

    /// The request exceeded the configured timeout.
    Timeout(String),

    /// Provider rate limit exceeded.
    RateLimited { retry_after_seconds: u64 },

    /// The provider's response body did not have the expected shape.
    Deserialization(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::RateLimited {
                retry_after_seconds,
            } => {
                write!(f, "Rate limited: retry after {}s", retry_after_seconds)
            }
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_provider_message() {
        let err = Error::Authentication("API key rejected".to_string());
        assert_eq!(err.to_string(), "Authentication failed: API key rejected");
    }

    #[test]
    fn rate_limited_display_reports_retry_delay() {
        let err = Error::RateLimited {
            retry_after_seconds: 30,
        };
        assert_eq!(err.to_string(), "Rate limited: retry after 30s");
    }
}
