use crate::config::error::ConfigError;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// The relay path distinguishes failure causes internally (for diagnostics)
/// even where the HTTP contract collapses them into a single generic response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Provider credentials are absent; the outbound call is never attempted
    #[error("push provider credentials are not configured")]
    MissingConfiguration,

    /// The provider answered with a non-success status; status and payload
    /// are relayed to the caller verbatim
    #[error("push provider rejected the notification with status {status}")]
    ProviderRejected {
        status: u16,
        payload: serde_json::Value,
    },

    /// The inbound request body could not be parsed as JSON
    #[error("request body is not valid JSON")]
    MalformedRequest {
        #[source]
        source: serde_json::Error,
    },

    /// The outbound call failed at the transport level, or the provider
    /// response body could not be parsed
    #[error("push provider call failed")]
    Upstream {
        #[source]
        source: anyhow::Error,
    },

    /// Configuration loading or validation error (startup path)
    #[error("configuration error")]
    Configuration {
        #[source]
        source: ConfigError,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Configuration { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
