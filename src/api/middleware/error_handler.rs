//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError, producing the
//! relay's outward error contract:
//! - missing provider credentials answer with a fixed plain-text body
//! - provider rejections pass the provider's status and payload through
//!   verbatim
//! - every other failure collapses into one generic plain-text 500, with
//!   details confined to the logs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Fixed body returned when required provider credentials are absent.
pub const CONFIGURATION_ERROR_BODY: &str = "Server configuration error";

/// Fixed body returned for malformed input and unexpected failures.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - MissingConfiguration → 500, fixed text body
    /// - Configuration → 500, fixed text body
    /// - ProviderRejected → provider's status, provider's JSON payload
    /// - MalformedRequest → 500, fixed text body
    /// - Upstream → 500, fixed text body
    /// - Internal → 500, fixed text body
    fn into_response(self) -> Response {
        match self {
            AppError::MissingConfiguration | AppError::Configuration { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                CONFIGURATION_ERROR_BODY,
            )
                .into_response(),
            AppError::ProviderRejected { status, payload } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, Json(payload)).into_response()
            }
            AppError::MalformedRequest { .. }
            | AppError::Upstream { .. }
            | AppError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
///
/// This function is useful for testing and validation purposes.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::MissingConfiguration => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ProviderRejected { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        AppError::MalformedRequest { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
