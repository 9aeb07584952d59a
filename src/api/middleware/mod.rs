//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! and error response mapping.

mod error_handler;
mod logging;
mod request_id;

pub use error_handler::{CONFIGURATION_ERROR_BODY, INTERNAL_ERROR_BODY, error_to_status_code};
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
