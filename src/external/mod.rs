//! Shared infrastructure for outbound calls to external services.

pub mod client;
