//! Core push provider trait and types.
//!
//! This module provides the abstraction for push-delivery providers,
//! keeping the relay logic independent of any concrete vendor API and
//! making the outbound seam substitutable in tests.

use crate::error::AppResult;
use async_trait::async_trait;

/// Message to be relayed to the push provider.
///
/// Fields are individually optional: the inbound contract performs no schema
/// validation beyond a successful JSON parse, so absent values flow through
/// to the provider call as absent.
#[derive(Debug, Clone)]
pub struct PushMessage {
    /// Opaque recipient identifier in the provider's system
    pub player_id: Option<String>,
    /// Notification heading
    pub title: Option<String>,
    /// Notification content
    pub body: Option<String>,
}

/// Outcome of a provider call that completed at the HTTP level.
///
/// Carries the provider's status code and its response payload untouched so
/// the caller can relay both verbatim.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    /// HTTP status code returned by the provider
    pub status_code: u16,
    /// Provider response body, parsed as JSON but otherwise opaque
    pub payload: serde_json::Value,
}

impl ProviderReply {
    /// Whether the provider accepted the notification (2xx status)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Trait for push-delivery providers
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Sends one notification to the provider.
    ///
    /// Implementations must issue at most one outbound call per invocation
    /// and must not retry. A `ProviderReply` is returned for any completed
    /// HTTP exchange, success or not; errors are reserved for calls that
    /// never completed (missing credentials, transport failure, unreadable
    /// response).
    async fn send(&self, message: &PushMessage) -> AppResult<ProviderReply>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}
