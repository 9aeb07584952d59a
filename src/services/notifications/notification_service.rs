//! Notification relay service.
//!
//! Orchestrates a single dispatch to the configured push provider and maps
//! the provider outcome onto the relay contract: success payloads are
//! returned for verbatim forwarding, provider rejections become errors that
//! carry the provider's status and payload untouched.

use super::provider::{PushMessage, PushProvider};
use crate::error::{AppError, AppResult};
use std::sync::Arc;

/// Relay service over a pluggable push provider.
///
/// Exactly one provider call is made per relay; there are no retries and no
/// fan-out beyond what the provider itself performs.
#[derive(Clone)]
pub struct NotificationService {
    provider: Arc<dyn PushProvider>,
}

impl NotificationService {
    /// Creates a new NotificationService over the given provider
    pub fn new(provider: Arc<dyn PushProvider>) -> Self {
        Self { provider }
    }

    /// Relays one notification to the provider.
    ///
    /// # Returns
    /// The provider's JSON payload on acceptance (2xx). A non-2xx provider
    /// status is returned as `AppError::ProviderRejected` carrying the
    /// status and payload for verbatim pass-through.
    pub async fn relay(&self, message: PushMessage) -> AppResult<serde_json::Value> {
        tracing::info!(
            provider = self.provider.name(),
            player_id = ?message.player_id,
            "Dispatching notification to provider"
        );

        let reply = self.provider.send(&message).await?;

        if !reply.is_success() {
            tracing::warn!(
                provider = self.provider.name(),
                status = reply.status_code,
                "Provider rejected notification"
            );
            return Err(AppError::ProviderRejected {
                status: reply.status_code,
                payload: reply.payload,
            });
        }

        tracing::info!(
            provider = self.provider.name(),
            status = reply.status_code,
            "Notification accepted by provider"
        );

        Ok(reply.payload)
    }
}
