//! Notification-related DTOs for API requests.

use crate::services::notifications::PushMessage;
use serde::Deserialize;
use utoipa::ToSchema;

/// Request to relay a push notification.
///
/// No schema validation is applied beyond a successful JSON parse: absent
/// fields are forwarded to the provider as absent values rather than being
/// rejected here.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "onesignal_id": "b186912c-cf25-4688-8218-06cd13c929c8",
    "title": "Hi",
    "body": "Test"
}))]
pub struct SendNotificationRequest {
    /// Recipient identifier in the provider's system
    pub onesignal_id: Option<String>,

    /// Notification heading
    pub title: Option<String>,

    /// Notification content
    pub body: Option<String>,
}

impl SendNotificationRequest {
    /// Converts the inbound request into the provider-facing message
    pub fn into_message(self) -> PushMessage {
        PushMessage {
            player_id: self.onesignal_id,
            title: self.title,
            body: self.body,
        }
    }
}
