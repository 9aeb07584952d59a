//! Notification relay with a pluggable provider.
//!
//! The core trait `PushProvider` keeps the relay independent of the concrete
//! vendor API and gives tests a seam to substitute the outbound call.

mod onesignal_provider;
mod provider;

pub mod notification_service;

pub use notification_service::NotificationService;
pub use onesignal_provider::OneSignalProvider;
pub use provider::{ProviderReply, PushMessage, PushProvider};

#[cfg(test)]
pub(crate) use provider::testing;
