//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! external collaborators and handlers.

pub mod notifications;

pub use notifications::NotificationService;

use crate::config::settings::Settings;
use crate::services::notifications::{OneSignalProvider, PushProvider};
use std::sync::Arc;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as part of the Axum application state.
/// Cloning is cheap since providers are held behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub notifications: NotificationService,
}

impl Services {
    /// Creates a new Services instance from application settings.
    ///
    /// The push provider is constructed once here and injected into the
    /// relay service; handlers never read process-wide state.
    pub fn new(settings: &Settings) -> Self {
        let provider: Arc<dyn PushProvider> =
            Arc::new(OneSignalProvider::new(settings.onesignal.clone()));
        Self::with_provider(provider)
    }

    /// Creates a Services instance over an explicit provider.
    pub fn with_provider(provider: Arc<dyn PushProvider>) -> Self {
        Self {
            notifications: NotificationService::new(provider),
        }
    }
}
