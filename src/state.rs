//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::settings::Settings;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since Services holds its provider behind an Arc.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Application settings, loaded once at startup and injected
    pub settings: Settings,
}

impl AppState {
    /// Creates a new AppState from application settings.
    ///
    /// Initializes all services from the provided settings.
    pub fn new(settings: Settings) -> Self {
        let services = Services::new(&settings);
        Self { services, settings }
    }
}
