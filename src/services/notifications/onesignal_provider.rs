//! OneSignal notification provider implementation.
//!
//! Sends push notifications via the OneSignal create-notification REST API.
//! Uses the global `HTTP_CLIENT` for connection pooling and efficiency.
//!
//! OneSignal API Reference: https://documentation.onesignal.com/reference/create-notification

use super::provider::{ProviderReply, PushMessage, PushProvider};
use crate::config::OneSignalConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::time::Duration;

/// OneSignal push provider
///
/// Relays notifications to the OneSignal create-notification endpoint with
/// basic-auth authentication. Credential presence is checked before any
/// network I/O: a deployment without secrets fails closed without ever
/// touching the provider.
#[derive(Clone)]
pub struct OneSignalProvider {
    config: OneSignalConfig,
}

/// Wire format of the create-notification request body.
///
/// An absent recipient serializes as a single `null` entry, and an absent
/// title/body serializes as an empty `headings`/`contents` object, matching
/// what the provider receives from loosely-validated callers.
#[derive(Debug, Serialize)]
struct CreateNotification<'a> {
    app_id: &'a str,
    include_player_ids: Vec<Option<&'a str>>,
    headings: LocalizedText<'a>,
    contents: LocalizedText<'a>,
}

/// Single-locale text wrapper; content is always tagged as English.
#[derive(Debug, Serialize)]
struct LocalizedText<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    en: Option<&'a str>,
}

impl OneSignalProvider {
    /// Creates a new OneSignal provider with configuration
    pub fn new(config: OneSignalConfig) -> Self {
        Self { config }
    }

    /// Builds the request body for the create-notification API
    fn request_body<'a>(&'a self, message: &'a PushMessage) -> CreateNotification<'a> {
        CreateNotification {
            app_id: &self.config.app_id,
            include_player_ids: vec![message.player_id.as_deref()],
            headings: LocalizedText {
                en: message.title.as_deref(),
            },
            contents: LocalizedText {
                en: message.body.as_deref(),
            },
        }
    }
}

#[async_trait]
impl PushProvider for OneSignalProvider {
    /// Sends a notification via OneSignal.
    ///
    /// Issues exactly one HTTP POST with an explicit per-request timeout.
    /// The provider's response body is parsed as JSON regardless of status
    /// code; the status is surfaced in the reply for the caller to relay.
    async fn send(&self, message: &PushMessage) -> AppResult<ProviderReply> {
        if !self.config.has_credentials() {
            tracing::error!(
                provider = self.name(),
                "Provider credentials are not configured, refusing to dispatch"
            );
            return Err(AppError::MissingConfiguration);
        }

        let request_body = self.request_body(message);

        let response = HTTP_CLIENT
            .post(&self.config.api_url)
            .header(AUTHORIZATION, format!("Basic {}", self.config.api_key))
            .header(CONTENT_TYPE, "application/json")
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = self.name(), error = %e, "Provider call failed");
                AppError::Upstream { source: e.into() }
            })?;

        let status = response.status();

        // Parsed regardless of status; a non-JSON body is an upstream failure
        let payload: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!(
                provider = self.name(),
                status = status.as_u16(),
                error = %e,
                "Provider response body is not valid JSON"
            );
            AppError::Upstream { source: e.into() }
        })?;

        tracing::debug!(
            provider = self.name(),
            status = status.as_u16(),
            "Provider responded"
        );

        Ok(ProviderReply {
            status_code: status.as_u16(),
            payload,
        })
    }

    fn name(&self) -> &'static str {
        "onesignal"
    }
}
