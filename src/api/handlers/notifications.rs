//! Notification relay API handlers.
//!
//! Provides the HTTP handler that accepts a notification request and relays
//! it to the configured push provider.

use crate::api::doc::NOTIFICATION_TAG;
use crate::api::dto::SendNotificationRequest;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Creates notification-related routes.
///
/// Routes:
/// - POST /notifications - Relay a push notification
pub fn notification_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(send_notification))
}

/// POST /api/notifications - Relay a push notification
///
/// Parses the request body, dispatches one call to the push provider and
/// forwards the provider's JSON payload to the caller. The body is read raw
/// and parsed by hand so a malformed payload maps onto the generic
/// internal-error response rather than an extractor rejection; parsed fields
/// are forwarded as-is, absent ones included.
#[utoipa::path(
    post,
    path = "/notifications",
    tag = NOTIFICATION_TAG,
    request_body = SendNotificationRequest,
    responses(
        (status = 200, description = "Provider accepted the notification; provider payload returned verbatim"),
        (status = 400, description = "Provider rejected the notification; provider status and payload returned verbatim"),
        (status = 500, description = "Missing provider credentials, malformed request body, or provider call failure")
    )
)]
async fn send_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let request: SendNotificationRequest =
        serde_json::from_slice(&body).map_err(|source| {
            tracing::error!(error = %source, "Failed to parse notification request body");
            AppError::MalformedRequest { source }
        })?;

    tracing::info!(
        player_id = ?request.onesignal_id,
        "Received notification request"
    );

    let payload = state
        .services
        .notifications
        .relay(request.into_message())
        .await?;

    // Always 200 on acceptance, regardless of the provider's exact 2xx code
    Ok((StatusCode::OK, Json(payload)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::create_router;
    use crate::config::settings::Settings;
    use crate::services::Services;
    use crate::services::notifications::testing::StaticReplyProvider;
    use crate::services::notifications::{OneSignalProvider, PushProvider};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, header::CONTENT_TYPE};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn app_with_provider(provider: Arc<dyn PushProvider>) -> Router {
        let state = AppState {
            services: Services::with_provider(provider),
            settings: Settings::default(),
        };
        create_router(state)
    }

    fn post_notification(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/notifications")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn test_success_returns_provider_payload_verbatim() {
        let provider = Arc::new(StaticReplyProvider::new(
            200,
            json!({"id": "notif-1", "recipients": 1}),
        ));
        let app = app_with_provider(provider.clone());

        let response = app
            .oneshot(post_notification(
                r#"{"onesignal_id":"abc123","title":"Hi","body":"Test"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, json!({"id": "notif-1", "recipients": 1}));
        assert_eq!(provider.send_count(), 1);
    }

    #[tokio::test]
    async fn test_success_is_always_200_even_for_other_2xx() {
        let provider = Arc::new(StaticReplyProvider::new(202, json!({"id": "queued"})));
        let app = app_with_provider(provider);

        let response = app
            .oneshot(post_notification(r#"{"onesignal_id":"abc123"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_provider_rejection_passes_status_and_payload_through() {
        let rejection = json!({"errors": ["All included players are not subscribed"]});
        let provider = Arc::new(StaticReplyProvider::new(400, rejection.clone()));
        let app = app_with_provider(provider.clone());

        let response = app
            .oneshot(post_notification(
                r#"{"onesignal_id":"bad-id","title":"Hi","body":"Test"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, rejection);
        assert_eq!(provider.send_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_returns_internal_error_without_dispatch() {
        let provider = Arc::new(StaticReplyProvider::new(200, json!({"id": "unreached"})));
        let app = app_with_provider(provider.clone());

        let response = app
            .oneshot(post_notification("this is not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await, b"Internal Server Error");
        assert_eq!(provider.send_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credentials_returns_configuration_error() {
        // Real provider without credentials: fails closed before any
        // network I/O (the api_url points at a closed port on purpose)
        let provider = Arc::new(OneSignalProvider::new(crate::config::OneSignalConfig {
            app_id: String::new(),
            api_key: String::new(),
            api_url: "http://127.0.0.1:1/api/v1/notifications".to_string(),
            timeout_seconds: 1,
        }));
        let app = app_with_provider(provider);

        let response = app
            .oneshot(post_notification(
                r#"{"onesignal_id":"abc123","title":"Hi","body":"Test"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await, b"Server configuration error");
    }

    #[tokio::test]
    async fn test_identical_requests_dispatch_independently() {
        let provider = Arc::new(StaticReplyProvider::new(200, json!({"id": "n"})));
        let app = app_with_provider(provider.clone());

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_notification(
                    r#"{"onesignal_id":"abc123","title":"Hi","body":"Test"}"#,
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        // No deduplication between identical requests
        assert_eq!(provider.send_count(), 2);
    }

    #[tokio::test]
    async fn test_absent_fields_are_relayed() {
        let provider = Arc::new(StaticReplyProvider::new(200, json!({"id": "n"})));
        let app = app_with_provider(provider.clone());

        let response = app.oneshot(post_notification("{}")).await.unwrap();

        // An empty object parses fine; absent fields are passed through
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(provider.send_count(), 1);
    }

    #[tokio::test]
    async fn test_response_carries_request_id_header() {
        let provider = Arc::new(StaticReplyProvider::new(200, json!({"id": "n"})));
        let app = app_with_provider(provider);

        let response = app
            .oneshot(post_notification(r#"{"onesignal_id":"abc123"}"#))
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }
}
