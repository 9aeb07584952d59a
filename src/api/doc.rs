use utoipa::OpenApi;

pub const NOTIFICATION_TAG: &str = "Notifications";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pushgate",
        description = "A push notification relay for OneSignal",
    ),
    components(
        schemas(
            crate::api::dto::SendNotificationRequest,
            crate::api::handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = NOTIFICATION_TAG, description = "Notification relay endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
