use axum::Json;
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to YOLO-AUTO API")]
    pub message: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    operation_id = "welcome",
    summary = "Service greeting",
    responses((status = 200, description = "Greeting", body = WelcomeResponse)),
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to YOLO-AUTO API",
    })
}
