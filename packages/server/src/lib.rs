pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod state;

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "YOLO-AUTO API",
        version = "0.1.0",
        description = "Backend services for the YOLO-AUTO platform"
    ),
    tags(
        (name = "Meta", description = "Service information"),
        (name = "YOLO Versions", description = "YOLO version CRUD operations"),
        (name = "YOLO Modules", description = "YOLO module CRUD operations"),
    ),
)]
struct ApiDoc;

/// Build the application router.
///
/// API routes accept an optional trailing slash (`/api/v1/yolo-versions/`);
/// the documentation UIs are mounted outside that normalization.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors_layer(&state.config.server.cors);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::root_routes())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    let router = router
        .with_state(state)
        .layer(cors)
        .layer(middleware::trace_layer());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .fallback_service(NormalizePathLayer::trim_trailing_slash().layer(router))
}
