mod v1;

use utoipa_axum::{router::OpenApiRouter, routes};

use crate::state::AppState;

pub fn root_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::root::*;

    OpenApiRouter::new().routes(routes!(welcome))
}

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/v1", v1::routes())
}
