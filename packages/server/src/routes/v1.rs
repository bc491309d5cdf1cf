use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/yolo-versions", yolo_version_routes())
        .nest("/yolo-modules", yolo_module_routes())
}

fn yolo_version_routes() -> OpenApiRouter<AppState> {
    use handlers::yolo_version::*;

    OpenApiRouter::new()
        .routes(routes!(list_yolo_versions, create_yolo_version))
        .routes(routes!(
            get_yolo_version,
            update_yolo_version,
            delete_yolo_version
        ))
}

fn yolo_module_routes() -> OpenApiRouter<AppState> {
    use handlers::yolo_module::*;

    OpenApiRouter::new()
        .routes(routes!(list_yolo_modules, create_yolo_module))
        .routes(routes!(get_yolo_module, update_yolo_module, delete_yolo_module))
}
