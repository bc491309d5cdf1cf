use axum::Json;
use axum::extract::State;
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::models::shared::ListQuery;
use crate::models::yolo_module::*;
use crate::repository::YoloModules;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "YOLO Modules",
    operation_id = "listYoloModules",
    summary = "List YOLO modules",
    params(ListQuery),
    responses(
        (status = 200, description = "List of YOLO modules", body = Vec<YoloModuleResponse>),
        (status = 400, description = "Invalid pagination parameters (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_yolo_modules(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<Vec<YoloModuleResponse>>, AppError> {
    query.validate()?;

    let modules = YoloModules::get_multi(&state.db, query.skip(), query.limit()).await?;
    Ok(Json(modules.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "YOLO Modules",
    operation_id = "createYoloModule",
    summary = "Create a YOLO module",
    description = "Creates a module under a YOLO version. Module names need not be unique. Referencing a version that does not exist fails with CONFLICT.",
    request_body = CreateYoloModuleRequest,
    responses(
        (status = 200, description = "YOLO module created", body = YoloModuleResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Unknown YOLO version (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name, version_id = payload.yolo_version_id))]
pub async fn create_yolo_module(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateYoloModuleRequest>,
) -> Result<Json<YoloModuleResponse>, AppError> {
    payload.validate()?;

    let model = YoloModules::create(&state.db, payload).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "YOLO Modules",
    operation_id = "getYoloModule",
    summary = "Get a YOLO module by ID",
    params(("id" = i32, Path, description = "YOLO module ID")),
    responses(
        (status = 200, description = "YOLO module details", body = YoloModuleResponse),
        (status = 404, description = "YOLO module not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_yolo_module(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<YoloModuleResponse>, AppError> {
    let model = YoloModules::get(&state.db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "YOLO Modules",
    operation_id = "updateYoloModule",
    summary = "Replace a YOLO module",
    params(("id" = i32, Path, description = "YOLO module ID")),
    request_body = UpdateYoloModuleRequest,
    responses(
        (status = 200, description = "YOLO module updated", body = YoloModuleResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "YOLO module not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Unknown YOLO version (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_yolo_module(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateYoloModuleRequest>,
) -> Result<Json<YoloModuleResponse>, AppError> {
    payload.validate()?;

    let txn = state.db.begin().await?;

    let existing = YoloModules::get(&txn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let model = YoloModules::update(&txn, existing, payload).await?;

    txn.commit().await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "YOLO Modules",
    operation_id = "deleteYoloModule",
    summary = "Delete a YOLO module",
    params(("id" = i32, Path, description = "YOLO module ID")),
    responses(
        (status = 200, description = "YOLO module deleted", body = YoloModuleResponse),
        (status = 404, description = "YOLO module not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_yolo_module(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<YoloModuleResponse>, AppError> {
    let txn = state.db.begin().await?;

    let removed = YoloModules::remove(&txn, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    txn.commit().await?;

    Ok(Json(removed.into()))
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("YOLO module {id} not found"))
}
