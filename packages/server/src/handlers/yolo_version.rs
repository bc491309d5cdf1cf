use axum::Json;
use axum::extract::State;
use sea_orm::{DbErr, SqlErr, TransactionTrait};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::models::shared::ListQuery;
use crate::models::yolo_version::*;
use crate::repository::YoloVersions;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "YOLO Versions",
    operation_id = "listYoloVersions",
    summary = "List YOLO versions",
    description = "Returns YOLO versions in creation order using offset/limit pagination (`skip` defaults to 0, `limit` to 100).",
    params(ListQuery),
    responses(
        (status = 200, description = "List of YOLO versions", body = Vec<YoloVersionResponse>),
        (status = 400, description = "Invalid pagination parameters (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_yolo_versions(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<Vec<YoloVersionResponse>>, AppError> {
    query.validate()?;

    let versions = YoloVersions::get_multi(&state.db, query.skip(), query.limit()).await?;
    Ok(Json(versions.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "YOLO Versions",
    operation_id = "createYoloVersion",
    summary = "Create a YOLO version",
    description = "Creates a new YOLO version. Names are unique; creating a version whose name already exists fails with NAME_TAKEN and writes nothing.",
    request_body = CreateYoloVersionRequest,
    responses(
        (status = 200, description = "YOLO version created", body = YoloVersionResponse),
        (status = 400, description = "Validation error or duplicate name (VALIDATION_ERROR, NAME_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_yolo_version(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateYoloVersionRequest>,
) -> Result<Json<YoloVersionResponse>, AppError> {
    payload.validate()?;

    let name = payload.normalized_name().to_string();
    if YoloVersions::get_by_name(&state.db, &name).await?.is_some() {
        return Err(AppError::NameTaken(name));
    }

    let model = YoloVersions::create(&state.db, payload)
        .await
        .map_err(|e| name_taken_or(e, &name))?;

    tracing::info!(id = model.id, "YOLO version created");
    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "YOLO Versions",
    operation_id = "getYoloVersion",
    summary = "Get a YOLO version by ID",
    params(("id" = i32, Path, description = "YOLO version ID")),
    responses(
        (status = 200, description = "YOLO version details", body = YoloVersionResponse),
        (status = 404, description = "YOLO version not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_yolo_version(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<YoloVersionResponse>, AppError> {
    let model = YoloVersions::get(&state.db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "YOLO Versions",
    operation_id = "updateYoloVersion",
    summary = "Replace a YOLO version",
    description = "Overwrites name, description and architecture of an existing YOLO version. Omitted optional fields are cleared.",
    params(("id" = i32, Path, description = "YOLO version ID")),
    request_body = UpdateYoloVersionRequest,
    responses(
        (status = 200, description = "YOLO version updated", body = YoloVersionResponse),
        (status = 400, description = "Validation error or name used by another version (VALIDATION_ERROR, NAME_TAKEN)", body = ErrorBody),
        (status = 404, description = "YOLO version not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_yolo_version(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateYoloVersionRequest>,
) -> Result<Json<YoloVersionResponse>, AppError> {
    payload.validate()?;
    let name = payload.name.trim().to_string();

    let txn = state.db.begin().await?;

    let existing = YoloVersions::get(&txn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let model = YoloVersions::update(&txn, existing, payload)
        .await
        .map_err(|e| name_taken_or(e, &name))?;

    txn.commit().await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "YOLO Versions",
    operation_id = "deleteYoloVersion",
    summary = "Delete a YOLO version",
    description = "Deletes a YOLO version and returns it as it was before deletion. Fails with CONFLICT while modules still reference it.",
    params(("id" = i32, Path, description = "YOLO version ID")),
    responses(
        (status = 200, description = "YOLO version deleted", body = YoloVersionResponse),
        (status = 404, description = "YOLO version not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Still referenced by modules (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_yolo_version(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<YoloVersionResponse>, AppError> {
    let txn = state.db.begin().await?;

    let removed = YoloVersions::remove(&txn, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    txn.commit().await?;

    tracing::info!(id, "YOLO version deleted");
    Ok(Json(removed.into()))
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("YOLO version {id} not found"))
}

/// The name check runs before the write without isolation, so the unique
/// index has the final say.
fn name_taken_or(err: DbErr, name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::debug!("Duplicate YOLO version name caught by unique constraint");
            AppError::NameTaken(name.to_string())
        }
        _ => AppError::from(err),
    }
}
