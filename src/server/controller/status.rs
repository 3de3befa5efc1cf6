use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        status::{StatusDto, StatusPayload, StatusQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::status::StatusService,
    },
};

pub static STATUS_TAG: &str = "status";

/// List statuses
#[utoipa::path(
    get,
    path = "/api/statuses",
    tag = STATUS_TAG,
    params(StatusQuery),
    responses(
        (status = 200, description = "Page of statuses", body = PageResponse<StatusDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_statuses(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<StatusQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = StatusService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a status by id
#[utoipa::path(
    get,
    path = "/api/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status id")),
    responses(
        (status = 200, description = "The status", body = DataResponse<StatusDto>),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let status = StatusService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(status))))
}

/// Create a status
#[utoipa::path(
    post,
    path = "/api/statuses",
    tag = STATUS_TAG,
    request_body = StatusPayload,
    responses(
        (status = 201, description = "The created status", body = DataResponse<StatusDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_status(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<StatusPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let status = StatusService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(status))))
}

/// Update a status, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status id")),
    request_body = StatusPayload,
    responses(
        (status = 200, description = "The updated status", body = DataResponse<StatusDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<StatusPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let status = StatusService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(status))))
}

/// Delete a status
#[utoipa::path(
    delete,
    path = "/api/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status id")),
    responses(
        (status = 200, description = "Status deleted", body = DeletedResponse),
        (status = 400, description = "Status is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_status(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    StatusService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}

/// Flip whether a status is active, system statuses cannot be deactivated
#[utoipa::path(
    patch,
    path = "/api/statuses/{id}/toggle-active",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status id")),
    responses(
        (status = 200, description = "The updated status", body = DataResponse<StatusDto>),
        (status = 400, description = "System status cannot be deactivated", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_status_active(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let status = StatusService::new(&state.db).toggle_active(&auth, id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(status))))
}
