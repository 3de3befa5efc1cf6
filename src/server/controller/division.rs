use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        hierarchy::{DivisionDto, DivisionPayload, DivisionQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::division::DivisionService,
    },
};

pub static DIVISION_TAG: &str = "division";

/// List divisions
#[utoipa::path(
    get,
    path = "/api/divisions",
    tag = DIVISION_TAG,
    params(DivisionQuery),
    responses(
        (status = 200, description = "Page of divisions", body = PageResponse<DivisionDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_divisions(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DivisionQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = DivisionService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a division by id
#[utoipa::path(
    get,
    path = "/api/divisions/{id}",
    tag = DIVISION_TAG,
    params(("id" = i32, Path, description = "Division id")),
    responses(
        (status = 200, description = "The division", body = DataResponse<DivisionDto>),
        (status = 404, description = "Division not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_division(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let division = DivisionService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(division))))
}

/// Create a division
#[utoipa::path(
    post,
    path = "/api/divisions",
    tag = DIVISION_TAG,
    request_body = DivisionPayload,
    responses(
        (status = 201, description = "The created division", body = DataResponse<DivisionDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_division(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<DivisionPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let division = DivisionService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(division))))
}

/// Update a division, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/divisions/{id}",
    tag = DIVISION_TAG,
    params(("id" = i32, Path, description = "Division id")),
    request_body = DivisionPayload,
    responses(
        (status = 200, description = "The updated division", body = DataResponse<DivisionDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Division not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_division(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<DivisionPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let division = DivisionService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(division))))
}

/// Delete a division
#[utoipa::path(
    delete,
    path = "/api/divisions/{id}",
    tag = DIVISION_TAG,
    params(("id" = i32, Path, description = "Division id")),
    responses(
        (status = 200, description = "Division deleted", body = DeletedResponse),
        (status = 400, description = "Division is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Division not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_division(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    DivisionService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
