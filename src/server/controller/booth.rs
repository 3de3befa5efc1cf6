use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        hierarchy::{BoothDto, BoothPayload, BoothQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::booth::BoothService,
    },
};

pub static BOOTH_TAG: &str = "booth";

/// List booths
#[utoipa::path(
    get,
    path = "/api/booths",
    tag = BOOTH_TAG,
    params(BoothQuery),
    responses(
        (status = 200, description = "Page of booths", body = PageResponse<BoothDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_booths(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BoothQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = BoothService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a booth by id
#[utoipa::path(
    get,
    path = "/api/booths/{id}",
    tag = BOOTH_TAG,
    params(("id" = i32, Path, description = "Booth id")),
    responses(
        (status = 200, description = "The booth", body = DataResponse<BoothDto>),
        (status = 404, description = "Booth not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booth(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let booth = BoothService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booth))))
}

/// Create a booth
#[utoipa::path(
    post,
    path = "/api/booths",
    tag = BOOTH_TAG,
    request_body = BoothPayload,
    responses(
        (status = 201, description = "The created booth", body = DataResponse<BoothDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booth(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<BoothPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let booth = BoothService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(booth))))
}

/// Update a booth, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/booths/{id}",
    tag = BOOTH_TAG,
    params(("id" = i32, Path, description = "Booth id")),
    request_body = BoothPayload,
    responses(
        (status = 200, description = "The updated booth", body = DataResponse<BoothDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Booth not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booth(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<BoothPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let booth = BoothService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booth))))
}

/// Delete a booth
#[utoipa::path(
    delete,
    path = "/api/booths/{id}",
    tag = BOOTH_TAG,
    params(("id" = i32, Path, description = "Booth id")),
    responses(
        (status = 200, description = "Booth deleted", body = DeletedResponse),
        (status = 400, description = "Booth is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Booth not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booth(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    BoothService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}

/// List the booths of a block
#[utoipa::path(
    get,
    path = "/api/booths/block/{block_id}",
    tag = BOOTH_TAG,
    params(("block_id" = i32, Path, description = "Block id"), BoothQuery),
    responses(
        (status = 200, description = "Page of matching records", body = PageResponse<BoothDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_booths_by_block(
    State(state): State<AppState>,
    PathParams(block_id): PathParams<i32>,
    QueryParams(query): QueryParams<BoothQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = BoothService::new(&state.db).list_by_block(block_id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}
