use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        hierarchy::{BlockDto, BlockPayload, BlockQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::block::BlockService,
    },
};

pub static BLOCK_TAG: &str = "block";

/// List blocks
#[utoipa::path(
    get,
    path = "/api/blocks",
    tag = BLOCK_TAG,
    params(BlockQuery),
    responses(
        (status = 200, description = "Page of blocks", body = PageResponse<BlockDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_blocks(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BlockQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = BlockService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a block by id
#[utoipa::path(
    get,
    path = "/api/blocks/{id}",
    tag = BLOCK_TAG,
    params(("id" = i32, Path, description = "Block id")),
    responses(
        (status = 200, description = "The block", body = DataResponse<BlockDto>),
        (status = 404, description = "Block not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_block(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let block = BlockService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(block))))
}

/// Create a block
#[utoipa::path(
    post,
    path = "/api/blocks",
    tag = BLOCK_TAG,
    request_body = BlockPayload,
    responses(
        (status = 201, description = "The created block", body = DataResponse<BlockDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_block(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<BlockPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let block = BlockService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(block))))
}

/// Update a block, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/blocks/{id}",
    tag = BLOCK_TAG,
    params(("id" = i32, Path, description = "Block id")),
    request_body = BlockPayload,
    responses(
        (status = 200, description = "The updated block", body = DataResponse<BlockDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Block not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_block(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<BlockPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let block = BlockService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(block))))
}

/// Delete a block
#[utoipa::path(
    delete,
    path = "/api/blocks/{id}",
    tag = BLOCK_TAG,
    params(("id" = i32, Path, description = "Block id")),
    responses(
        (status = 200, description = "Block deleted", body = DeletedResponse),
        (status = 400, description = "Block is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Block not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_block(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    BlockService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
