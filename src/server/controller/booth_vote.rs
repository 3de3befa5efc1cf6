use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        booth_vote::{BoothVoteDto, BoothVotePayload, BoothVoteQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::booth_vote::BoothVoteService,
    },
};

pub static BOOTH_VOTE_TAG: &str = "booth-vote";

/// List booth vote counts
#[utoipa::path(
    get,
    path = "/api/booth-votes",
    tag = BOOTH_VOTE_TAG,
    params(BoothVoteQuery),
    responses(
        (status = 200, description = "Page of booth vote counts", body = PageResponse<BoothVoteDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_booth_votes(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BoothVoteQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = BoothVoteService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a booth vote count by id
#[utoipa::path(
    get,
    path = "/api/booth-votes/{id}",
    tag = BOOTH_VOTE_TAG,
    params(("id" = i32, Path, description = "Booth vote count id")),
    responses(
        (status = 200, description = "The booth vote count", body = DataResponse<BoothVoteDto>),
        (status = 404, description = "Booth vote count not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booth_vote(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let booth_vote = BoothVoteService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booth_vote))))
}

/// Create a booth vote count
#[utoipa::path(
    post,
    path = "/api/booth-votes",
    tag = BOOTH_VOTE_TAG,
    request_body = BoothVotePayload,
    responses(
        (status = 201, description = "The created booth vote count", body = DataResponse<BoothVoteDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booth_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<BoothVotePayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let booth_vote = BoothVoteService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(booth_vote))))
}

/// Update a booth vote count, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/booth-votes/{id}",
    tag = BOOTH_VOTE_TAG,
    params(("id" = i32, Path, description = "Booth vote count id")),
    request_body = BoothVotePayload,
    responses(
        (status = 200, description = "The updated booth vote count", body = DataResponse<BoothVoteDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Booth vote count not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booth_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<BoothVotePayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let booth_vote = BoothVoteService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booth_vote))))
}

/// Delete a booth vote count
#[utoipa::path(
    delete,
    path = "/api/booth-votes/{id}",
    tag = BOOTH_VOTE_TAG,
    params(("id" = i32, Path, description = "Booth vote count id")),
    responses(
        (status = 200, description = "Booth vote count deleted", body = DeletedResponse),
        (status = 400, description = "Booth vote count is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Booth vote count not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booth_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    BoothVoteService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
