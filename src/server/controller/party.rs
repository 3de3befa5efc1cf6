use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        party::{PartyDto, PartyPayload, PartyQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::party::PartyService,
    },
};

pub static PARTY_TAG: &str = "party";

/// List parties
#[utoipa::path(
    get,
    path = "/api/parties",
    tag = PARTY_TAG,
    params(PartyQuery),
    responses(
        (status = 200, description = "Page of parties", body = PageResponse<PartyDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_parties(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PartyQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = PartyService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a party by id
#[utoipa::path(
    get,
    path = "/api/parties/{id}",
    tag = PARTY_TAG,
    params(("id" = i32, Path, description = "Party id")),
    responses(
        (status = 200, description = "The party", body = DataResponse<PartyDto>),
        (status = 404, description = "Party not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_party(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let party = PartyService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(party))))
}

/// Create a party
#[utoipa::path(
    post,
    path = "/api/parties",
    tag = PARTY_TAG,
    request_body = PartyPayload,
    responses(
        (status = 201, description = "The created party", body = DataResponse<PartyDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_party(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<PartyPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let party = PartyService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(party))))
}

/// Update a party, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/parties/{id}",
    tag = PARTY_TAG,
    params(("id" = i32, Path, description = "Party id")),
    request_body = PartyPayload,
    responses(
        (status = 200, description = "The updated party", body = DataResponse<PartyDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Party not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_party(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<PartyPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let party = PartyService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(party))))
}

/// Delete a party
#[utoipa::path(
    delete,
    path = "/api/parties/{id}",
    tag = PARTY_TAG,
    params(("id" = i32, Path, description = "Party id")),
    responses(
        (status = 200, description = "Party deleted", body = DeletedResponse),
        (status = 400, description = "Party is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Party not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_party(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    PartyService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
