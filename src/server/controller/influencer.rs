use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        influencer::{InfluencerDto, InfluencerPayload, InfluencerQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::influencer::InfluencerService,
    },
};

pub static INFLUENCER_TAG: &str = "influencer";

/// List influencers
#[utoipa::path(
    get,
    path = "/api/influencers",
    tag = INFLUENCER_TAG,
    params(InfluencerQuery),
    responses(
        (status = 200, description = "Page of influencers", body = PageResponse<InfluencerDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_influencers(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<InfluencerQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = InfluencerService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get an influencer by id
#[utoipa::path(
    get,
    path = "/api/influencers/{id}",
    tag = INFLUENCER_TAG,
    params(("id" = i32, Path, description = "Influencer id")),
    responses(
        (status = 200, description = "The influencer", body = DataResponse<InfluencerDto>),
        (status = 404, description = "Influencer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_influencer(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let influencer = InfluencerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(influencer))))
}

/// Create an influencer
#[utoipa::path(
    post,
    path = "/api/influencers",
    tag = INFLUENCER_TAG,
    request_body = InfluencerPayload,
    responses(
        (status = 201, description = "The created influencer", body = DataResponse<InfluencerDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_influencer(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<InfluencerPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let influencer = InfluencerService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(influencer))))
}

/// Update an influencer, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/influencers/{id}",
    tag = INFLUENCER_TAG,
    params(("id" = i32, Path, description = "Influencer id")),
    request_body = InfluencerPayload,
    responses(
        (status = 200, description = "The updated influencer", body = DataResponse<InfluencerDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Influencer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_influencer(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<InfluencerPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let influencer = InfluencerService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(influencer))))
}

/// Delete an influencer
#[utoipa::path(
    delete,
    path = "/api/influencers/{id}",
    tag = INFLUENCER_TAG,
    params(("id" = i32, Path, description = "Influencer id")),
    responses(
        (status = 200, description = "Influencer deleted", body = DeletedResponse),
        (status = 400, description = "Influencer is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Influencer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_influencer(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    InfluencerService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}

/// List the influencers of a state
#[utoipa::path(
    get,
    path = "/api/influencers/state/{state_id}",
    tag = INFLUENCER_TAG,
    params(("state_id" = i32, Path, description = "State id"), InfluencerQuery),
    responses(
        (status = 200, description = "Page of matching records", body = PageResponse<InfluencerDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_influencers_by_state(
    State(state): State<AppState>,
    PathParams(state_id): PathParams<i32>,
    QueryParams(query): QueryParams<InfluencerQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = InfluencerService::new(&state.db).list_by_state(state_id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// List the influencers of an assembly
#[utoipa::path(
    get,
    path = "/api/influencers/assembly/{assembly_id}",
    tag = INFLUENCER_TAG,
    params(("assembly_id" = i32, Path, description = "Assembly id"), InfluencerQuery),
    responses(
        (status = 200, description = "Page of matching records", body = PageResponse<InfluencerDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_influencers_by_assembly(
    State(state): State<AppState>,
    PathParams(assembly_id): PathParams<i32>,
    QueryParams(query): QueryParams<InfluencerQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = InfluencerService::new(&state.db).list_by_assembly(assembly_id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// List the influencers of a booth
#[utoipa::path(
    get,
    path = "/api/influencers/booth/{booth_id}",
    tag = INFLUENCER_TAG,
    params(("booth_id" = i32, Path, description = "Booth id"), InfluencerQuery),
    responses(
        (status = 200, description = "Page of matching records", body = PageResponse<InfluencerDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_influencers_by_booth(
    State(state): State<AppState>,
    PathParams(booth_id): PathParams<i32>,
    QueryParams(query): QueryParams<InfluencerQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = InfluencerService::new(&state.db).list_by_booth(booth_id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}
