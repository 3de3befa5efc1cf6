use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        hierarchy::{StateDto, StatePayload, StateQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::state::StateService,
    },
};

pub static STATE_TAG: &str = "state";

/// List states
#[utoipa::path(
    get,
    path = "/api/states",
    tag = STATE_TAG,
    params(StateQuery),
    responses(
        (status = 200, description = "Page of states", body = PageResponse<StateDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_states(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<StateQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = StateService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a state by id
#[utoipa::path(
    get,
    path = "/api/states/{id}",
    tag = STATE_TAG,
    params(("id" = i32, Path, description = "State id")),
    responses(
        (status = 200, description = "The state", body = DataResponse<StateDto>),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_state(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let state = StateService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(state))))
}

/// Create a state
#[utoipa::path(
    post,
    path = "/api/states",
    tag = STATE_TAG,
    request_body = StatePayload,
    responses(
        (status = 201, description = "The created state", body = DataResponse<StateDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_state(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<StatePayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let state = StateService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(state))))
}

/// Update a state, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/states/{id}",
    tag = STATE_TAG,
    params(("id" = i32, Path, description = "State id")),
    request_body = StatePayload,
    responses(
        (status = 200, description = "The updated state", body = DataResponse<StateDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_state(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<StatePayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let state = StateService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(state))))
}

/// Delete a state
#[utoipa::path(
    delete,
    path = "/api/states/{id}",
    tag = STATE_TAG,
    params(("id" = i32, Path, description = "State id")),
    responses(
        (status = 200, description = "State deleted", body = DeletedResponse),
        (status = 400, description = "State is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_state(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    StateService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
