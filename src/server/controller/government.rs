use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        government::{GovernmentDto, GovernmentPayload, GovernmentQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::government::GovernmentService,
    },
};

pub static GOVERNMENT_TAG: &str = "government";

/// List government projects
#[utoipa::path(
    get,
    path = "/api/governments",
    tag = GOVERNMENT_TAG,
    params(GovernmentQuery),
    responses(
        (status = 200, description = "Page of government projects", body = PageResponse<GovernmentDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_governments(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<GovernmentQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = GovernmentService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a government project by id
#[utoipa::path(
    get,
    path = "/api/governments/{id}",
    tag = GOVERNMENT_TAG,
    params(("id" = i32, Path, description = "Government project id")),
    responses(
        (status = 200, description = "The government project", body = DataResponse<GovernmentDto>),
        (status = 404, description = "Government project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_government(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let government = GovernmentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(government))))
}

/// Create a government project
#[utoipa::path(
    post,
    path = "/api/governments",
    tag = GOVERNMENT_TAG,
    request_body = GovernmentPayload,
    responses(
        (status = 201, description = "The created government project", body = DataResponse<GovernmentDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_government(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<GovernmentPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let government = GovernmentService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(government))))
}

/// Update a government project, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/governments/{id}",
    tag = GOVERNMENT_TAG,
    params(("id" = i32, Path, description = "Government project id")),
    request_body = GovernmentPayload,
    responses(
        (status = 200, description = "The updated government project", body = DataResponse<GovernmentDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Government project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_government(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<GovernmentPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let government = GovernmentService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(government))))
}

/// Delete a government project
#[utoipa::path(
    delete,
    path = "/api/governments/{id}",
    tag = GOVERNMENT_TAG,
    params(("id" = i32, Path, description = "Government project id")),
    responses(
        (status = 200, description = "Government project deleted", body = DeletedResponse),
        (status = 400, description = "Government project is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Government project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_government(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    GovernmentService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}

/// List the government projects of a state
#[utoipa::path(
    get,
    path = "/api/governments/state/{state_id}",
    tag = GOVERNMENT_TAG,
    params(("state_id" = i32, Path, description = "State id"), GovernmentQuery),
    responses(
        (status = 200, description = "Page of matching records", body = PageResponse<GovernmentDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_governments_by_state(
    State(state): State<AppState>,
    PathParams(state_id): PathParams<i32>,
    QueryParams(query): QueryParams<GovernmentQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = GovernmentService::new(&state.db).list_by_state(state_id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// List the government projects of an assembly
#[utoipa::path(
    get,
    path = "/api/governments/assembly/{assembly_id}",
    tag = GOVERNMENT_TAG,
    params(("assembly_id" = i32, Path, description = "Assembly id"), GovernmentQuery),
    responses(
        (status = 200, description = "Page of matching records", body = PageResponse<GovernmentDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 404, description = "Assembly not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_governments_by_assembly(
    State(state): State<AppState>,
    PathParams(assembly_id): PathParams<i32>,
    QueryParams(query): QueryParams<GovernmentQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = GovernmentService::new(&state.db).list_by_assembly(assembly_id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}
