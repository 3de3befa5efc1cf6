use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        hierarchy::{ParliamentDto, ParliamentPayload, ParliamentQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::parliament::ParliamentService,
    },
};

pub static PARLIAMENT_TAG: &str = "parliament";

/// List parliamentary constituencies
#[utoipa::path(
    get,
    path = "/api/parliaments",
    tag = PARLIAMENT_TAG,
    params(ParliamentQuery),
    responses(
        (status = 200, description = "Page of parliamentary constituencies", body = PageResponse<ParliamentDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_parliaments(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ParliamentQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = ParliamentService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a parliamentary constituency by id
#[utoipa::path(
    get,
    path = "/api/parliaments/{id}",
    tag = PARLIAMENT_TAG,
    params(("id" = i32, Path, description = "Parliamentary constituency id")),
    responses(
        (status = 200, description = "The parliamentary constituency", body = DataResponse<ParliamentDto>),
        (status = 404, description = "Parliamentary constituency not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parliament(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let parliament = ParliamentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(parliament))))
}

/// Create a parliamentary constituency
#[utoipa::path(
    post,
    path = "/api/parliaments",
    tag = PARLIAMENT_TAG,
    request_body = ParliamentPayload,
    responses(
        (status = 201, description = "The created parliamentary constituency", body = DataResponse<ParliamentDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_parliament(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<ParliamentPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let parliament = ParliamentService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(parliament))))
}

/// Update a parliamentary constituency, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/parliaments/{id}",
    tag = PARLIAMENT_TAG,
    params(("id" = i32, Path, description = "Parliamentary constituency id")),
    request_body = ParliamentPayload,
    responses(
        (status = 200, description = "The updated parliamentary constituency", body = DataResponse<ParliamentDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Parliamentary constituency not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_parliament(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<ParliamentPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let parliament = ParliamentService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(parliament))))
}

/// Delete a parliamentary constituency
#[utoipa::path(
    delete,
    path = "/api/parliaments/{id}",
    tag = PARLIAMENT_TAG,
    params(("id" = i32, Path, description = "Parliamentary constituency id")),
    responses(
        (status = 200, description = "Parliamentary constituency deleted", body = DeletedResponse),
        (status = 400, description = "Parliamentary constituency is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Parliamentary constituency not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_parliament(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    ParliamentService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
