use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        booth_volunteer::{BoothVolunteerDto, BoothVolunteerPayload, BoothVolunteerQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::booth_volunteer::BoothVolunteerService,
    },
};

pub static BOOTH_VOLUNTEER_TAG: &str = "booth-volunteer";

/// List booth volunteers
#[utoipa::path(
    get,
    path = "/api/booth-volunteers",
    tag = BOOTH_VOLUNTEER_TAG,
    params(BoothVolunteerQuery),
    responses(
        (status = 200, description = "Page of booth volunteers", body = PageResponse<BoothVolunteerDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_booth_volunteers(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BoothVolunteerQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = BoothVolunteerService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a booth volunteer by id
#[utoipa::path(
    get,
    path = "/api/booth-volunteers/{id}",
    tag = BOOTH_VOLUNTEER_TAG,
    params(("id" = i32, Path, description = "Booth volunteer id")),
    responses(
        (status = 200, description = "The booth volunteer", body = DataResponse<BoothVolunteerDto>),
        (status = 404, description = "Booth volunteer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booth_volunteer(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let booth_volunteer = BoothVolunteerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booth_volunteer))))
}

/// Create a booth volunteer
#[utoipa::path(
    post,
    path = "/api/booth-volunteers",
    tag = BOOTH_VOLUNTEER_TAG,
    request_body = BoothVolunteerPayload,
    responses(
        (status = 201, description = "The created booth volunteer", body = DataResponse<BoothVolunteerDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booth_volunteer(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<BoothVolunteerPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let booth_volunteer = BoothVolunteerService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(booth_volunteer))))
}

/// Update a booth volunteer, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/booth-volunteers/{id}",
    tag = BOOTH_VOLUNTEER_TAG,
    params(("id" = i32, Path, description = "Booth volunteer id")),
    request_body = BoothVolunteerPayload,
    responses(
        (status = 200, description = "The updated booth volunteer", body = DataResponse<BoothVolunteerDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Booth volunteer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booth_volunteer(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<BoothVolunteerPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let booth_volunteer = BoothVolunteerService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booth_volunteer))))
}

/// Delete a booth volunteer
#[utoipa::path(
    delete,
    path = "/api/booth-volunteers/{id}",
    tag = BOOTH_VOLUNTEER_TAG,
    params(("id" = i32, Path, description = "Booth volunteer id")),
    responses(
        (status = 200, description = "Booth volunteer deleted", body = DeletedResponse),
        (status = 400, description = "Booth volunteer is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Booth volunteer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booth_volunteer(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    BoothVolunteerService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
