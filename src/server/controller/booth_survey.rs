use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        booth_survey::{BoothSurveyDto, BoothSurveyPayload, BoothSurveyQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::booth_survey::BoothSurveyService,
    },
};

pub static BOOTH_SURVEY_TAG: &str = "booth-survey";

/// List booth surveys
#[utoipa::path(
    get,
    path = "/api/booth-surveys",
    tag = BOOTH_SURVEY_TAG,
    params(BoothSurveyQuery),
    responses(
        (status = 200, description = "Page of booth surveys", body = PageResponse<BoothSurveyDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_booth_surveys(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BoothSurveyQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = BoothSurveyService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a booth survey by id
#[utoipa::path(
    get,
    path = "/api/booth-surveys/{id}",
    tag = BOOTH_SURVEY_TAG,
    params(("id" = i32, Path, description = "Booth survey id")),
    responses(
        (status = 200, description = "The booth survey", body = DataResponse<BoothSurveyDto>),
        (status = 404, description = "Booth survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booth_survey(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let booth_survey = BoothSurveyService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booth_survey))))
}

/// Create a booth survey
#[utoipa::path(
    post,
    path = "/api/booth-surveys",
    tag = BOOTH_SURVEY_TAG,
    request_body = BoothSurveyPayload,
    responses(
        (status = 201, description = "The created booth survey", body = DataResponse<BoothSurveyDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booth_survey(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<BoothSurveyPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let booth_survey = BoothSurveyService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(booth_survey))))
}

/// Update a booth survey, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/booth-surveys/{id}",
    tag = BOOTH_SURVEY_TAG,
    params(("id" = i32, Path, description = "Booth survey id")),
    request_body = BoothSurveyPayload,
    responses(
        (status = 200, description = "The updated booth survey", body = DataResponse<BoothSurveyDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Booth survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booth_survey(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<BoothSurveyPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let booth_survey = BoothSurveyService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(booth_survey))))
}

/// Delete a booth survey
#[utoipa::path(
    delete,
    path = "/api/booth-surveys/{id}",
    tag = BOOTH_SURVEY_TAG,
    params(("id" = i32, Path, description = "Booth survey id")),
    responses(
        (status = 200, description = "Booth survey deleted", body = DeletedResponse),
        (status = 400, description = "Booth survey is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Booth survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booth_survey(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    BoothSurveyService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
