use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        potential_candidate::{
            PotentialCandidateDto, PotentialCandidatePayload, PotentialCandidateQuery,
        },
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::potential_candidate::PotentialCandidateService,
    },
};

pub static POTENTIAL_CANDIDATE_TAG: &str = "potential-candidate";

/// List potential candidates
#[utoipa::path(
    get,
    path = "/api/potential-candidates",
    tag = POTENTIAL_CANDIDATE_TAG,
    params(PotentialCandidateQuery),
    responses(
        (status = 200, description = "Page of potential candidates", body = PageResponse<PotentialCandidateDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_potential_candidates(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PotentialCandidateQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = PotentialCandidateService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a potential candidate by id
#[utoipa::path(
    get,
    path = "/api/potential-candidates/{id}",
    tag = POTENTIAL_CANDIDATE_TAG,
    params(("id" = i32, Path, description = "Potential candidate id")),
    responses(
        (status = 200, description = "The potential candidate", body = DataResponse<PotentialCandidateDto>),
        (status = 404, description = "Potential candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_potential_candidate(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let potential_candidate = PotentialCandidateService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(potential_candidate))))
}

/// Create a potential candidate
#[utoipa::path(
    post,
    path = "/api/potential-candidates",
    tag = POTENTIAL_CANDIDATE_TAG,
    request_body = PotentialCandidatePayload,
    responses(
        (status = 201, description = "The created potential candidate", body = DataResponse<PotentialCandidateDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_potential_candidate(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<PotentialCandidatePayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let potential_candidate = PotentialCandidateService::new(&state.db)
        .create(&auth, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(potential_candidate))))
}

/// Update a potential candidate, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/potential-candidates/{id}",
    tag = POTENTIAL_CANDIDATE_TAG,
    params(("id" = i32, Path, description = "Potential candidate id")),
    request_body = PotentialCandidatePayload,
    responses(
        (status = 200, description = "The updated potential candidate", body = DataResponse<PotentialCandidateDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Potential candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_potential_candidate(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<PotentialCandidatePayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let potential_candidate = PotentialCandidateService::new(&state.db)
        .update(&auth, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(potential_candidate))))
}

/// Delete a potential candidate
#[utoipa::path(
    delete,
    path = "/api/potential-candidates/{id}",
    tag = POTENTIAL_CANDIDATE_TAG,
    params(("id" = i32, Path, description = "Potential candidate id")),
    responses(
        (status = 200, description = "Potential candidate deleted", body = DeletedResponse),
        (status = 400, description = "Potential candidate is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Potential candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_potential_candidate(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    PotentialCandidateService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
