use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        candidate::{CandidateDto, CandidatePayload, CandidateQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::candidate::CandidateService,
    },
};

pub static CANDIDATE_TAG: &str = "candidate";

/// List candidates
#[utoipa::path(
    get,
    path = "/api/candidates",
    tag = CANDIDATE_TAG,
    params(CandidateQuery),
    responses(
        (status = 200, description = "Page of candidates", body = PageResponse<CandidateDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_candidates(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<CandidateQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = CandidateService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a candidate by id
#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    tag = CANDIDATE_TAG,
    params(("id" = i32, Path, description = "Candidate id")),
    responses(
        (status = 200, description = "The candidate", body = DataResponse<CandidateDto>),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_candidate(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let candidate = CandidateService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(candidate))))
}

/// Create a candidate
#[utoipa::path(
    post,
    path = "/api/candidates",
    tag = CANDIDATE_TAG,
    request_body = CandidatePayload,
    responses(
        (status = 201, description = "The created candidate", body = DataResponse<CandidateDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_candidate(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<CandidatePayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let candidate = CandidateService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(candidate))))
}

/// Update a candidate, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    tag = CANDIDATE_TAG,
    params(("id" = i32, Path, description = "Candidate id")),
    request_body = CandidatePayload,
    responses(
        (status = 200, description = "The updated candidate", body = DataResponse<CandidateDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_candidate(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<CandidatePayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let candidate = CandidateService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(candidate))))
}

/// Delete a candidate
#[utoipa::path(
    delete,
    path = "/api/candidates/{id}",
    tag = CANDIDATE_TAG,
    params(("id" = i32, Path, description = "Candidate id")),
    responses(
        (status = 200, description = "Candidate deleted", body = DeletedResponse),
        (status = 400, description = "Candidate is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_candidate(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    CandidateService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}

/// List the candidates contesting an assembly
#[utoipa::path(
    get,
    path = "/api/candidates/assembly/{assembly_id}",
    tag = CANDIDATE_TAG,
    params(("assembly_id" = i32, Path, description = "Assembly id"), CandidateQuery),
    responses(
        (status = 200, description = "Page of matching records", body = PageResponse<CandidateDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_candidates_by_assembly(
    State(state): State<AppState>,
    PathParams(assembly_id): PathParams<i32>,
    QueryParams(query): QueryParams<CandidateQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = CandidateService::new(&state.db).list_by_assembly(assembly_id, query).await?;

    Ok((StatusCode::OK, Json(page)))
}
