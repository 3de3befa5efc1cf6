use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        hierarchy::{AssemblyDto, AssemblyPayload, AssemblyQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::assembly::AssemblyService,
    },
};

pub static ASSEMBLY_TAG: &str = "assembly";

/// List assembly constituencies
#[utoipa::path(
    get,
    path = "/api/assemblies",
    tag = ASSEMBLY_TAG,
    params(AssemblyQuery),
    responses(
        (status = 200, description = "Page of assembly constituencies", body = PageResponse<AssemblyDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_assemblies(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AssemblyQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = AssemblyService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get an assembly constituency by id
#[utoipa::path(
    get,
    path = "/api/assemblies/{id}",
    tag = ASSEMBLY_TAG,
    params(("id" = i32, Path, description = "Assembly constituency id")),
    responses(
        (status = 200, description = "The assembly constituency", body = DataResponse<AssemblyDto>),
        (status = 404, description = "Assembly constituency not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assembly(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let assembly = AssemblyService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(assembly))))
}

/// Create an assembly constituency
#[utoipa::path(
    post,
    path = "/api/assemblies",
    tag = ASSEMBLY_TAG,
    request_body = AssemblyPayload,
    responses(
        (status = 201, description = "The created assembly constituency", body = DataResponse<AssemblyDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_assembly(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<AssemblyPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let assembly = AssemblyService::new(&state.db).create(&auth, payload).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(assembly))))
}

/// Update an assembly constituency, fields left out keep their value
#[utoipa::path(
    put,
    path = "/api/assemblies/{id}",
    tag = ASSEMBLY_TAG,
    params(("id" = i32, Path, description = "Assembly constituency id")),
    request_body = AssemblyPayload,
    responses(
        (status = 200, description = "The updated assembly constituency", body = DataResponse<AssemblyDto>),
        (status = 400, description = "Invalid payload or references", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Assembly constituency not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_assembly(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody<AssemblyPayload>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let assembly = AssemblyService::new(&state.db).update(&auth, id, payload).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(assembly))))
}

/// Delete an assembly constituency
#[utoipa::path(
    delete,
    path = "/api/assemblies/{id}",
    tag = ASSEMBLY_TAG,
    params(("id" = i32, Path, description = "Assembly constituency id")),
    responses(
        (status = 200, description = "Assembly constituency deleted", body = DeletedResponse),
        (status = 400, description = "Assembly constituency is still referenced", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Assembly constituency not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_assembly(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    AssemblyService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}
