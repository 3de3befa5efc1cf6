use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    hierarchy::Resolution,
    model::{
        api::{DataResponse, ErrorDto},
        hierarchy::{HierarchyDto, ResolveQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, extract::QueryParams},
        service::hierarchy::HierarchyService,
    },
};

pub static HIERARCHY_TAG: &str = "hierarchy";

/// Option list of every hierarchy level, root first
///
/// Every option carries the id of its parent so clients can filter child levels locally.
#[utoipa::path(
    get,
    path = "/api/hierarchy",
    tag = HIERARCHY_TAG,
    responses(
        (status = 200, description = "All levels with their options", body = DataResponse<HierarchyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hierarchy(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let hierarchy = HierarchyService::new(&state.db).levels().await?;

    Ok((StatusCode::OK, Json(DataResponse::new(hierarchy))))
}

/// Narrow every level to the given selections
///
/// Selections that do not belong to the selected parent are cleared along with everything
/// below them and reported in `cleared`.
#[utoipa::path(
    get,
    path = "/api/hierarchy/resolve",
    tag = HIERARCHY_TAG,
    params(ResolveQuery),
    responses(
        (status = 200, description = "Options and surviving selection per level", body = DataResponse<Resolution>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_hierarchy(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ResolveQuery>,
) -> Result<impl IntoResponse, Error> {
    let resolution = HierarchyService::new(&state.db).resolve(query).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(resolution))))
}
