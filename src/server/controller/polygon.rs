//! District and parliament polygon endpoints.
//!
//! Both stores expose the same operations, parliament polygons add a lookup by VS code and
//! district polygons a point containment query.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::{
        api::{DataResponse, DeletedResponse, ErrorDto, PageResponse},
        polygon::{FeatureCollectionDto, PolygonDto, PolygonQuery},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, extract::{JsonBody, PathParams, QueryParams}},
        service::polygon::PolygonService,
        util::geo::PolygonKind,
    },
};

pub static DISTRICT_POLYGON_TAG: &str = "district-polygon";
pub static PARLIAMENT_POLYGON_TAG: &str = "parliament-polygon";

/// Store a GeoJSON FeatureCollection of district polygons
#[utoipa::path(
    post,
    path = "/api/district-polygons",
    tag = DISTRICT_POLYGON_TAG,
    request_body(content = Object, description = "GeoJSON FeatureCollection of Polygon features"),
    responses(
        (status = 201, description = "The stored collection", body = FeatureCollectionDto),
        (status = 400, description = "Invalid GeoJSON or feature properties", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_district_polygons(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let collection = PolygonService::new(&state.db, PolygonKind::District)
        .create(body)
        .await?;

    Ok((StatusCode::CREATED, Json(collection)))
}

/// List stored district polygons
#[utoipa::path(
    get,
    path = "/api/district-polygons",
    tag = DISTRICT_POLYGON_TAG,
    params(PolygonQuery),
    responses(
        (status = 200, description = "Page of polygons", body = PageResponse<PolygonDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_district_polygons(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PolygonQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = PolygonService::new(&state.db, PolygonKind::District)
        .list(query)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a district polygon by id
#[utoipa::path(
    get,
    path = "/api/district-polygons/{id}",
    tag = DISTRICT_POLYGON_TAG,
    params(("id" = i32, Path, description = "Polygon id")),
    responses(
        (status = 200, description = "The polygon", body = DataResponse<PolygonDto>),
        (status = 404, description = "Polygon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_district_polygon(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let polygon = PolygonService::new(&state.db, PolygonKind::District)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygon))))
}

/// Reassemble a submitted collection of district polygons
#[utoipa::path(
    get,
    path = "/api/district-polygons/collection/{collection_id}",
    tag = DISTRICT_POLYGON_TAG,
    params(("collection_id" = Uuid, Path, description = "Collection id returned on create")),
    responses(
        (status = 200, description = "The collection as GeoJSON", body = FeatureCollectionDto),
        (status = 404, description = "Polygon collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_district_polygon_collection(
    State(state): State<AppState>,
    PathParams(collection_id): PathParams<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let collection = PolygonService::new(&state.db, PolygonKind::District)
        .collection(collection_id)
        .await?;

    Ok((StatusCode::OK, Json(collection)))
}

/// Find district polygons by name
#[utoipa::path(
    get,
    path = "/api/district-polygons/name/{name}",
    tag = DISTRICT_POLYGON_TAG,
    params(("name" = String, Path, description = "Name to match")),
    responses(
        (status = 200, description = "Matching polygons", body = DataResponse<Vec<PolygonDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_district_polygons_by_name(
    State(state): State<AppState>,
    PathParams(name): PathParams<String>,
) -> Result<impl IntoResponse, Error> {
    let polygons = PolygonService::new(&state.db, PolygonKind::District)
        .by_name(&name)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygons))))
}

/// Find district polygons by district
#[utoipa::path(
    get,
    path = "/api/district-polygons/district/{district}",
    tag = DISTRICT_POLYGON_TAG,
    params(("district" = String, Path, description = "District to match")),
    responses(
        (status = 200, description = "Matching polygons", body = DataResponse<Vec<PolygonDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_district_polygons_by_district(
    State(state): State<AppState>,
    PathParams(district): PathParams<String>,
) -> Result<impl IntoResponse, Error> {
    let polygons = PolygonService::new(&state.db, PolygonKind::District)
        .by_district(&district)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygons))))
}

/// Replace the geometry and properties of a district polygon with a single GeoJSON Feature
#[utoipa::path(
    put,
    path = "/api/district-polygons/{id}",
    tag = DISTRICT_POLYGON_TAG,
    params(("id" = i32, Path, description = "Polygon id")),
    request_body(content = Object, description = "GeoJSON Feature with a Polygon geometry"),
    responses(
        (status = 200, description = "The updated polygon", body = DataResponse<PolygonDto>),
        (status = 400, description = "Invalid GeoJSON or feature properties", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Polygon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_district_polygon(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let polygon = PolygonService::new(&state.db, PolygonKind::District)
        .update(id, body)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygon))))
}

/// Delete a district polygon
#[utoipa::path(
    delete,
    path = "/api/district-polygons/{id}",
    tag = DISTRICT_POLYGON_TAG,
    params(("id" = i32, Path, description = "Polygon id")),
    responses(
        (status = 200, description = "Polygon deleted", body = DeletedResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Polygon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_district_polygon(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    PolygonService::new(&state.db, PolygonKind::District)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}

/// Store a GeoJSON FeatureCollection of parliament polygons
#[utoipa::path(
    post,
    path = "/api/parliament-polygons",
    tag = PARLIAMENT_POLYGON_TAG,
    request_body(content = Object, description = "GeoJSON FeatureCollection of Polygon features"),
    responses(
        (status = 201, description = "The stored collection", body = FeatureCollectionDto),
        (status = 400, description = "Invalid GeoJSON or feature properties", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_parliament_polygons(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let collection = PolygonService::new(&state.db, PolygonKind::Parliament)
        .create(body)
        .await?;

    Ok((StatusCode::CREATED, Json(collection)))
}

/// List stored parliament polygons
#[utoipa::path(
    get,
    path = "/api/parliament-polygons",
    tag = PARLIAMENT_POLYGON_TAG,
    params(PolygonQuery),
    responses(
        (status = 200, description = "Page of polygons", body = PageResponse<PolygonDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_parliament_polygons(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PolygonQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = PolygonService::new(&state.db, PolygonKind::Parliament)
        .list(query)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a parliament polygon by id
#[utoipa::path(
    get,
    path = "/api/parliament-polygons/{id}",
    tag = PARLIAMENT_POLYGON_TAG,
    params(("id" = i32, Path, description = "Polygon id")),
    responses(
        (status = 200, description = "The polygon", body = DataResponse<PolygonDto>),
        (status = 404, description = "Polygon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parliament_polygon(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let polygon = PolygonService::new(&state.db, PolygonKind::Parliament)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygon))))
}

/// Reassemble a submitted collection of parliament polygons
#[utoipa::path(
    get,
    path = "/api/parliament-polygons/collection/{collection_id}",
    tag = PARLIAMENT_POLYGON_TAG,
    params(("collection_id" = Uuid, Path, description = "Collection id returned on create")),
    responses(
        (status = 200, description = "The collection as GeoJSON", body = FeatureCollectionDto),
        (status = 404, description = "Polygon collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parliament_polygon_collection(
    State(state): State<AppState>,
    PathParams(collection_id): PathParams<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let collection = PolygonService::new(&state.db, PolygonKind::Parliament)
        .collection(collection_id)
        .await?;

    Ok((StatusCode::OK, Json(collection)))
}

/// Find parliament polygons by name
#[utoipa::path(
    get,
    path = "/api/parliament-polygons/name/{name}",
    tag = PARLIAMENT_POLYGON_TAG,
    params(("name" = String, Path, description = "Name to match")),
    responses(
        (status = 200, description = "Matching polygons", body = DataResponse<Vec<PolygonDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_parliament_polygons_by_name(
    State(state): State<AppState>,
    PathParams(name): PathParams<String>,
) -> Result<impl IntoResponse, Error> {
    let polygons = PolygonService::new(&state.db, PolygonKind::Parliament)
        .by_name(&name)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygons))))
}

/// Find parliament polygons by district
#[utoipa::path(
    get,
    path = "/api/parliament-polygons/district/{district}",
    tag = PARLIAMENT_POLYGON_TAG,
    params(("district" = String, Path, description = "District to match")),
    responses(
        (status = 200, description = "Matching polygons", body = DataResponse<Vec<PolygonDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_parliament_polygons_by_district(
    State(state): State<AppState>,
    PathParams(district): PathParams<String>,
) -> Result<impl IntoResponse, Error> {
    let polygons = PolygonService::new(&state.db, PolygonKind::Parliament)
        .by_district(&district)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygons))))
}

/// Replace the geometry and properties of a parliament polygon with a single GeoJSON Feature
#[utoipa::path(
    put,
    path = "/api/parliament-polygons/{id}",
    tag = PARLIAMENT_POLYGON_TAG,
    params(("id" = i32, Path, description = "Polygon id")),
    request_body(content = Object, description = "GeoJSON Feature with a Polygon geometry"),
    responses(
        (status = 200, description = "The updated polygon", body = DataResponse<PolygonDto>),
        (status = 400, description = "Invalid GeoJSON or feature properties", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Polygon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_parliament_polygon(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let polygon = PolygonService::new(&state.db, PolygonKind::Parliament)
        .update(id, body)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygon))))
}

/// Delete a parliament polygon
#[utoipa::path(
    delete,
    path = "/api/parliament-polygons/{id}",
    tag = PARLIAMENT_POLYGON_TAG,
    params(("id" = i32, Path, description = "Polygon id")),
    responses(
        (status = 200, description = "Polygon deleted", body = DeletedResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Role is not allowed to write", body = ErrorDto),
        (status = 404, description = "Polygon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_parliament_polygon(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    PolygonService::new(&state.db, PolygonKind::Parliament)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(DeletedResponse::new())))
}

/// Find parliament polygons by VS code
#[utoipa::path(
    get,
    path = "/api/parliament-polygons/vs-code/{vs_code}",
    tag = PARLIAMENT_POLYGON_TAG,
    params(("vs_code" = String, Path, description = "Numeric VS code")),
    responses(
        (status = 200, description = "Matching polygons", body = DataResponse<Vec<PolygonDto>>),
        (status = 400, description = "VS code is not a number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_parliament_polygons_by_vs_code(
    State(state): State<AppState>,
    PathParams(vs_code): PathParams<String>,
) -> Result<impl IntoResponse, Error> {
    let polygons = PolygonService::new(&state.db, PolygonKind::Parliament)
        .by_vs_code(&vs_code)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygons))))
}

/// Find the district polygons containing a point
#[utoipa::path(
    get,
    path = "/api/district-polygons/contains/{lng}/{lat}",
    tag = DISTRICT_POLYGON_TAG,
    params(
        ("lng" = String, Path, description = "Longitude in degrees, -180 to 180"),
        ("lat" = String, Path, description = "Latitude in degrees, -90 to 90")
    ),
    responses(
        (status = 200, description = "Polygons containing the point", body = DataResponse<Vec<PolygonDto>>),
        (status = 400, description = "Non-numeric or out of range coordinates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_district_polygons_containing(
    State(state): State<AppState>,
    PathParams((lng, lat)): PathParams<(String, String)>,
) -> Result<impl IntoResponse, Error> {
    let polygons = PolygonService::new(&state.db, PolygonKind::District)
        .containing(&lng, &lat)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(polygons))))
}
