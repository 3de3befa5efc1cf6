use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// One stored polygon feature
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PolygonDto {
    pub id: i32,
    /// Shared by every feature submitted in the same FeatureCollection
    pub collection_id: Uuid,
    pub name: String,
    pub district: String,
    pub division: String,
    pub parliament: String,
    pub vs_code: i32,
    /// GeoJSON Polygon geometry
    #[schema(value_type = Object)]
    pub geometry: serde_json::Value,
    /// `[min_lng, min_lat, max_lng, max_lat]`
    pub bbox: [f64; 4],
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A stored collection reassembled as a GeoJSON FeatureCollection
///
/// Every feature's `id` is its stored row id and the collection carries its
/// `collection_id` as a foreign member.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[schema(value_type = Object)]
pub struct FeatureCollectionDto(pub geojson::FeatureCollection);

/// Query parameters of the polygon lists
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PolygonQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name and district
    pub search: Option<String>,
}
