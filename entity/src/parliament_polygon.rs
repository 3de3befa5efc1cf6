use sea_orm::entity::prelude::*;

/// One GeoJSON polygon feature. Rows sharing a `collection_id` were submitted together as a
/// single FeatureCollection.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parliament_polygon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub collection_id: Uuid,
    pub name: String,
    pub district: String,
    pub division: String,
    pub parliament: String,
    pub vs_code: i32,
    pub geometry: Json,
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
