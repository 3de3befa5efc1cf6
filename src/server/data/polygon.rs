//! Storage of district and parliament polygon features.
//!
//! Both tables share one layout: a row per GeoJSON Polygon feature, grouped by the
//! `collection_id` of the FeatureCollection it arrived in, with its bounding box stored in
//! plain columns so containment queries can prefilter in SQL.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QueryTrait,
};
use uuid::Uuid;

use crate::server::data::query::{fetch_page, search_condition, Page, PageRequest};

/// A validated polygon feature ready to be stored.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPolygon {
    pub name: String,
    pub district: String,
    pub division: String,
    pub parliament: String,
    pub vs_code: i32,
    /// GeoJSON Polygon geometry
    pub geometry: serde_json::Value,
    /// `[min_lng, min_lat, max_lng, max_lat]`
    pub bbox: [f64; 4],
}

/// A stored polygon feature of either table.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonRecord {
    pub id: i32,
    pub collection_id: Uuid,
    pub name: String,
    pub district: String,
    pub division: String,
    pub parliament: String,
    pub vs_code: i32,
    pub geometry: serde_json::Value,
    pub bbox: [f64; 4],
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

macro_rules! polygon_repository {
    ($(#[$meta:meta])* $repository:ident, $table:ident, $entity:ident) => {
        $(#[$meta])*
        pub struct $repository<'a, C: ConnectionTrait> {
            db: &'a C,
        }

        impl<'a, C: ConnectionTrait> $repository<'a, C> {
            pub fn new(db: &'a C) -> Self {
                Self { db }
            }

            /// Inserts `polygons` under one collection id, in order
            ///
            /// Pass a transaction as the connection to store the collection atomically.
            pub async fn create_many(
                &self,
                collection_id: Uuid,
                polygons: Vec<NewPolygon>,
            ) -> Result<Vec<PolygonRecord>, DbErr> {
                let now = Utc::now().naive_utc();
                let mut records = Vec::with_capacity(polygons.len());

                for polygon in polygons {
                    let [min_lng, min_lat, max_lng, max_lat] = polygon.bbox;

                    let model = entity::prelude::$entity::insert(entity::$table::ActiveModel {
                        collection_id: ActiveValue::Set(collection_id),
                        name: ActiveValue::Set(polygon.name),
                        district: ActiveValue::Set(polygon.district),
                        division: ActiveValue::Set(polygon.division),
                        parliament: ActiveValue::Set(polygon.parliament),
                        vs_code: ActiveValue::Set(polygon.vs_code),
                        geometry: ActiveValue::Set(polygon.geometry),
                        min_lng: ActiveValue::Set(min_lng),
                        min_lat: ActiveValue::Set(min_lat),
                        max_lng: ActiveValue::Set(max_lng),
                        max_lat: ActiveValue::Set(max_lat),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                        ..Default::default()
                    })
                    .exec_with_returning(self.db)
                    .await?;

                    records.push(model.into());
                }

                Ok(records)
            }

            pub async fn find_by_id(&self, id: i32) -> Result<Option<PolygonRecord>, DbErr> {
                let model = entity::prelude::$entity::find_by_id(id).one(self.db).await?;

                Ok(model.map(PolygonRecord::from))
            }

            /// Every feature of a collection in insertion order
            pub async fn find_by_collection(
                &self,
                collection_id: Uuid,
            ) -> Result<Vec<PolygonRecord>, DbErr> {
                let models = entity::prelude::$entity::find()
                    .filter(entity::$table::Column::CollectionId.eq(collection_id))
                    .order_by_asc(entity::$table::Column::Id)
                    .all(self.db)
                    .await?;

                Ok(models.into_iter().map(PolygonRecord::from).collect())
            }

            /// Page of features sorted by name, searching names and districts
            pub async fn list(
                &self,
                search: Option<&str>,
                page: PageRequest,
            ) -> Result<Page<PolygonRecord>, DbErr> {
                let select = entity::prelude::$entity::find()
                    .apply_if(
                        search_condition(
                            &[entity::$table::Column::Name, entity::$table::Column::District],
                            search,
                        ),
                        |q, condition| q.filter(condition),
                    )
                    .order_by_asc(entity::$table::Column::Name)
                    .order_by_asc(entity::$table::Column::Id);

                Ok(fetch_page(self.db, select, page).await?.map(PolygonRecord::from))
            }

            /// Features whose name contains `name`, ignoring case
            ///
            /// A blank `name` matches nothing.
            pub async fn find_by_name_containing(
                &self,
                name: &str,
            ) -> Result<Vec<PolygonRecord>, DbErr> {
                let Some(condition) =
                    search_condition(&[entity::$table::Column::Name], Some(name))
                else {
                    return Ok(Vec::new());
                };

                self.find_where(Some(condition)).await
            }

            pub async fn find_by_name(&self, name: &str) -> Result<Vec<PolygonRecord>, DbErr> {
                let condition = Condition::all().add(entity::$table::Column::Name.eq(name));

                self.find_where(Some(condition)).await
            }

            /// Features whose district contains `district`, ignoring case
            ///
            /// A blank `district` matches nothing.
            pub async fn find_by_district_containing(
                &self,
                district: &str,
            ) -> Result<Vec<PolygonRecord>, DbErr> {
                let Some(condition) =
                    search_condition(&[entity::$table::Column::District], Some(district))
                else {
                    return Ok(Vec::new());
                };

                self.find_where(Some(condition)).await
            }

            pub async fn find_by_district(
                &self,
                district: &str,
            ) -> Result<Vec<PolygonRecord>, DbErr> {
                let condition = Condition::all().add(entity::$table::Column::District.eq(district));

                self.find_where(Some(condition)).await
            }

            pub async fn find_by_vs_code(&self, vs_code: i32) -> Result<Vec<PolygonRecord>, DbErr> {
                let condition = Condition::all().add(entity::$table::Column::VsCode.eq(vs_code));

                self.find_where(Some(condition)).await
            }

            /// Features whose bounding box contains the point, boundary included
            ///
            /// Candidates only, the exact point-in-polygon test happens in memory.
            pub async fn find_by_bbox_containing(
                &self,
                lng: f64,
                lat: f64,
            ) -> Result<Vec<PolygonRecord>, DbErr> {
                let models = entity::prelude::$entity::find()
                    .filter(entity::$table::Column::MinLng.lte(lng))
                    .filter(entity::$table::Column::MaxLng.gte(lng))
                    .filter(entity::$table::Column::MinLat.lte(lat))
                    .filter(entity::$table::Column::MaxLat.gte(lat))
                    .order_by_asc(entity::$table::Column::Id)
                    .all(self.db)
                    .await?;

                Ok(models.into_iter().map(PolygonRecord::from).collect())
            }

            /// Replaces the geometry and properties of a stored feature
            pub async fn update(
                &self,
                id: i32,
                polygon: NewPolygon,
            ) -> Result<PolygonRecord, DbErr> {
                let [min_lng, min_lat, max_lng, max_lat] = polygon.bbox;

                let model = entity::$table::ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    name: ActiveValue::Set(polygon.name),
                    district: ActiveValue::Set(polygon.district),
                    division: ActiveValue::Set(polygon.division),
                    parliament: ActiveValue::Set(polygon.parliament),
                    vs_code: ActiveValue::Set(polygon.vs_code),
                    geometry: ActiveValue::Set(polygon.geometry),
                    min_lng: ActiveValue::Set(min_lng),
                    min_lat: ActiveValue::Set(min_lat),
                    max_lng: ActiveValue::Set(max_lng),
                    max_lat: ActiveValue::Set(max_lat),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
                .update(self.db)
                .await?;

                Ok(model.into())
            }

            /// Deletes a feature
            ///
            /// Returns OK regardless of the feature existing, check
            /// [`DeleteResult::rows_affected`].
            pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
                entity::prelude::$entity::delete_by_id(id).exec(self.db).await
            }

            async fn find_where(
                &self,
                condition: Option<Condition>,
            ) -> Result<Vec<PolygonRecord>, DbErr> {
                let models = entity::prelude::$entity::find()
                    .apply_if(condition, |q, condition| q.filter(condition))
                    .order_by_asc(entity::$table::Column::Name)
                    .order_by_asc(entity::$table::Column::Id)
                    .all(self.db)
                    .await?;

                Ok(models.into_iter().map(PolygonRecord::from).collect())
            }
        }

        impl From<entity::$table::Model> for PolygonRecord {
            fn from(model: entity::$table::Model) -> Self {
                Self {
                    id: model.id,
                    collection_id: model.collection_id,
                    name: model.name,
                    district: model.district,
                    division: model.division,
                    parliament: model.parliament,
                    vs_code: model.vs_code,
                    geometry: model.geometry,
                    bbox: [model.min_lng, model.min_lat, model.max_lng, model.max_lat],
                    created_at: model.created_at,
                    updated_at: model.updated_at,
                }
            }
        }
    };
}

polygon_repository!(
    /// Repository of the `district_polygon` table
    DistrictPolygonRepository,
    district_polygon,
    DistrictPolygon
);

polygon_repository!(
    /// Repository of the `parliament_polygon` table
    ParliamentPolygonRepository,
    parliament_polygon,
    ParliamentPolygon
);

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn square(name: &str, district: &str, min: f64, max: f64) -> NewPolygon {
        NewPolygon {
            name: name.to_string(),
            district: district.to_string(),
            division: "Division".to_string(),
            parliament: "Parliament".to_string(),
            vs_code: 1,
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[[min, min], [min, max], [max, max], [max, min], [min, min]]]
            }),
            bbox: [min, min, max, max],
        }
    }

    /// Expect features of one collection to share its id and keep their order
    #[tokio::test]
    async fn groups_features_by_collection() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let repo = DistrictPolygonRepository::new(&test.db);
        let collection_id = Uuid::new_v4();

        repo.create_many(
            collection_id,
            vec![square("B", "Patna", 0.0, 1.0), square("A", "Gaya", 2.0, 3.0)],
        )
        .await?;
        repo.create_many(Uuid::new_v4(), vec![square("C", "Patna", 0.0, 1.0)])
            .await?;

        let records = repo.find_by_collection(collection_id).await?;

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(records.iter().all(|r| r.collection_id == collection_id));

        Ok(())
    }

    /// Expect the bounding box prefilter to include boundary points only of touching boxes
    #[tokio::test]
    async fn prefilters_by_bounding_box() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let repo = DistrictPolygonRepository::new(&test.db);
        repo.create_many(
            Uuid::new_v4(),
            vec![square("Low", "X", 0.0, 10.0), square("High", "Y", 20.0, 30.0)],
        )
        .await?;

        let inside = repo.find_by_bbox_containing(5.0, 5.0).await?;
        let boundary = repo.find_by_bbox_containing(10.0, 10.0).await?;
        let outside = repo.find_by_bbox_containing(50.0, 50.0).await?;

        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].name, "Low");
        assert_eq!(boundary.len(), 1);
        assert!(outside.is_empty());

        Ok(())
    }

    /// Expect exact district lookups to ignore partial matches
    #[tokio::test]
    async fn distinguishes_exact_and_partial_district() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let repo = ParliamentPolygonRepository::new(&test.db);
        repo.create_many(
            Uuid::new_v4(),
            vec![square("A", "Patna Sahib", 0.0, 1.0), square("B", "Patna", 0.0, 1.0)],
        )
        .await?;

        assert_eq!(repo.find_by_district("Patna").await?.len(), 1);
        assert_eq!(repo.find_by_district_containing("patna").await?.len(), 2);

        Ok(())
    }

    /// Expect a blank name or district to match no feature instead of every feature
    #[tokio::test]
    async fn blank_substring_matches_nothing() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let repo = DistrictPolygonRepository::new(&test.db);
        repo.create_many(
            Uuid::new_v4(),
            vec![square("A", "Patna", 0.0, 1.0), square("B", "Gaya", 2.0, 3.0)],
        )
        .await?;

        assert!(repo.find_by_name_containing(" ").await?.is_empty());
        assert!(repo.find_by_district_containing("").await?.is_empty());
        assert_eq!(repo.find_by_district_containing("gay").await?.len(), 1);

        Ok(())
    }
}
