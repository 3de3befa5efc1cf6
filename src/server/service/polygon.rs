//! District and parliament polygon stores.
//!
//! Both stores share one service parameterized by [`PolygonKind`]; the kind selects the table
//! and how strictly incoming features are validated.

use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::{
        api::PageResponse,
        polygon::{FeatureCollectionDto, PolygonDto, PolygonQuery},
    },
    server::{
        data::{
            polygon::{DistrictPolygonRepository, ParliamentPolygonRepository, PolygonRecord},
            query::PageRequest,
        },
        error::Error,
        util::{
            db::ensure_deleted,
            geo::{
                contains_point, parse_collection, parse_feature, parse_point, parse_vs_code,
                to_feature_collection, PolygonKind,
            },
        },
    },
};

/// Runs `$body` with `$repo` bound to the repository of `$kind`.
macro_rules! with_repository {
    ($kind:expr, $db:expr, |$repo:ident| $body:expr) => {
        match $kind {
            PolygonKind::District => {
                let $repo = DistrictPolygonRepository::new($db);
                $body
            }
            PolygonKind::Parliament => {
                let $repo = ParliamentPolygonRepository::new($db);
                $body
            }
        }
    };
}

pub struct PolygonService<'a> {
    db: &'a DatabaseConnection,
    kind: PolygonKind,
}

impl<'a> PolygonService<'a> {
    /// Creates a new instance of [`PolygonService`] for the table of `kind`
    pub fn new(db: &'a DatabaseConnection, kind: PolygonKind) -> Self {
        Self { db, kind }
    }

    /// Stores every feature of a FeatureCollection under a fresh collection id
    ///
    /// Features are validated before anything is written and inserted in one transaction.
    ///
    /// # Returns
    /// - `Ok(FeatureCollectionDto)` - The stored collection, each feature carrying its row id
    /// - `Err(Error::ValidationError)` - The body is not a valid FeatureCollection of polygons
    pub async fn create(&self, body: Value) -> Result<FeatureCollectionDto, Error> {
        let polygons = parse_collection(body, self.kind)?;
        let collection_id = Uuid::new_v4();

        let txn = self.db.begin().await?;
        let records = with_repository!(self.kind, &txn, |repo| {
            repo.create_many(collection_id, polygons).await?
        });
        txn.commit().await?;

        tracing::info!(
            kind = self.kind.label(),
            %collection_id,
            features = records.len(),
            "Stored polygon collection"
        );

        Ok(FeatureCollectionDto(to_feature_collection(
            collection_id,
            &records,
        )))
    }

    pub async fn list(&self, query: PolygonQuery) -> Result<PageResponse<PolygonDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;

        let page = with_repository!(self.kind, self.db, |repo| {
            repo.list(query.search.as_deref(), page).await?
        });

        Ok(page.map(PolygonDto::from).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<PolygonDto, Error> {
        let record = with_repository!(self.kind, self.db, |repo| repo.find_by_id(id).await?)
            .ok_or(Error::NotFound(self.kind.label()))?;

        Ok(record.into())
    }

    /// Reassembles the FeatureCollection stored under `collection_id`
    pub async fn collection(&self, collection_id: Uuid) -> Result<FeatureCollectionDto, Error> {
        let records = with_repository!(self.kind, self.db, |repo| {
            repo.find_by_collection(collection_id).await?
        });

        if records.is_empty() {
            return Err(Error::NotFound("Polygon collection"));
        }

        Ok(FeatureCollectionDto(to_feature_collection(
            collection_id,
            &records,
        )))
    }

    /// District names match case-insensitively by substring, parliament names exactly
    pub async fn by_name(&self, name: &str) -> Result<Vec<PolygonDto>, Error> {
        let records = match self.kind {
            PolygonKind::District => {
                DistrictPolygonRepository::new(self.db)
                    .find_by_name_containing(name)
                    .await?
            }
            PolygonKind::Parliament => {
                ParliamentPolygonRepository::new(self.db)
                    .find_by_name(name)
                    .await?
            }
        };

        Ok(into_dtos(records))
    }

    /// Matches like [`PolygonService::by_name`]
    pub async fn by_district(&self, district: &str) -> Result<Vec<PolygonDto>, Error> {
        let records = match self.kind {
            PolygonKind::District => {
                DistrictPolygonRepository::new(self.db)
                    .find_by_district_containing(district)
                    .await?
            }
            PolygonKind::Parliament => {
                ParliamentPolygonRepository::new(self.db)
                    .find_by_district(district)
                    .await?
            }
        };

        Ok(into_dtos(records))
    }

    pub async fn by_vs_code(&self, vs_code: &str) -> Result<Vec<PolygonDto>, Error> {
        let vs_code = parse_vs_code(vs_code)?;

        let records = with_repository!(self.kind, self.db, |repo| {
            repo.find_by_vs_code(vs_code).await?
        });

        Ok(into_dtos(records))
    }

    /// Features containing the point, boundary included
    ///
    /// Bounding boxes narrow the candidates in SQL, the exact test runs on each candidate.
    pub async fn containing(&self, lng: &str, lat: &str) -> Result<Vec<PolygonDto>, Error> {
        let (lng, lat) = parse_point(Some(lng), Some(lat))?;

        let candidates = with_repository!(self.kind, self.db, |repo| {
            repo.find_by_bbox_containing(lng, lat).await?
        });

        Ok(candidates
            .into_iter()
            .filter(|record| contains_point(&record.geometry, lng, lat))
            .map(PolygonDto::from)
            .collect())
    }

    /// Replaces the geometry and properties of a stored feature with a validated Feature
    pub async fn update(&self, id: i32, body: Value) -> Result<PolygonDto, Error> {
        let polygon = parse_feature(body, self.kind)?;

        let record = with_repository!(self.kind, self.db, |repo| {
            if repo.find_by_id(id).await?.is_none() {
                return Err(Error::NotFound(self.kind.label()));
            }

            repo.update(id, polygon).await?
        });

        Ok(record.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = with_repository!(self.kind, self.db, |repo| repo.delete(id).await?);

        ensure_deleted(result, self.kind.label())
    }
}

impl From<PolygonRecord> for PolygonDto {
    fn from(record: PolygonRecord) -> Self {
        Self {
            id: record.id,
            collection_id: record.collection_id,
            name: record.name,
            district: record.district,
            division: record.division,
            parliament: record.parliament,
            vs_code: record.vs_code,
            geometry: record.geometry,
            bbox: record.bbox,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

fn into_dtos(records: Vec<PolygonRecord>) -> Vec<PolygonDto> {
    records.into_iter().map(PolygonDto::from).collect()
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;
    use geojson::feature::Id;

    use crate::server::{error::Error, service::polygon::PolygonService, util::geo::PolygonKind};

    mod create {
        use super::*;

        /// Expect every feature stored under one collection id with row ids as feature ids
        #[tokio::test]
        async fn stores_collection() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;
            let service = PolygonService::new(&test.db, PolygonKind::District);
            let body = geo_factory::feature_collection(vec![
                geo_factory::square_feature("Alpha", "Patna", 1, 0.0, 10.0),
                geo_factory::square_feature("Beta", "Patna", 2, 20.0, 30.0),
            ]);

            let created = service.create(body).await.unwrap();
            let collection_id: uuid::Uuid = serde_json::from_value(
                created.0.foreign_members.as_ref().unwrap()["collection_id"].clone(),
            )
            .unwrap();
            let stored = service.collection(collection_id).await.unwrap();

            assert_eq!(created.0.features.len(), 2);
            assert!(matches!(created.0.features[0].id, Some(Id::Number(_))));
            assert_eq!(stored.0.features.len(), 2);

            Ok(())
        }

        /// Expect an open district ring to reject the whole collection
        #[tokio::test]
        async fn rejects_open_district_ring() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;
            let service = PolygonService::new(&test.db, PolygonKind::District);
            let body = geo_factory::feature_collection(vec![
                geo_factory::square_feature("Alpha", "Patna", 1, 0.0, 10.0),
                geo_factory::open_ring_feature("Beta", "Patna", 2),
            ]);

            let err = service.create(body).await.unwrap_err();

            assert!(matches!(err, Error::ValidationError(_)));
            assert_eq!(service.list(Default::default()).await.unwrap().meta.total, 0);

            Ok(())
        }

        /// Expect parliament features to be stored without the ring closure check
        #[tokio::test]
        async fn accepts_open_parliament_ring() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;
            let service = PolygonService::new(&test.db, PolygonKind::Parliament);
            let body =
                geo_factory::feature_collection(vec![geo_factory::open_ring_feature(
                    "Beta", "Patna", 2,
                )]);

            let created = service.create(body).await.unwrap();

            assert_eq!(created.0.features.len(), 1);

            Ok(())
        }
    }

    mod containing {
        use super::*;

        /// Expect only the polygon whose area contains the point
        #[tokio::test]
        async fn finds_containing_polygon() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;
            let service = PolygonService::new(&test.db, PolygonKind::District);
            service
                .create(geo_factory::feature_collection(vec![
                    geo_factory::square_feature("Alpha", "Patna", 1, 0.0, 10.0),
                    geo_factory::square_feature("Beta", "Gaya", 2, 20.0, 30.0),
                ]))
                .await
                .unwrap();

            let inside = service.containing("5", "5").await.unwrap();
            let outside = service.containing("50", "50").await.unwrap();

            assert_eq!(inside.len(), 1);
            assert_eq!(inside[0].name, "Alpha");
            assert!(outside.is_empty());

            Ok(())
        }

        /// Expect non-numeric coordinates to be rejected
        #[tokio::test]
        async fn rejects_non_numeric_coordinates() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;

            let err = PolygonService::new(&test.db, PolygonKind::District)
                .containing("east", "5")
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "lng must be a number");

            Ok(())
        }
    }

    mod update {
        use super::*;

        /// Expect an update with an open district ring to be rejected and the feature kept
        #[tokio::test]
        async fn rejects_open_district_ring() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;
            let service = PolygonService::new(&test.db, PolygonKind::District);
            service
                .create(geo_factory::feature_collection(vec![
                    geo_factory::square_feature("Alpha", "Patna", 1, 0.0, 10.0),
                ]))
                .await
                .unwrap();
            let stored = service.by_name("alp").await.unwrap().remove(0);

            let result = service
                .update(stored.id, geo_factory::open_ring_feature("Alpha", "Patna", 1))
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));
            assert_eq!(service.get(stored.id).await.unwrap().bbox, stored.bbox);

            Ok(())
        }

        /// Expect updating a missing feature to be not found
        #[tokio::test]
        async fn not_found_for_missing_feature() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;

            let result = PolygonService::new(&test.db, PolygonKind::Parliament)
                .update(404, geo_factory::square_feature("Alpha", "Patna", 1, 0.0, 10.0))
                .await;

            assert!(matches!(result, Err(Error::NotFound("Parliament polygon"))));

            Ok(())
        }
    }

    mod lookups {
        use super::*;

        /// Expect district names to match by substring and parliament names exactly
        #[tokio::test]
        async fn name_matching_differs_by_kind() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;
            for kind in [PolygonKind::District, PolygonKind::Parliament] {
                PolygonService::new(&test.db, kind)
                    .create(geo_factory::feature_collection(vec![
                        geo_factory::square_feature("Alpha", "Patna", 7, 0.0, 10.0),
                    ]))
                    .await
                    .unwrap();
            }

            let district = PolygonService::new(&test.db, PolygonKind::District);
            let parliament = PolygonService::new(&test.db, PolygonKind::Parliament);

            assert_eq!(district.by_name("ALP").await.unwrap().len(), 1);
            assert!(parliament.by_name("Alp").await.unwrap().is_empty());
            assert_eq!(parliament.by_name("Alpha").await.unwrap().len(), 1);
            assert_eq!(parliament.by_vs_code("7").await.unwrap().len(), 1);
            assert!(parliament.by_vs_code("seven").await.is_err());

            Ok(())
        }
    }
}
