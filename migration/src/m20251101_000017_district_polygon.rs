use sea_orm_migration::{prelude::*, schema::*};

static IDX_DISTRICT_POLYGON_COLLECTION_ID: &str = "idx-district_polygon-collection_id";
static IDX_DISTRICT_POLYGON_NAME: &str = "idx-district_polygon-name";
static IDX_DISTRICT_POLYGON_DISTRICT: &str = "idx-district_polygon-district";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DistrictPolygon::Table)
                    .if_not_exists()
                    .col(pk_auto(DistrictPolygon::Id))
                    .col(uuid(DistrictPolygon::CollectionId))
                    .col(string(DistrictPolygon::Name))
                    .col(string(DistrictPolygon::District))
                    .col(string(DistrictPolygon::Division))
                    .col(string(DistrictPolygon::Parliament))
                    .col(integer(DistrictPolygon::VsCode))
                    .col(json(DistrictPolygon::Geometry))
                    .col(double(DistrictPolygon::MinLng))
                    .col(double(DistrictPolygon::MinLat))
                    .col(double(DistrictPolygon::MaxLng))
                    .col(double(DistrictPolygon::MaxLat))
                    .col(timestamp(DistrictPolygon::CreatedAt))
                    .col(timestamp(DistrictPolygon::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISTRICT_POLYGON_COLLECTION_ID)
                    .table(DistrictPolygon::Table)
                    .col(DistrictPolygon::CollectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISTRICT_POLYGON_NAME)
                    .table(DistrictPolygon::Table)
                    .col(DistrictPolygon::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISTRICT_POLYGON_DISTRICT)
                    .table(DistrictPolygon::Table)
                    .col(DistrictPolygon::District)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISTRICT_POLYGON_DISTRICT)
                    .table(DistrictPolygon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISTRICT_POLYGON_NAME)
                    .table(DistrictPolygon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISTRICT_POLYGON_COLLECTION_ID)
                    .table(DistrictPolygon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DistrictPolygon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DistrictPolygon {
    Table,
    Id,
    CollectionId,
    Name,
    District,
    Division,
    Parliament,
    VsCode,
    Geometry,
    MinLng,
    MinLat,
    MaxLng,
    MaxLat,
    CreatedAt,
    UpdatedAt,
}
