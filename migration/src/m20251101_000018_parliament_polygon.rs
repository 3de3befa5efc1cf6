use sea_orm_migration::{prelude::*, schema::*};

static IDX_PARLIAMENT_POLYGON_COLLECTION_ID: &str = "idx-parliament_polygon-collection_id";
static IDX_PARLIAMENT_POLYGON_NAME: &str = "idx-parliament_polygon-name";
static IDX_PARLIAMENT_POLYGON_VS_CODE: &str = "idx-parliament_polygon-vs_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParliamentPolygon::Table)
                    .if_not_exists()
                    .col(pk_auto(ParliamentPolygon::Id))
                    .col(uuid(ParliamentPolygon::CollectionId))
                    .col(string(ParliamentPolygon::Name))
                    .col(string(ParliamentPolygon::District))
                    .col(string(ParliamentPolygon::Division))
                    .col(string(ParliamentPolygon::Parliament))
                    .col(integer(ParliamentPolygon::VsCode))
                    .col(json(ParliamentPolygon::Geometry))
                    .col(double(ParliamentPolygon::MinLng))
                    .col(double(ParliamentPolygon::MinLat))
                    .col(double(ParliamentPolygon::MaxLng))
                    .col(double(ParliamentPolygon::MaxLat))
                    .col(timestamp(ParliamentPolygon::CreatedAt))
                    .col(timestamp(ParliamentPolygon::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARLIAMENT_POLYGON_COLLECTION_ID)
                    .table(ParliamentPolygon::Table)
                    .col(ParliamentPolygon::CollectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARLIAMENT_POLYGON_NAME)
                    .table(ParliamentPolygon::Table)
                    .col(ParliamentPolygon::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARLIAMENT_POLYGON_VS_CODE)
                    .table(ParliamentPolygon::Table)
                    .col(ParliamentPolygon::VsCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARLIAMENT_POLYGON_VS_CODE)
                    .table(ParliamentPolygon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARLIAMENT_POLYGON_NAME)
                    .table(ParliamentPolygon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARLIAMENT_POLYGON_COLLECTION_ID)
                    .table(ParliamentPolygon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ParliamentPolygon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ParliamentPolygon {
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
