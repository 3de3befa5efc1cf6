use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000006_block::Block;

static IDX_BOOTH_BOOTH_NUMBER: &str = "idx-booth-booth_number";
static IDX_BOOTH_BLOCK_ID: &str = "idx-booth-block_id";
static FK_BOOTH_BLOCK_ID: &str = "fk-booth-block_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booth::Table)
                    .if_not_exists()
                    .col(pk_auto(Booth::Id))
                    .col(string(Booth::Name))
                    .col(string(Booth::BoothNumber))
                    .col(integer_null(Booth::BlockId))
                    .col(text_null(Booth::FullAddress))
                    .col(double_null(Booth::Latitude))
                    .col(double_null(Booth::Longitude))
                    .col(integer_null(Booth::CreatedBy))
                    .col(integer_null(Booth::UpdatedBy))
                    .col(timestamp(Booth::CreatedAt))
                    .col(timestamp(Booth::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_BOOTH_NUMBER)
                    .table(Booth::Table)
                    .col(Booth::BoothNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_BLOCK_ID)
                    .table(Booth::Table)
                    .col(Booth::BlockId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_BLOCK_ID)
                    .from_tbl(Booth::Table)
                    .from_col(Booth::BlockId)
                    .to_tbl(Block::Table)
                    .to_col(Block::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOTH_BLOCK_ID)
                    .table(Booth::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_BLOCK_ID)
                    .table(Booth::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_BOOTH_NUMBER)
                    .table(Booth::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Booth::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Booth {
    Table,
    Id,
    Name,
    BoothNumber,
    BlockId,
    FullAddress,
    Latitude,
    Longitude,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
