use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_division::Division;

static IDX_PARLIAMENT_NAME: &str = "idx-parliament-name";
static IDX_PARLIAMENT_DIVISION_ID: &str = "idx-parliament-division_id";
static FK_PARLIAMENT_DIVISION_ID: &str = "fk-parliament-division_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parliament::Table)
                    .if_not_exists()
                    .col(pk_auto(Parliament::Id))
                    .col(string(Parliament::Name))
                    .col(integer_null(Parliament::DivisionId))
                    .col(integer_null(Parliament::CreatedBy))
                    .col(integer_null(Parliament::UpdatedBy))
                    .col(timestamp(Parliament::CreatedAt))
                    .col(timestamp(Parliament::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARLIAMENT_NAME)
                    .table(Parliament::Table)
                    .col(Parliament::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARLIAMENT_DIVISION_ID)
                    .table(Parliament::Table)
                    .col(Parliament::DivisionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARLIAMENT_DIVISION_ID)
                    .from_tbl(Parliament::Table)
                    .from_col(Parliament::DivisionId)
                    .to_tbl(Division::Table)
                    .to_col(Division::Id)
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
                    .name(FK_PARLIAMENT_DIVISION_ID)
                    .table(Parliament::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARLIAMENT_DIVISION_ID)
                    .table(Parliament::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARLIAMENT_NAME)
                    .table(Parliament::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Parliament::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Parliament {
    Table,
    Id,
    Name,
    DivisionId,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
