use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_parliament::Parliament;

static IDX_ASSEMBLY_NAME: &str = "idx-assembly-name";
static IDX_ASSEMBLY_PARLIAMENT_ID: &str = "idx-assembly-parliament_id";
static FK_ASSEMBLY_PARLIAMENT_ID: &str = "fk-assembly-parliament_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assembly::Table)
                    .if_not_exists()
                    .col(pk_auto(Assembly::Id))
                    .col(string(Assembly::Name))
                    .col(integer_null(Assembly::ParliamentId))
                    .col(integer_null(Assembly::CreatedBy))
                    .col(integer_null(Assembly::UpdatedBy))
                    .col(timestamp(Assembly::CreatedAt))
                    .col(timestamp(Assembly::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSEMBLY_NAME)
                    .table(Assembly::Table)
                    .col(Assembly::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSEMBLY_PARLIAMENT_ID)
                    .table(Assembly::Table)
                    .col(Assembly::ParliamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSEMBLY_PARLIAMENT_ID)
                    .from_tbl(Assembly::Table)
                    .from_col(Assembly::ParliamentId)
                    .to_tbl(Parliament::Table)
                    .to_col(Parliament::Id)
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
                    .name(FK_ASSEMBLY_PARLIAMENT_ID)
                    .table(Assembly::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSEMBLY_PARLIAMENT_ID)
                    .table(Assembly::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSEMBLY_NAME)
                    .table(Assembly::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Assembly::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Assembly {
    Table,
    Id,
    Name,
    ParliamentId,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
