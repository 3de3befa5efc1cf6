use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000005_assembly::Assembly;

static IDX_BLOCK_NAME: &str = "idx-block-name";
static IDX_BLOCK_ASSEMBLY_ID: &str = "idx-block-assembly_id";
static FK_BLOCK_ASSEMBLY_ID: &str = "fk-block-assembly_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Block::Table)
                    .if_not_exists()
                    .col(pk_auto(Block::Id))
                    .col(string(Block::Name))
                    .col(integer_null(Block::AssemblyId))
                    .col(integer_null(Block::CreatedBy))
                    .col(integer_null(Block::UpdatedBy))
                    .col(timestamp(Block::CreatedAt))
                    .col(timestamp(Block::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BLOCK_NAME)
                    .table(Block::Table)
                    .col(Block::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BLOCK_ASSEMBLY_ID)
                    .table(Block::Table)
                    .col(Block::AssemblyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BLOCK_ASSEMBLY_ID)
                    .from_tbl(Block::Table)
                    .from_col(Block::AssemblyId)
                    .to_tbl(Assembly::Table)
                    .to_col(Assembly::Id)
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
                    .name(FK_BLOCK_ASSEMBLY_ID)
                    .table(Block::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BLOCK_ASSEMBLY_ID)
                    .table(Block::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BLOCK_NAME)
                    .table(Block::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Block::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Block {
    Table,
    Id,
    Name,
    AssemblyId,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
