use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_state::State,
    m20251101_000003_division::Division,
    m20251101_000004_parliament::Parliament,
    m20251101_000005_assembly::Assembly,
    m20251101_000006_block::Block,
    m20251101_000007_booth::Booth,
};

static IDX_GOVERNMENT_STATE_ID: &str = "idx-government-state_id";
static IDX_GOVERNMENT_DIVISION_ID: &str = "idx-government-division_id";
static IDX_GOVERNMENT_PARLIAMENT_ID: &str = "idx-government-parliament_id";
static IDX_GOVERNMENT_ASSEMBLY_ID: &str = "idx-government-assembly_id";
static IDX_GOVERNMENT_BLOCK_ID: &str = "idx-government-block_id";
static IDX_GOVERNMENT_BOOTH_ID: &str = "idx-government-booth_id";
static FK_GOVERNMENT_STATE_ID: &str = "fk-government-state_id";
static FK_GOVERNMENT_DIVISION_ID: &str = "fk-government-division_id";
static FK_GOVERNMENT_PARLIAMENT_ID: &str = "fk-government-parliament_id";
static FK_GOVERNMENT_ASSEMBLY_ID: &str = "fk-government-assembly_id";
static FK_GOVERNMENT_BLOCK_ID: &str = "fk-government-block_id";
static FK_GOVERNMENT_BOOTH_ID: &str = "fk-government-booth_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Government::Table)
                    .if_not_exists()
                    .col(pk_auto(Government::Id))
                    .col(string(Government::Name))
                    .col(string(Government::Type))
                    .col(date_null(Government::ProjectCompleteDate))
                    .col(double(Government::Amount))
                    .col(integer(Government::StateId))
                    .col(integer(Government::DivisionId))
                    .col(integer(Government::ParliamentId))
                    .col(integer(Government::AssemblyId))
                    .col(integer(Government::BlockId))
                    .col(integer_null(Government::BoothId))
                    .col(integer_null(Government::CreatedBy))
                    .col(integer_null(Government::UpdatedBy))
                    .col(timestamp(Government::CreatedAt))
                    .col(timestamp(Government::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GOVERNMENT_STATE_ID)
                    .table(Government::Table)
                    .col(Government::StateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GOVERNMENT_DIVISION_ID)
                    .table(Government::Table)
                    .col(Government::DivisionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GOVERNMENT_PARLIAMENT_ID)
                    .table(Government::Table)
                    .col(Government::ParliamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GOVERNMENT_ASSEMBLY_ID)
                    .table(Government::Table)
                    .col(Government::AssemblyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GOVERNMENT_BLOCK_ID)
                    .table(Government::Table)
                    .col(Government::BlockId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GOVERNMENT_BOOTH_ID)
                    .table(Government::Table)
                    .col(Government::BoothId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOVERNMENT_STATE_ID)
                    .from_tbl(Government::Table)
                    .from_col(Government::StateId)
                    .to_tbl(State::Table)
                    .to_col(State::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOVERNMENT_DIVISION_ID)
                    .from_tbl(Government::Table)
                    .from_col(Government::DivisionId)
                    .to_tbl(Division::Table)
                    .to_col(Division::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOVERNMENT_PARLIAMENT_ID)
                    .from_tbl(Government::Table)
                    .from_col(Government::ParliamentId)
                    .to_tbl(Parliament::Table)
                    .to_col(Parliament::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOVERNMENT_ASSEMBLY_ID)
                    .from_tbl(Government::Table)
                    .from_col(Government::AssemblyId)
                    .to_tbl(Assembly::Table)
                    .to_col(Assembly::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOVERNMENT_BLOCK_ID)
                    .from_tbl(Government::Table)
                    .from_col(Government::BlockId)
                    .to_tbl(Block::Table)
                    .to_col(Block::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOVERNMENT_BOOTH_ID)
                    .from_tbl(Government::Table)
                    .from_col(Government::BoothId)
                    .to_tbl(Booth::Table)
                    .to_col(Booth::Id)
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
                    .name(FK_GOVERNMENT_BOOTH_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GOVERNMENT_BLOCK_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GOVERNMENT_ASSEMBLY_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GOVERNMENT_PARLIAMENT_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GOVERNMENT_DIVISION_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GOVERNMENT_STATE_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GOVERNMENT_BOOTH_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GOVERNMENT_BLOCK_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GOVERNMENT_ASSEMBLY_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GOVERNMENT_PARLIAMENT_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GOVERNMENT_DIVISION_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GOVERNMENT_STATE_ID)
                    .table(Government::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Government::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Government {
    Table,
    Id,
    Name,
    Type,
    ProjectCompleteDate,
    Amount,
    StateId,
    DivisionId,
    ParliamentId,
    AssemblyId,
    BlockId,
    BoothId,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
