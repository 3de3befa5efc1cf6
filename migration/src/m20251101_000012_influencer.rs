use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_state::State,
    m20251101_000003_division::Division,
    m20251101_000004_parliament::Parliament,
    m20251101_000005_assembly::Assembly,
    m20251101_000006_block::Block,
    m20251101_000007_booth::Booth,
};

static IDX_INFLUENCER_STATE_ID: &str = "idx-influencer-state_id";
static IDX_INFLUENCER_DIVISION_ID: &str = "idx-influencer-division_id";
static IDX_INFLUENCER_PARLIAMENT_ID: &str = "idx-influencer-parliament_id";
static IDX_INFLUENCER_ASSEMBLY_ID: &str = "idx-influencer-assembly_id";
static IDX_INFLUENCER_BLOCK_ID: &str = "idx-influencer-block_id";
static IDX_INFLUENCER_BOOTH_ID: &str = "idx-influencer-booth_id";
static UDX_INFLUENCER_EMAIL: &str = "udx-influencer-email";
static FK_INFLUENCER_STATE_ID: &str = "fk-influencer-state_id";
static FK_INFLUENCER_DIVISION_ID: &str = "fk-influencer-division_id";
static FK_INFLUENCER_PARLIAMENT_ID: &str = "fk-influencer-parliament_id";
static FK_INFLUENCER_ASSEMBLY_ID: &str = "fk-influencer-assembly_id";
static FK_INFLUENCER_BLOCK_ID: &str = "fk-influencer-block_id";
static FK_INFLUENCER_BOOTH_ID: &str = "fk-influencer-booth_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Influencer::Table)
                    .if_not_exists()
                    .col(pk_auto(Influencer::Id))
                    .col(string(Influencer::Name))
                    .col(string_uniq(Influencer::ContactNumber))
                    .col(string_null(Influencer::AlternateNumber))
                    .col(string_null(Influencer::Email))
                    .col(text(Influencer::FullAddress))
                    .col(integer(Influencer::StateId))
                    .col(integer(Influencer::DivisionId))
                    .col(integer(Influencer::ParliamentId))
                    .col(integer(Influencer::AssemblyId))
                    .col(integer(Influencer::BlockId))
                    .col(integer(Influencer::BoothId))
                    .col(integer_null(Influencer::CreatedBy))
                    .col(integer_null(Influencer::UpdatedBy))
                    .col(timestamp(Influencer::CreatedAt))
                    .col(timestamp(Influencer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INFLUENCER_STATE_ID)
                    .table(Influencer::Table)
                    .col(Influencer::StateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INFLUENCER_DIVISION_ID)
                    .table(Influencer::Table)
                    .col(Influencer::DivisionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INFLUENCER_PARLIAMENT_ID)
                    .table(Influencer::Table)
                    .col(Influencer::ParliamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INFLUENCER_ASSEMBLY_ID)
                    .table(Influencer::Table)
                    .col(Influencer::AssemblyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INFLUENCER_BLOCK_ID)
                    .table(Influencer::Table)
                    .col(Influencer::BlockId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INFLUENCER_BOOTH_ID)
                    .table(Influencer::Table)
                    .col(Influencer::BoothId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UDX_INFLUENCER_EMAIL)
                    .table(Influencer::Table)
                    .col(Influencer::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INFLUENCER_STATE_ID)
                    .from_tbl(Influencer::Table)
                    .from_col(Influencer::StateId)
                    .to_tbl(State::Table)
                    .to_col(State::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INFLUENCER_DIVISION_ID)
                    .from_tbl(Influencer::Table)
                    .from_col(Influencer::DivisionId)
                    .to_tbl(Division::Table)
                    .to_col(Division::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INFLUENCER_PARLIAMENT_ID)
                    .from_tbl(Influencer::Table)
                    .from_col(Influencer::ParliamentId)
                    .to_tbl(Parliament::Table)
                    .to_col(Parliament::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INFLUENCER_ASSEMBLY_ID)
                    .from_tbl(Influencer::Table)
                    .from_col(Influencer::AssemblyId)
                    .to_tbl(Assembly::Table)
                    .to_col(Assembly::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INFLUENCER_BLOCK_ID)
                    .from_tbl(Influencer::Table)
                    .from_col(Influencer::BlockId)
                    .to_tbl(Block::Table)
                    .to_col(Block::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INFLUENCER_BOOTH_ID)
                    .from_tbl(Influencer::Table)
                    .from_col(Influencer::BoothId)
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
                    .name(FK_INFLUENCER_BOOTH_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INFLUENCER_BLOCK_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INFLUENCER_ASSEMBLY_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INFLUENCER_PARLIAMENT_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INFLUENCER_DIVISION_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INFLUENCER_STATE_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UDX_INFLUENCER_EMAIL)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INFLUENCER_BOOTH_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INFLUENCER_BLOCK_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INFLUENCER_ASSEMBLY_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INFLUENCER_PARLIAMENT_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INFLUENCER_DIVISION_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INFLUENCER_STATE_ID)
                    .table(Influencer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Influencer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Influencer {
    Table,
    Id,
    Name,
    ContactNumber,
    AlternateNumber,
    Email,
    FullAddress,
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
