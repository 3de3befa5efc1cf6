use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000004_parliament::Parliament,
    m20251101_000005_assembly::Assembly,
    m20251101_000006_block::Block,
    m20251101_000007_booth::Booth,
    m20251101_000008_party::Party,
};

static IDX_BOOTH_VOLUNTEER_BOOTH_ID: &str = "idx-booth_volunteer-booth_id";
static IDX_BOOTH_VOLUNTEER_PARTY_ID: &str = "idx-booth_volunteer-party_id";
static IDX_BOOTH_VOLUNTEER_BLOCK_ID: &str = "idx-booth_volunteer-block_id";
static IDX_BOOTH_VOLUNTEER_ASSEMBLY_ID: &str = "idx-booth_volunteer-assembly_id";
static IDX_BOOTH_VOLUNTEER_PARLIAMENT_ID: &str = "idx-booth_volunteer-parliament_id";
static FK_BOOTH_VOLUNTEER_BOOTH_ID: &str = "fk-booth_volunteer-booth_id";
static FK_BOOTH_VOLUNTEER_PARTY_ID: &str = "fk-booth_volunteer-party_id";
static FK_BOOTH_VOLUNTEER_BLOCK_ID: &str = "fk-booth_volunteer-block_id";
static FK_BOOTH_VOLUNTEER_ASSEMBLY_ID: &str = "fk-booth_volunteer-assembly_id";
static FK_BOOTH_VOLUNTEER_PARLIAMENT_ID: &str = "fk-booth_volunteer-parliament_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoothVolunteer::Table)
                    .if_not_exists()
                    .col(pk_auto(BoothVolunteer::Id))
                    .col(string(BoothVolunteer::Name))
                    .col(string_null(BoothVolunteer::Role))
                    .col(string(BoothVolunteer::Phone))
                    .col(string_null(BoothVolunteer::Email))
                    .col(string_null(BoothVolunteer::AreaResponsibility))
                    .col(string(BoothVolunteer::ActivityLevel))
                    .col(text_null(BoothVolunteer::Remarks))
                    .col(integer(BoothVolunteer::BoothId))
                    .col(integer(BoothVolunteer::PartyId))
                    .col(integer_null(BoothVolunteer::BlockId))
                    .col(integer_null(BoothVolunteer::AssemblyId))
                    .col(integer_null(BoothVolunteer::ParliamentId))
                    .col(integer_null(BoothVolunteer::CreatedBy))
                    .col(integer_null(BoothVolunteer::UpdatedBy))
                    .col(timestamp(BoothVolunteer::CreatedAt))
                    .col(timestamp(BoothVolunteer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_VOLUNTEER_BOOTH_ID)
                    .table(BoothVolunteer::Table)
                    .col(BoothVolunteer::BoothId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_VOLUNTEER_PARTY_ID)
                    .table(BoothVolunteer::Table)
                    .col(BoothVolunteer::PartyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_VOLUNTEER_BLOCK_ID)
                    .table(BoothVolunteer::Table)
                    .col(BoothVolunteer::BlockId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_VOLUNTEER_ASSEMBLY_ID)
                    .table(BoothVolunteer::Table)
                    .col(BoothVolunteer::AssemblyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_VOLUNTEER_PARLIAMENT_ID)
                    .table(BoothVolunteer::Table)
                    .col(BoothVolunteer::ParliamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_VOLUNTEER_BOOTH_ID)
                    .from_tbl(BoothVolunteer::Table)
                    .from_col(BoothVolunteer::BoothId)
                    .to_tbl(Booth::Table)
                    .to_col(Booth::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_VOLUNTEER_PARTY_ID)
                    .from_tbl(BoothVolunteer::Table)
                    .from_col(BoothVolunteer::PartyId)
                    .to_tbl(Party::Table)
                    .to_col(Party::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_VOLUNTEER_BLOCK_ID)
                    .from_tbl(BoothVolunteer::Table)
                    .from_col(BoothVolunteer::BlockId)
                    .to_tbl(Block::Table)
                    .to_col(Block::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_VOLUNTEER_ASSEMBLY_ID)
                    .from_tbl(BoothVolunteer::Table)
                    .from_col(BoothVolunteer::AssemblyId)
                    .to_tbl(Assembly::Table)
                    .to_col(Assembly::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_VOLUNTEER_PARLIAMENT_ID)
                    .from_tbl(BoothVolunteer::Table)
                    .from_col(BoothVolunteer::ParliamentId)
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
                    .name(FK_BOOTH_VOLUNTEER_PARLIAMENT_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOTH_VOLUNTEER_ASSEMBLY_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOTH_VOLUNTEER_BLOCK_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOTH_VOLUNTEER_PARTY_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOTH_VOLUNTEER_BOOTH_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_VOLUNTEER_PARLIAMENT_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_VOLUNTEER_ASSEMBLY_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_VOLUNTEER_BLOCK_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_VOLUNTEER_PARTY_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_VOLUNTEER_BOOTH_ID)
                    .table(BoothVolunteer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoothVolunteer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoothVolunteer {
    Table,
    Id,
    Name,
    Role,
    Phone,
    Email,
    AreaResponsibility,
    ActivityLevel,
    Remarks,
    BoothId,
    PartyId,
    BlockId,
    AssemblyId,
    ParliamentId,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
