use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000005_assembly::Assembly,
    m20251101_000008_party::Party,
};

static IDX_CANDIDATE_PARTY_ID: &str = "idx-candidate-party_id";
static IDX_CANDIDATE_ASSEMBLY_ID: &str = "idx-candidate-assembly_id";
static UDX_CANDIDATE_ASSEMBLY_ID_ELECTION_YEAR_PARTY_ID: &str = "udx-candidate-assembly_id-election_year-party_id";
static FK_CANDIDATE_PARTY_ID: &str = "fk-candidate-party_id";
static FK_CANDIDATE_ASSEMBLY_ID: &str = "fk-candidate-assembly_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidate::Id))
                    .col(string(Candidate::Name))
                    .col(integer(Candidate::PartyId))
                    .col(integer(Candidate::AssemblyId))
                    .col(integer(Candidate::ElectionYear))
                    .col(string(Candidate::Caste))
                    .col(integer(Candidate::Votes))
                    .col(integer(Candidate::CriminalCases))
                    .col(string_null(Candidate::Assets))
                    .col(string_null(Candidate::Liabilities))
                    .col(string_null(Candidate::Education))
                    .col(string_null(Candidate::Photo))
                    .col(boolean(Candidate::IsActive))
                    .col(integer_null(Candidate::CreatedBy))
                    .col(integer_null(Candidate::UpdatedBy))
                    .col(timestamp(Candidate::CreatedAt))
                    .col(timestamp(Candidate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CANDIDATE_PARTY_ID)
                    .table(Candidate::Table)
                    .col(Candidate::PartyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CANDIDATE_ASSEMBLY_ID)
                    .table(Candidate::Table)
                    .col(Candidate::AssemblyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UDX_CANDIDATE_ASSEMBLY_ID_ELECTION_YEAR_PARTY_ID)
                    .table(Candidate::Table)
                    .col(Candidate::AssemblyId)
                    .col(Candidate::ElectionYear)
                    .col(Candidate::PartyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CANDIDATE_PARTY_ID)
                    .from_tbl(Candidate::Table)
                    .from_col(Candidate::PartyId)
                    .to_tbl(Party::Table)
                    .to_col(Party::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CANDIDATE_ASSEMBLY_ID)
                    .from_tbl(Candidate::Table)
                    .from_col(Candidate::AssemblyId)
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
                    .name(FK_CANDIDATE_ASSEMBLY_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CANDIDATE_PARTY_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UDX_CANDIDATE_ASSEMBLY_ID_ELECTION_YEAR_PARTY_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CANDIDATE_ASSEMBLY_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CANDIDATE_PARTY_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Candidate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Candidate {
    Table,
    Id,
    Name,
    PartyId,
    AssemblyId,
    ElectionYear,
    Caste,
    Votes,
    CriminalCases,
    Assets,
    Liabilities,
    Education,
    Photo,
    IsActive,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
