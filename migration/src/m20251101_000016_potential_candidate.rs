use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000005_assembly::Assembly,
    m20251101_000008_party::Party,
};

static IDX_POTENTIAL_CANDIDATE_PARTY_ID: &str = "idx-potential_candidate-party_id";
static IDX_POTENTIAL_CANDIDATE_ASSEMBLY_ID: &str = "idx-potential_candidate-assembly_id";
static FK_POTENTIAL_CANDIDATE_PARTY_ID: &str = "fk-potential_candidate-party_id";
static FK_POTENTIAL_CANDIDATE_ASSEMBLY_ID: &str = "fk-potential_candidate-assembly_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PotentialCandidate::Table)
                    .if_not_exists()
                    .col(pk_auto(PotentialCandidate::Id))
                    .col(string(PotentialCandidate::Name))
                    .col(integer(PotentialCandidate::PartyId))
                    .col(integer(PotentialCandidate::AssemblyId))
                    .col(integer(PotentialCandidate::ElectionYear))
                    .col(text_null(PotentialCandidate::History))
                    .col(string_null(PotentialCandidate::PostName))
                    .col(date_null(PotentialCandidate::PostFrom))
                    .col(date_null(PotentialCandidate::PostTo))
                    .col(string_null(PotentialCandidate::PostPlace))
                    .col(text_null(PotentialCandidate::Pros))
                    .col(text_null(PotentialCandidate::Cons))
                    .col(string_null(PotentialCandidate::Image))
                    .col(string(PotentialCandidate::Status))
                    .col(integer_null(PotentialCandidate::CreatedBy))
                    .col(integer_null(PotentialCandidate::UpdatedBy))
                    .col(timestamp(PotentialCandidate::CreatedAt))
                    .col(timestamp(PotentialCandidate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POTENTIAL_CANDIDATE_PARTY_ID)
                    .table(PotentialCandidate::Table)
                    .col(PotentialCandidate::PartyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POTENTIAL_CANDIDATE_ASSEMBLY_ID)
                    .table(PotentialCandidate::Table)
                    .col(PotentialCandidate::AssemblyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POTENTIAL_CANDIDATE_PARTY_ID)
                    .from_tbl(PotentialCandidate::Table)
                    .from_col(PotentialCandidate::PartyId)
                    .to_tbl(Party::Table)
                    .to_col(Party::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POTENTIAL_CANDIDATE_ASSEMBLY_ID)
                    .from_tbl(PotentialCandidate::Table)
                    .from_col(PotentialCandidate::AssemblyId)
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
                    .name(FK_POTENTIAL_CANDIDATE_ASSEMBLY_ID)
                    .table(PotentialCandidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POTENTIAL_CANDIDATE_PARTY_ID)
                    .table(PotentialCandidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POTENTIAL_CANDIDATE_ASSEMBLY_ID)
                    .table(PotentialCandidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POTENTIAL_CANDIDATE_PARTY_ID)
                    .table(PotentialCandidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PotentialCandidate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PotentialCandidate {
    Table,
    Id,
    Name,
    PartyId,
    AssemblyId,
    ElectionYear,
    History,
    PostName,
    PostFrom,
    PostTo,
    PostPlace,
    Pros,
    Cons,
    Image,
    Status,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
