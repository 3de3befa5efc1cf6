use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000007_booth::Booth,
    m20251101_000010_candidate::Candidate,
};

static IDX_BOOTH_VOTE_CANDIDATE_ID: &str = "idx-booth_vote-candidate_id";
static IDX_BOOTH_VOTE_BOOTH_ID: &str = "idx-booth_vote-booth_id";
static UDX_BOOTH_VOTE_CANDIDATE_ID_BOOTH_ID: &str = "udx-booth_vote-candidate_id-booth_id";
static FK_BOOTH_VOTE_CANDIDATE_ID: &str = "fk-booth_vote-candidate_id";
static FK_BOOTH_VOTE_BOOTH_ID: &str = "fk-booth_vote-booth_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoothVote::Table)
                    .if_not_exists()
                    .col(pk_auto(BoothVote::Id))
                    .col(integer(BoothVote::CandidateId))
                    .col(integer(BoothVote::BoothId))
                    .col(integer(BoothVote::TotalVotes))
                    .col(integer_null(BoothVote::CreatedBy))
                    .col(integer_null(BoothVote::UpdatedBy))
                    .col(timestamp(BoothVote::CreatedAt))
                    .col(timestamp(BoothVote::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_VOTE_CANDIDATE_ID)
                    .table(BoothVote::Table)
                    .col(BoothVote::CandidateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_VOTE_BOOTH_ID)
                    .table(BoothVote::Table)
                    .col(BoothVote::BoothId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UDX_BOOTH_VOTE_CANDIDATE_ID_BOOTH_ID)
                    .table(BoothVote::Table)
                    .col(BoothVote::CandidateId)
                    .col(BoothVote::BoothId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_VOTE_CANDIDATE_ID)
                    .from_tbl(BoothVote::Table)
                    .from_col(BoothVote::CandidateId)
                    .to_tbl(Candidate::Table)
                    .to_col(Candidate::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_VOTE_BOOTH_ID)
                    .from_tbl(BoothVote::Table)
                    .from_col(BoothVote::BoothId)
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
                    .name(FK_BOOTH_VOTE_BOOTH_ID)
                    .table(BoothVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOTH_VOTE_CANDIDATE_ID)
                    .table(BoothVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UDX_BOOTH_VOTE_CANDIDATE_ID_BOOTH_ID)
                    .table(BoothVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_VOTE_BOOTH_ID)
                    .table(BoothVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_VOTE_CANDIDATE_ID)
                    .table(BoothVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoothVote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoothVote {
    Table,
    Id,
    CandidateId,
    BoothId,
    TotalVotes,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
