use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_app_user::AppUser,
    m20251101_000007_booth::Booth,
};

static IDX_BOOTH_SURVEY_BOOTH_ID: &str = "idx-booth_survey-booth_id";
static IDX_BOOTH_SURVEY_SURVEY_DONE_BY: &str = "idx-booth_survey-survey_done_by";
static FK_BOOTH_SURVEY_BOOTH_ID: &str = "fk-booth_survey-booth_id";
static FK_BOOTH_SURVEY_SURVEY_DONE_BY: &str = "fk-booth_survey-survey_done_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoothSurvey::Table)
                    .if_not_exists()
                    .col(pk_auto(BoothSurvey::Id))
                    .col(integer(BoothSurvey::BoothId))
                    .col(integer(BoothSurvey::SurveyDoneBy))
                    .col(timestamp(BoothSurvey::SurveyDate))
                    .col(string(BoothSurvey::Status))
                    .col(text_null(BoothSurvey::Remark))
                    .col(integer_null(BoothSurvey::CreatedBy))
                    .col(integer_null(BoothSurvey::UpdatedBy))
                    .col(timestamp(BoothSurvey::CreatedAt))
                    .col(timestamp(BoothSurvey::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_SURVEY_BOOTH_ID)
                    .table(BoothSurvey::Table)
                    .col(BoothSurvey::BoothId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOTH_SURVEY_SURVEY_DONE_BY)
                    .table(BoothSurvey::Table)
                    .col(BoothSurvey::SurveyDoneBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_SURVEY_BOOTH_ID)
                    .from_tbl(BoothSurvey::Table)
                    .from_col(BoothSurvey::BoothId)
                    .to_tbl(Booth::Table)
                    .to_col(Booth::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOTH_SURVEY_SURVEY_DONE_BY)
                    .from_tbl(BoothSurvey::Table)
                    .from_col(BoothSurvey::SurveyDoneBy)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
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
                    .name(FK_BOOTH_SURVEY_SURVEY_DONE_BY)
                    .table(BoothSurvey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOTH_SURVEY_BOOTH_ID)
                    .table(BoothSurvey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_SURVEY_SURVEY_DONE_BY)
                    .table(BoothSurvey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOTH_SURVEY_BOOTH_ID)
                    .table(BoothSurvey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoothSurvey::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoothSurvey {
    Table,
    Id,
    BoothId,
    SurveyDoneBy,
    SurveyDate,
    Status,
    Remark,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
