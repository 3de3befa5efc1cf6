use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_state::State;

static IDX_DIVISION_NAME: &str = "idx-division-name";
static IDX_DIVISION_STATE_ID: &str = "idx-division-state_id";
static FK_DIVISION_STATE_ID: &str = "fk-division-state_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Division::Table)
                    .if_not_exists()
                    .col(pk_auto(Division::Id))
                    .col(string(Division::Name))
                    .col(integer_null(Division::StateId))
                    .col(integer_null(Division::CreatedBy))
                    .col(integer_null(Division::UpdatedBy))
                    .col(timestamp(Division::CreatedAt))
                    .col(timestamp(Division::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIVISION_NAME)
                    .table(Division::Table)
                    .col(Division::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIVISION_STATE_ID)
                    .table(Division::Table)
                    .col(Division::StateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DIVISION_STATE_ID)
                    .from_tbl(Division::Table)
                    .from_col(Division::StateId)
                    .to_tbl(State::Table)
                    .to_col(State::Id)
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
                    .name(FK_DIVISION_STATE_ID)
                    .table(Division::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIVISION_STATE_ID)
                    .table(Division::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIVISION_NAME)
                    .table(Division::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Division::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Division {
    Table,
    Id,
    Name,
    StateId,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
