use sea_orm_migration::{prelude::*, schema::*};

static IDX_STATE_NAME: &str = "idx-state-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(State::Table)
                    .if_not_exists()
                    .col(pk_auto(State::Id))
                    .col(string(State::Name))
                    .col(integer_null(State::CreatedBy))
                    .col(integer_null(State::UpdatedBy))
                    .col(timestamp(State::CreatedAt))
                    .col(timestamp(State::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STATE_NAME)
                    .table(State::Table)
                    .col(State::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STATE_NAME)
                    .table(State::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(State::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum State {
    Table,
    Id,
    Name,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
