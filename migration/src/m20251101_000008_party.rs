use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Party::Table)
                    .if_not_exists()
                    .col(pk_auto(Party::Id))
                    .col(string_uniq(Party::Name))
                    .col(string(Party::Abbreviation))
                    .col(string_null(Party::Symbol))
                    .col(integer_null(Party::FoundedYear))
                    .col(integer_null(Party::CreatedBy))
                    .col(integer_null(Party::UpdatedBy))
                    .col(timestamp(Party::CreatedAt))
                    .col(timestamp(Party::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Party::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Party {
    Table,
    Id,
    Name,
    Abbreviation,
    Symbol,
    FoundedYear,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
