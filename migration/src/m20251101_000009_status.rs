use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Status::Table)
                    .if_not_exists()
                    .col(pk_auto(Status::Id))
                    .col(string_uniq(Status::Name))
                    .col(text_null(Status::Description))
                    .col(boolean(Status::IsActive))
                    .col(boolean(Status::IsSystem))
                    .col(string(Status::ColorCode))
                    .col(integer_null(Status::CreatedBy))
                    .col(integer_null(Status::UpdatedBy))
                    .col(timestamp(Status::CreatedAt))
                    .col(timestamp(Status::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Status::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Status {
    Table,
    Id,
    Name,
    Description,
    IsActive,
    IsSystem,
    ColorCode,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
