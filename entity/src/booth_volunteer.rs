use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booth_volunteer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub area_responsibility: Option<String>,
    pub activity_level: String,
    pub remarks: Option<String>,
    pub booth_id: i32,
    pub party_id: i32,
    pub block_id: Option<i32>,
    pub assembly_id: Option<i32>,
    pub parliament_id: Option<i32>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booth::Entity",
        from = "Column::BoothId",
        to = "super::booth::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Booth,
    #[sea_orm(
        belongs_to = "super::party::Entity",
        from = "Column::PartyId",
        to = "super::party::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Party,
    #[sea_orm(
        belongs_to = "super::block::Entity",
        from = "Column::BlockId",
        to = "super::block::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Block,
    #[sea_orm(
        belongs_to = "super::assembly::Entity",
        from = "Column::AssemblyId",
        to = "super::assembly::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Assembly,
    #[sea_orm(
        belongs_to = "super::parliament::Entity",
        from = "Column::ParliamentId",
        to = "super::parliament::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Parliament,
}

impl ActiveModelBehavior for ActiveModel {}
