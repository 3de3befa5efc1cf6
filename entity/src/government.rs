use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "government")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub project_complete_date: Option<Date>,
    pub amount: f64,
    pub state_id: i32,
    pub division_id: i32,
    pub parliament_id: i32,
    pub assembly_id: i32,
    pub block_id: i32,
    pub booth_id: Option<i32>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::state::Entity",
        from = "Column::StateId",
        to = "super::state::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    State,
    #[sea_orm(
        belongs_to = "super::division::Entity",
        from = "Column::DivisionId",
        to = "super::division::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Division,
    #[sea_orm(
        belongs_to = "super::parliament::Entity",
        from = "Column::ParliamentId",
        to = "super::parliament::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Parliament,
    #[sea_orm(
        belongs_to = "super::assembly::Entity",
        from = "Column::AssemblyId",
        to = "super::assembly::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Assembly,
    #[sea_orm(
        belongs_to = "super::block::Entity",
        from = "Column::BlockId",
        to = "super::block::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Block,
    #[sea_orm(
        belongs_to = "super::booth::Entity",
        from = "Column::BoothId",
        to = "super::booth::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Booth,
}

impl ActiveModelBehavior for ActiveModel {}
