use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "potential_candidate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub party_id: i32,
    pub assembly_id: i32,
    pub election_year: i32,
    pub history: Option<String>,
    pub post_name: Option<String>,
    pub post_from: Option<Date>,
    pub post_to: Option<Date>,
    pub post_place: Option<String>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub image: Option<String>,
    pub status: String,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::party::Entity",
        from = "Column::PartyId",
        to = "super::party::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Party,
    #[sea_orm(
        belongs_to = "super::assembly::Entity",
        from = "Column::AssemblyId",
        to = "super::assembly::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Assembly,
}

impl ActiveModelBehavior for ActiveModel {}
