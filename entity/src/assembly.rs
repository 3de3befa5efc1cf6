use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assembly")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub parliament_id: Option<i32>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parliament::Entity",
        from = "Column::ParliamentId",
        to = "super::parliament::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Parliament,
    #[sea_orm(has_many = "super::block::Entity")]
    Block,
}

impl Related<super::parliament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parliament.def()
    }
}

impl Related<super::block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Block.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
