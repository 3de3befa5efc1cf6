use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booth_survey")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub booth_id: i32,
    pub survey_done_by: i32,
    pub survey_date: DateTime,
    pub status: String,
    pub remark: Option<String>,
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
        belongs_to = "super::app_user::Entity",
        from = "Column::SurveyDoneBy",
        to = "super::app_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Surveyor,
}

impl Related<super::booth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booth.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
