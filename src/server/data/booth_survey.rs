use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::booth_survey::BoothSurveyQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct BoothSurveyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoothSurveyRepository<'a, C> {
    /// Creates a new instance of [`BoothSurveyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booth survey, the id and timestamps of `survey` are ignored
    pub async fn create(
        &self,
        survey: entity::booth_survey::Model,
    ) -> Result<entity::booth_survey::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let survey = entity::booth_survey::ActiveModel {
            booth_id: ActiveValue::Set(survey.booth_id),
            survey_done_by: ActiveValue::Set(survey.survey_done_by),
            survey_date: ActiveValue::Set(survey.survey_date),
            status: ActiveValue::Set(survey.status),
            remark: ActiveValue::Set(survey.remark),
            created_by: ActiveValue::Set(survey.created_by),
            updated_by: ActiveValue::Set(survey.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::BoothSurvey::insert(survey)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::booth_survey::Model>, DbErr> {
        entity::prelude::BoothSurvey::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Page of booth surveys, most recent survey first
    pub async fn list(
        &self,
        query: &BoothSurveyQuery,
        page: PageRequest,
    ) -> Result<Page<entity::booth_survey::Model>, DbErr> {
        let select = entity::prelude::BoothSurvey::find()
            .apply_if(query.booth, |q, id| {
                q.filter(entity::booth_survey::Column::BoothId.eq(id))
            })
            .apply_if(query.status, |q, status| {
                q.filter(entity::booth_survey::Column::Status.eq(status.as_str()))
            })
            .apply_if(query.surveyor, |q, id| {
                q.filter(entity::booth_survey::Column::SurveyDoneBy.eq(id))
            })
            .apply_if(
                search_condition(
                    &[entity::booth_survey::Column::Remark],
                    query.search.as_deref(),
                ),
                |q, condition| q.filter(condition),
            )
            .order_by_desc(entity::booth_survey::Column::SurveyDate)
            .order_by_asc(entity::booth_survey::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `survey` except its creation time
    pub async fn update(
        &self,
        survey: entity::booth_survey::Model,
    ) -> Result<entity::booth_survey::Model, DbErr> {
        let survey = entity::booth_survey::ActiveModel {
            id: ActiveValue::Unchanged(survey.id),
            booth_id: ActiveValue::Set(survey.booth_id),
            survey_done_by: ActiveValue::Set(survey.survey_done_by),
            survey_date: ActiveValue::Set(survey.survey_date),
            status: ActiveValue::Set(survey.status),
            remark: ActiveValue::Set(survey.remark),
            created_by: ActiveValue::Set(survey.created_by),
            updated_by: ActiveValue::Set(survey.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        survey.update(self.db).await
    }

    /// Deletes a booth survey
    ///
    /// Returns OK regardless of the survey existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BoothSurvey::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
