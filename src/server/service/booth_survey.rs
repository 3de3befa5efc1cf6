//! Booth surveys, newest first.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        booth_survey::{BoothSurveyDto, BoothSurveyPayload, BoothSurveyQuery},
    },
    server::{
        data::{
            booth_survey::BoothSurveyRepository,
            populate::{BoothLookup, NameLookup},
            query::PageRequest,
        },
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::{optional_text, required},
        },
    },
};

const REMARK_MAX_LEN: usize = 500;

pub struct BoothSurveyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoothSurveyService<'a> {
    /// Creates a new instance of [`BoothSurveyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        query: BoothSurveyQuery,
    ) -> Result<PageResponse<BoothSurveyDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = BoothSurveyRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<BoothSurveyDto, Error> {
        let survey = BoothSurveyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Booth survey"))?;

        self.populate_one(survey).await
    }

    /// Records a survey, dated now unless `survey_date` is given
    pub async fn create(
        &self,
        user: &AuthUser,
        payload: BoothSurveyPayload,
    ) -> Result<BoothSurveyDto, Error> {
        let survey = entity::booth_survey::Model {
            id: 0,
            booth_id: required("booth_id", payload.booth_id)?,
            survey_done_by: required("survey_done_by", payload.survey_done_by)?,
            survey_date: payload
                .survey_date
                .unwrap_or_else(|| Utc::now().naive_utc()),
            status: payload.status.unwrap_or_default().as_str().to_string(),
            remark: optional_text("remark", payload.remark, REMARK_MAX_LEN)?,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        self.check_references(&survey).await?;

        let survey = BoothSurveyRepository::new(self.db).create(survey).await?;

        tracing::info!(
            booth_survey_id = survey.id,
            booth_id = survey.booth_id,
            "Created booth survey"
        );

        self.populate_one(survey).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: BoothSurveyPayload,
    ) -> Result<BoothSurveyDto, Error> {
        let repo = BoothSurveyRepository::new(self.db);
        let mut survey = repo
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Booth survey"))?;

        if let Some(booth_id) = payload.booth_id {
            survey.booth_id = booth_id;
        }
        if let Some(survey_done_by) = payload.survey_done_by {
            survey.survey_done_by = survey_done_by;
        }
        if let Some(survey_date) = payload.survey_date {
            survey.survey_date = survey_date;
        }
        if let Some(status) = payload.status {
            survey.status = status.as_str().to_string();
        }
        if payload.remark.is_some() {
            survey.remark = optional_text("remark", payload.remark, REMARK_MAX_LEN)?;
        }

        self.check_references(&survey).await?;

        survey.updated_by = Some(user.id);
        let survey = repo.update(survey).await?;

        self.populate_one(survey).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = BoothSurveyRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Booth survey"))?;

        ensure_deleted(result, "Booth survey")
    }

    async fn check_references(&self, survey: &entity::booth_survey::Model) -> Result<(), Error> {
        let validator = AncestryValidator::new(self.db);

        let chain = AncestryChain {
            booth: Some(survey.booth_id),
            ..Default::default()
        };

        tokio::try_join!(
            validator.validate(&chain),
            validator.user_exists(survey.survey_done_by),
        )?;

        Ok(())
    }

    async fn populate(
        &self,
        surveys: &[entity::booth_survey::Model],
    ) -> Result<Vec<BoothSurveyDto>, Error> {
        let (users, booths) = tokio::try_join!(
            NameLookup::users(
                self.db,
                surveys
                    .iter()
                    .flat_map(|s| [s.created_by, s.updated_by, Some(s.survey_done_by)]),
            ),
            BoothLookup::load(self.db, surveys.iter().map(|s| Some(s.booth_id))),
        )?;

        Ok(surveys
            .iter()
            .map(|s| BoothSurveyDto {
                id: s.id,
                booth: booths.get(Some(s.booth_id)),
                survey_done_by: users.get(Some(s.survey_done_by)),
                survey_date: s.survey_date,
                status: s.status.clone(),
                remark: s.remark.clone(),
                audit: users.audit(s.created_by, s.updated_by, s.created_at, s.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        survey: entity::booth_survey::Model,
    ) -> Result<BoothSurveyDto, Error> {
        self.populate(std::slice::from_ref(&survey))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to populate booth survey {}", survey.id))
            })
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::booth_survey::{BoothSurveyPayload, SurveyStatus},
        server::{model::auth::AuthUser, service::booth_survey::BoothSurveyService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    /// Expect a pending survey attributed to the surveyor
    #[tokio::test]
    async fn creates_pending_survey() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_user("surveyor", "Booth")
            .with_hierarchy_chain("A")
            .build()
            .await?;

        let survey = BoothSurveyService::new(&test.db)
            .create(
                &admin(&test),
                BoothSurveyPayload {
                    booth_id: Some(test.first_chain().booth.id),
                    survey_done_by: Some(test.users[1].id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(survey.status, SurveyStatus::Pending.as_str());
        assert_eq!(survey.survey_done_by.unwrap().name, "surveyor");
        assert_eq!(survey.booth.unwrap().booth_number, "B-A");

        Ok(())
    }

    /// Expect an unknown surveyor to be rejected
    #[tokio::test]
    async fn rejects_unknown_surveyor() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await?;

        let err = BoothSurveyService::new(&test.db)
            .create(
                &admin(&test),
                BoothSurveyPayload {
                    booth_id: Some(test.first_chain().booth.id),
                    survey_done_by: Some(404),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User not found");

        Ok(())
    }
}
