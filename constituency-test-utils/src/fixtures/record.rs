//! Fixtures for records that other records reference: parties, candidates and statuses.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CandidateModel, PartyModel, StatusModel},
    TestContext,
};

impl TestContext {
    pub fn record<'a>(&'a self) -> RecordFixtures<'a> {
        RecordFixtures { setup: self }
    }
}

pub struct RecordFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RecordFixtures<'a> {
    pub async fn insert_party(
        &self,
        name: &str,
        abbreviation: &str,
    ) -> Result<PartyModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Party::insert(entity::party::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                abbreviation: ActiveValue::Set(abbreviation.to_uppercase()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_candidate(
        &self,
        name: &str,
        party_id: i32,
        assembly_id: i32,
        election_year: i32,
    ) -> Result<CandidateModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Candidate::insert(entity::candidate::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                party_id: ActiveValue::Set(party_id),
                assembly_id: ActiveValue::Set(assembly_id),
                election_year: ActiveValue::Set(election_year),
                caste: ActiveValue::Set("General".to_string()),
                votes: ActiveValue::Set(0),
                criminal_cases: ActiveValue::Set(0),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_status(
        &self,
        name: &str,
        is_system: bool,
    ) -> Result<StatusModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Status::insert(entity::status::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                is_active: ActiveValue::Set(true),
                is_system: ActiveValue::Set(is_system),
                color_code: ActiveValue::Set("#6c757d".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
