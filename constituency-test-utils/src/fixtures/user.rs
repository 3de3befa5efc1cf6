use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the given role.
    pub async fn insert_user(&self, username: &str, role: &str) -> Result<UserModel, TestError> {
        self.insert(username, role, true).await
    }

    /// Insert a deactivated user with the given role.
    pub async fn insert_inactive_user(
        &self,
        username: &str,
        role: &str,
    ) -> Result<UserModel, TestError> {
        self.insert(username, role, false).await
    }

    async fn insert(
        &self,
        username: &str,
        role: &str,
        is_active: bool,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", username)),
                role: ActiveValue::Set(role.to_string()),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
