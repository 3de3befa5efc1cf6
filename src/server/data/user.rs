use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

/// Read access to users. Users are provisioned by the identity service, never written here.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod find_by_id {
        use constituency_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when the user exists
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_by_id(test.first_user().id).await?;

            assert_eq!(result.map(|u| u.username), Some("admin".to_string()));

            Ok(())
        }

        /// Expect Ok(None) when the user does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_by_id(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.find_by_id(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
