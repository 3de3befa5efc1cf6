use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::party::PartyQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct PartyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartyRepository<'a, C> {
    /// Creates a new instance of [`PartyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a party, the id and timestamps of `party` are ignored
    pub async fn create(&self, party: entity::party::Model) -> Result<entity::party::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let party = entity::party::ActiveModel {
            name: ActiveValue::Set(party.name),
            abbreviation: ActiveValue::Set(party.abbreviation),
            symbol: ActiveValue::Set(party.symbol),
            founded_year: ActiveValue::Set(party.founded_year),
            created_by: ActiveValue::Set(party.created_by),
            updated_by: ActiveValue::Set(party.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Party::insert(party)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::party::Model>, DbErr> {
        entity::prelude::Party::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::party::Model>, DbErr> {
        entity::prelude::Party::find()
            .filter(entity::party::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Page of parties sorted by name
    pub async fn list(
        &self,
        query: &PartyQuery,
        page: PageRequest,
    ) -> Result<Page<entity::party::Model>, DbErr> {
        let select = entity::prelude::Party::find()
            .apply_if(
                search_condition(
                    &[entity::party::Column::Name, entity::party::Column::Abbreviation],
                    query.search.as_deref(),
                ),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::party::Column::Name)
            .order_by_asc(entity::party::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `party` except its creation time
    pub async fn update(&self, party: entity::party::Model) -> Result<entity::party::Model, DbErr> {
        let party = entity::party::ActiveModel {
            id: ActiveValue::Unchanged(party.id),
            name: ActiveValue::Set(party.name),
            abbreviation: ActiveValue::Set(party.abbreviation),
            symbol: ActiveValue::Set(party.symbol),
            founded_year: ActiveValue::Set(party.founded_year),
            created_by: ActiveValue::Set(party.created_by),
            updated_by: ActiveValue::Set(party.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        party.update(self.db).await
    }

    /// Deletes a party
    ///
    /// Returns OK regardless of the party existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Party::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::party::PartyQuery,
        server::data::{party::PartyRepository, query::PageRequest},
    };

    /// Expect search to match abbreviations
    #[tokio::test]
    async fn searches_abbreviation() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.record()
            .insert_party("Indian National Congress", "inc")
            .await?;
        test.record()
            .insert_party("Bharatiya Janata Party", "bjp")
            .await?;

        let query = PartyQuery {
            search: Some("Bjp".to_string()),
            ..Default::default()
        };
        let page = PartyRepository::new(&test.db)
            .list(&query, PageRequest::default())
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].abbreviation, "BJP");

        Ok(())
    }

    /// Expect the unique name constraint to reject a second party with the same name
    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let party = test.record().insert_party("Janata Dal", "jd").await?;

        let result = PartyRepository::new(&test.db).create(party).await;

        assert!(result.is_err());

        Ok(())
    }
}
