use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::candidate::CandidateQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct CandidateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CandidateRepository<'a, C> {
    /// Creates a new instance of [`CandidateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a candidate, the id and timestamps of `candidate` are ignored
    pub async fn create(
        &self,
        candidate: entity::candidate::Model,
    ) -> Result<entity::candidate::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let candidate = entity::candidate::ActiveModel {
            name: ActiveValue::Set(candidate.name),
            party_id: ActiveValue::Set(candidate.party_id),
            assembly_id: ActiveValue::Set(candidate.assembly_id),
            election_year: ActiveValue::Set(candidate.election_year),
            caste: ActiveValue::Set(candidate.caste),
            votes: ActiveValue::Set(candidate.votes),
            criminal_cases: ActiveValue::Set(candidate.criminal_cases),
            assets: ActiveValue::Set(candidate.assets),
            liabilities: ActiveValue::Set(candidate.liabilities),
            education: ActiveValue::Set(candidate.education),
            photo: ActiveValue::Set(candidate.photo),
            is_active: ActiveValue::Set(candidate.is_active),
            created_by: ActiveValue::Set(candidate.created_by),
            updated_by: ActiveValue::Set(candidate.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Candidate::insert(candidate)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find_by_id(id).one(self.db).await
    }

    /// The candidate a party fields in an assembly for an election year, if any
    pub async fn find_by_contest(
        &self,
        assembly_id: i32,
        election_year: i32,
        party_id: i32,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::AssemblyId.eq(assembly_id))
            .filter(entity::candidate::Column::ElectionYear.eq(election_year))
            .filter(entity::candidate::Column::PartyId.eq(party_id))
            .one(self.db)
            .await
    }

    /// Page of candidates sorted by name
    pub async fn list(
        &self,
        query: &CandidateQuery,
        page: PageRequest,
    ) -> Result<Page<entity::candidate::Model>, DbErr> {
        let select = entity::prelude::Candidate::find()
            .apply_if(query.party, |q, party_id| {
                q.filter(entity::candidate::Column::PartyId.eq(party_id))
            })
            .apply_if(query.assembly, |q, assembly_id| {
                q.filter(entity::candidate::Column::AssemblyId.eq(assembly_id))
            })
            .apply_if(query.election_year, |q, election_year| {
                q.filter(entity::candidate::Column::ElectionYear.eq(election_year))
            })
            .apply_if(query.caste, |q, caste| {
                q.filter(entity::candidate::Column::Caste.eq(caste.as_str()))
            })
            .apply_if(query.active, |q, active| {
                q.filter(entity::candidate::Column::IsActive.eq(active))
            })
            .apply_if(
                search_condition(&[entity::candidate::Column::Name], query.search.as_deref()),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::candidate::Column::Name)
            .order_by_asc(entity::candidate::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `candidate` except its creation time
    pub async fn update(
        &self,
        candidate: entity::candidate::Model,
    ) -> Result<entity::candidate::Model, DbErr> {
        let candidate = entity::candidate::ActiveModel {
            id: ActiveValue::Unchanged(candidate.id),
            name: ActiveValue::Set(candidate.name),
            party_id: ActiveValue::Set(candidate.party_id),
            assembly_id: ActiveValue::Set(candidate.assembly_id),
            election_year: ActiveValue::Set(candidate.election_year),
            caste: ActiveValue::Set(candidate.caste),
            votes: ActiveValue::Set(candidate.votes),
            criminal_cases: ActiveValue::Set(candidate.criminal_cases),
            assets: ActiveValue::Set(candidate.assets),
            liabilities: ActiveValue::Set(candidate.liabilities),
            education: ActiveValue::Set(candidate.education),
            photo: ActiveValue::Set(candidate.photo),
            is_active: ActiveValue::Set(candidate.is_active),
            created_by: ActiveValue::Set(candidate.created_by),
            updated_by: ActiveValue::Set(candidate.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        candidate.update(self.db).await
    }

    /// Deletes a candidate
    ///
    /// Returns OK regardless of the candidate existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Candidate::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::candidate::CandidateQuery,
        server::data::{candidate::CandidateRepository, query::PageRequest},
    };

    /// Expect the assembly and year filters to narrow the list
    #[tokio::test]
    async fn filters_by_assembly_and_year() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_hierarchy_chain("A")
            .with_hierarchy_chain("B")
            .build()
            .await?;
        let party = test.record().insert_party("Party", "pty").await?;
        let assembly_a = test.chains[0].assembly.id;
        let assembly_b = test.chains[1].assembly.id;
        test.record()
            .insert_candidate("Asha", party.id, assembly_a, 2024)
            .await?;
        test.record()
            .insert_candidate("Bala", party.id, assembly_a, 2019)
            .await?;
        test.record()
            .insert_candidate("Chand", party.id, assembly_b, 2024)
            .await?;

        let query = CandidateQuery {
            assembly: Some(assembly_a),
            election_year: Some(2024),
            ..Default::default()
        };
        let page = CandidateRepository::new(&test.db)
            .list(&query, PageRequest::default())
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Asha");

        Ok(())
    }

    /// Expect the contest lookup to find the party's candidate for that year only
    #[tokio::test]
    async fn finds_candidate_by_contest() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_hierarchy_chain("A")
            .build()
            .await?;
        let party = test.record().insert_party("Party", "pty").await?;
        let assembly_id = test.first_chain().assembly.id;
        let candidate = test
            .record()
            .insert_candidate("Asha", party.id, assembly_id, 2024)
            .await?;

        let repo = CandidateRepository::new(&test.db);

        assert_eq!(
            repo.find_by_contest(assembly_id, 2024, party.id)
                .await?
                .map(|c| c.id),
            Some(candidate.id)
        );
        assert!(repo
            .find_by_contest(assembly_id, 2029, party.id)
            .await?
            .is_none());

        Ok(())
    }
}
