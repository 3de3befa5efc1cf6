use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::booth_volunteer::BoothVolunteerQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct BoothVolunteerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoothVolunteerRepository<'a, C> {
    /// Creates a new instance of [`BoothVolunteerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booth volunteer, the id and timestamps of `volunteer` are ignored
    pub async fn create(
        &self,
        volunteer: entity::booth_volunteer::Model,
    ) -> Result<entity::booth_volunteer::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let volunteer = entity::booth_volunteer::ActiveModel {
            name: ActiveValue::Set(volunteer.name),
            role: ActiveValue::Set(volunteer.role),
            phone: ActiveValue::Set(volunteer.phone),
            email: ActiveValue::Set(volunteer.email),
            area_responsibility: ActiveValue::Set(volunteer.area_responsibility),
            activity_level: ActiveValue::Set(volunteer.activity_level),
            remarks: ActiveValue::Set(volunteer.remarks),
            booth_id: ActiveValue::Set(volunteer.booth_id),
            party_id: ActiveValue::Set(volunteer.party_id),
            block_id: ActiveValue::Set(volunteer.block_id),
            assembly_id: ActiveValue::Set(volunteer.assembly_id),
            parliament_id: ActiveValue::Set(volunteer.parliament_id),
            created_by: ActiveValue::Set(volunteer.created_by),
            updated_by: ActiveValue::Set(volunteer.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::BoothVolunteer::insert(volunteer)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::booth_volunteer::Model>, DbErr> {
        entity::prelude::BoothVolunteer::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Page of booth volunteers sorted by name
    pub async fn list(
        &self,
        query: &BoothVolunteerQuery,
        page: PageRequest,
    ) -> Result<Page<entity::booth_volunteer::Model>, DbErr> {
        let select = entity::prelude::BoothVolunteer::find()
            .apply_if(query.booth, |q, id| {
                q.filter(entity::booth_volunteer::Column::BoothId.eq(id))
            })
            .apply_if(query.party, |q, id| {
                q.filter(entity::booth_volunteer::Column::PartyId.eq(id))
            })
            .apply_if(query.block, |q, id| {
                q.filter(entity::booth_volunteer::Column::BlockId.eq(id))
            })
            .apply_if(query.assembly, |q, id| {
                q.filter(entity::booth_volunteer::Column::AssemblyId.eq(id))
            })
            .apply_if(query.parliament, |q, id| {
                q.filter(entity::booth_volunteer::Column::ParliamentId.eq(id))
            })
            .apply_if(query.activity_level, |q, level| {
                q.filter(entity::booth_volunteer::Column::ActivityLevel.eq(level.as_str()))
            })
            .apply_if(
                search_condition(
                    &[
                        entity::booth_volunteer::Column::Name,
                        entity::booth_volunteer::Column::Phone,
                        entity::booth_volunteer::Column::Email,
                    ],
                    query.search.as_deref(),
                ),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::booth_volunteer::Column::Name)
            .order_by_asc(entity::booth_volunteer::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `volunteer` except its creation time
    pub async fn update(
        &self,
        volunteer: entity::booth_volunteer::Model,
    ) -> Result<entity::booth_volunteer::Model, DbErr> {
        let volunteer = entity::booth_volunteer::ActiveModel {
            id: ActiveValue::Unchanged(volunteer.id),
            name: ActiveValue::Set(volunteer.name),
            role: ActiveValue::Set(volunteer.role),
            phone: ActiveValue::Set(volunteer.phone),
            email: ActiveValue::Set(volunteer.email),
            area_responsibility: ActiveValue::Set(volunteer.area_responsibility),
            activity_level: ActiveValue::Set(volunteer.activity_level),
            remarks: ActiveValue::Set(volunteer.remarks),
            booth_id: ActiveValue::Set(volunteer.booth_id),
            party_id: ActiveValue::Set(volunteer.party_id),
            block_id: ActiveValue::Set(volunteer.block_id),
            assembly_id: ActiveValue::Set(volunteer.assembly_id),
            parliament_id: ActiveValue::Set(volunteer.parliament_id),
            created_by: ActiveValue::Set(volunteer.created_by),
            updated_by: ActiveValue::Set(volunteer.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        volunteer.update(self.db).await
    }

    /// Deletes a booth volunteer
    ///
    /// Returns OK regardless of the volunteer existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BoothVolunteer::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
