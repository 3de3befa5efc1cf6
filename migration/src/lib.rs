pub use sea_orm_migration::prelude::*;

mod m20251101_000001_app_user;
mod m20251101_000002_state;
mod m20251101_000003_division;
mod m20251101_000004_parliament;
mod m20251101_000005_assembly;
mod m20251101_000006_block;
mod m20251101_000007_booth;
mod m20251101_000008_party;
mod m20251101_000009_status;
mod m20251101_000010_candidate;
mod m20251101_000011_government;
mod m20251101_000012_influencer;
mod m20251101_000013_booth_survey;
mod m20251101_000014_booth_volunteer;
mod m20251101_000015_booth_vote;
mod m20251101_000016_potential_candidate;
mod m20251101_000017_district_polygon;
mod m20251101_000018_parliament_polygon;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_app_user::Migration),
            Box::new(m20251101_000002_state::Migration),
            Box::new(m20251101_000003_division::Migration),
            Box::new(m20251101_000004_parliament::Migration),
            Box::new(m20251101_000005_assembly::Migration),
            Box::new(m20251101_000006_block::Migration),
            Box::new(m20251101_000007_booth::Migration),
            Box::new(m20251101_000008_party::Migration),
            Box::new(m20251101_000009_status::Migration),
            Box::new(m20251101_000010_candidate::Migration),
            Box::new(m20251101_000011_government::Migration),
            Box::new(m20251101_000012_influencer::Migration),
            Box::new(m20251101_000013_booth_survey::Migration),
            Box::new(m20251101_000014_booth_volunteer::Migration),
            Box::new(m20251101_000015_booth_vote::Migration),
            Box::new(m20251101_000016_potential_candidate::Migration),
            Box::new(m20251101_000017_district_polygon::Migration),
            Box::new(m20251101_000018_parliament_polygon::Migration),
        ]
    }
}
