pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_trip_table;
mod m20260901_000003_create_trip_member_table;
mod m20260901_000004_create_trip_invite_table;
mod m20260902_000005_create_itinerary_item_table;
mod m20260902_000006_create_cost_table;
mod m20260902_000007_create_cost_share_table;
mod m20260903_000008_create_task_table;
mod m20260904_000009_create_poll_table;
mod m20260904_000010_create_poll_option_table;
mod m20260904_000011_create_vote_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_trip_table::Migration),
            Box::new(m20260901_000003_create_trip_member_table::Migration),
            Box::new(m20260901_000004_create_trip_invite_table::Migration),
            Box::new(m20260902_000005_create_itinerary_item_table::Migration),
            Box::new(m20260902_000006_create_cost_table::Migration),
            Box::new(m20260902_000007_create_cost_share_table::Migration),
            Box::new(m20260903_000008_create_task_table::Migration),
            Box::new(m20260904_000009_create_poll_table::Migration),
            Box::new(m20260904_000010_create_poll_option_table::Migration),
            Box::new(m20260904_000011_create_vote_table::Migration),
        ]
    }
}
