use sea_orm_migration::prelude::*;

mod m20201107_000001_create_roles;
mod m20201107_000002_create_users;
mod m20201107_000003_create_rooms;
mod m20201107_000004_create_presentations;
mod m20201107_000005_create_authors;
mod m20201107_000006_create_schedule;
mod m20201107_000007_add_schedule_room_slot_unique;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20201107_000001_create_roles::Migration),
            Box::new(m20201107_000002_create_users::Migration),
            Box::new(m20201107_000003_create_rooms::Migration),
            Box::new(m20201107_000004_create_presentations::Migration),
            Box::new(m20201107_000005_create_authors::Migration),
            Box::new(m20201107_000006_create_schedule::Migration),
            Box::new(m20201107_000007_add_schedule_room_slot_unique::Migration),
        ]
    }
}
