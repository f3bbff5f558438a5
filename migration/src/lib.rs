pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_cadets;
mod m20250301_000002_create_applications;
mod m20250301_000003_create_events;
mod m20250301_000004_create_mentorships;
mod m20250301_000005_create_inventory;
mod m20250301_000006_create_activities;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_cadets::Migration),
            Box::new(m20250301_000002_create_applications::Migration),
            Box::new(m20250301_000003_create_events::Migration),
            Box::new(m20250301_000004_create_mentorships::Migration),
            Box::new(m20250301_000005_create_inventory::Migration),
            Box::new(m20250301_000006_create_activities::Migration),
        ]
    }
}
