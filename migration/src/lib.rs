pub use sea_orm_migration::prelude::*;

mod m20250110_000001_create_user_table;
mod m20250110_000002_create_classroom_table;
mod m20250110_000003_create_tag_table;
mod m20250111_000004_create_event_table;
mod m20250111_000005_create_event_tag_table;
mod m20250118_000006_create_event_participant_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_user_table::Migration),
            Box::new(m20250110_000002_create_classroom_table::Migration),
            Box::new(m20250110_000003_create_tag_table::Migration),
            Box::new(m20250111_000004_create_event_table::Migration),
            Box::new(m20250111_000005_create_event_tag_table::Migration),
            Box::new(m20250118_000006_create_event_participant_table::Migration),
        ]
    }
}
