pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_invites_table;
mod m20260301_000002_create_invite_uses_table;
mod m20260301_000003_create_log_channels_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_invites_table::Migration),
            Box::new(m20260301_000002_create_invite_uses_table::Migration),
            Box::new(m20260301_000003_create_log_channels_table::Migration),
        ]
    }
}
