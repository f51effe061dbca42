use sea_orm_migration::prelude::*;

mod m20250328_000001_create_players;
mod m20250328_000002_create_otps;
mod m20250328_000003_create_scores;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250328_000001_create_players::Migration),
            Box::new(m20250328_000002_create_otps::Migration),
            Box::new(m20250328_000003_create_scores::Migration),
        ]
    }
}
