use sea_orm_migration::prelude::*;

use arcade_leaderboard_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
