use sea_orm::Database;
use tracing::info;

use arcade_core::tracing::init_tracing;
use arcade_leaderboard::config::LeaderboardConfig;
use arcade_leaderboard::router::build_router;
use arcade_leaderboard::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = LeaderboardConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.leaderboard_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("leaderboard service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
