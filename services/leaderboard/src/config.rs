/// Leaderboard service configuration loaded from environment variables.
#[derive(Debug)]
pub struct LeaderboardConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3114). Env var: `LEADERBOARD_PORT`.
    pub leaderboard_port: u16,
}

impl LeaderboardConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            leaderboard_port: std::env::var("LEADERBOARD_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
        }
    }
}
