use sea_orm::DatabaseConnection;

use crate::infra::db::{DbOtpRepository, DbPlayerRepository, DbScoreRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn player_repo(&self) -> DbPlayerRepository {
        DbPlayerRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: self.db.clone(),
        }
    }

    pub fn score_repo(&self) -> DbScoreRepository {
        DbScoreRepository {
            db: self.db.clone(),
        }
    }
}
