use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ScoreRepository;
use crate::domain::types::{DAILY_SCORE_LIMIT, Score};
use crate::error::LeaderboardError;

pub struct SubmitScoreInput {
    pub player_id: Uuid,
    pub value: i32,
}

pub struct SubmitScoreUseCase<S: ScoreRepository> {
    pub scores: S,
}

impl<S: ScoreRepository> SubmitScoreUseCase<S> {
    pub async fn execute(&self, input: SubmitScoreInput) -> Result<(), LeaderboardError> {
        let score = Score {
            id: Uuid::now_v7(),
            player_id: input.player_id,
            value: input.value,
            created_at: Utc::now(),
        };
        let inserted = self
            .scores
            .insert_within_daily_cap(&score, DAILY_SCORE_LIMIT)
            .await?;
        if !inserted {
            return Err(LeaderboardError::RateLimitExceeded);
        }
        Ok(())
    }
}
