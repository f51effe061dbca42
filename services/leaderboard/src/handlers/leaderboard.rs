use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::auth::CurrentPlayer;
use crate::error::LeaderboardError;
use crate::state::AppState;
use crate::usecase::leaderboard::{OverallRankUseCase, WeeklyRankUseCase};

// ── GET /overallScore ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OverallScoreResponse {
    pub status: &'static str,
    pub total_score: i64,
    /// `null` when the player has never submitted a score.
    pub rank: Option<u64>,
}

pub async fn overall_score(
    State(state): State<AppState>,
    CurrentPlayer(player): CurrentPlayer,
) -> Result<Json<OverallScoreResponse>, LeaderboardError> {
    let usecase = OverallRankUseCase {
        scores: state.score_repo(),
    };
    let standing = usecase.execute(player.id).await?;

    Ok(Json(OverallScoreResponse {
        status: "success",
        total_score: standing.total_score,
        rank: standing.rank,
    }))
}

// ── GET /weeklyScore ──────────────────────────────────────────────────────────

/// One weekly entry, camelCased like the legacy payload.
#[derive(Serialize)]
pub struct WeekEntry {
    #[serde(rename = "weekNo")]
    pub week_no: u32,
    pub rank: u64,
    #[serde(rename = "totalScore")]
    pub total_score: i64,
}

#[derive(Serialize)]
pub struct WeeklyScoreResponse {
    pub success: bool,
    pub weeks: Vec<WeekEntry>,
}

pub async fn weekly_score(
    State(state): State<AppState>,
    CurrentPlayer(player): CurrentPlayer,
) -> Result<Json<WeeklyScoreResponse>, LeaderboardError> {
    let usecase = WeeklyRankUseCase {
        scores: state.score_repo(),
    };
    let standings = usecase.execute(player.id, Utc::now()).await?;

    let weeks = standings
        .into_iter()
        .map(|s| WeekEntry {
            week_no: s.week_no,
            rank: s.rank,
            total_score: s.total_score,
        })
        .collect();

    Ok(Json(WeeklyScoreResponse {
        success: true,
        weeks,
    }))
}
