use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::repository::ScoreRepository;
use crate::domain::types::ScoreTotal;
use crate::domain::week::elapsed_weeks;
use crate::error::LeaderboardError;

// ── OverallRank ──────────────────────────────────────────────────────────────

/// All-time standing for one player. `rank` is `None` when the player has
/// never submitted a score.
#[derive(Debug, PartialEq, Eq)]
pub struct OverallStanding {
    pub total_score: i64,
    pub rank: Option<u64>,
}

pub struct OverallRankUseCase<S: ScoreRepository> {
    pub scores: S,
}

impl<S: ScoreRepository> OverallRankUseCase<S> {
    pub async fn execute(&self, player_id: Uuid) -> Result<OverallStanding, LeaderboardError> {
        let totals = self.scores.overall_totals().await?;
        Ok(match standing(&totals, player_id) {
            Some((rank, total)) => OverallStanding {
                total_score: total,
                rank: Some(rank),
            },
            None => OverallStanding {
                total_score: 0,
                rank: None,
            },
        })
    }
}

// ── WeeklyRank ───────────────────────────────────────────────────────────────

/// Standing for one player in one weekly window. Unlike the overall endpoint,
/// an absent player reports rank 0 rather than a null rank.
#[derive(Debug, PartialEq, Eq)]
pub struct WeeklyStanding {
    pub week_no: u32,
    pub rank: u64,
    pub total_score: i64,
}

pub struct WeeklyRankUseCase<S: ScoreRepository> {
    pub scores: S,
}

impl<S: ScoreRepository> WeeklyRankUseCase<S> {
    /// Standings for every window elapsed since the anchor, oldest first.
    /// `now` is a parameter so the window set stays testable.
    pub async fn execute(
        &self,
        player_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<WeeklyStanding>, LeaderboardError> {
        let mut standings = Vec::new();
        for window in elapsed_weeks(now) {
            let totals = self.scores.totals_between(window.start, window.end).await?;
            let (rank, total_score) = standing(&totals, player_id).unwrap_or((0, 0));
            standings.push(WeeklyStanding {
                week_no: window.week_no,
                rank,
                total_score,
            });
        }
        Ok(standings)
    }
}

/// 1-indexed position and total for `player_id` in a descending totals list.
fn standing(totals: &[ScoreTotal], player_id: Uuid) -> Option<(u64, i64)> {
    totals
        .iter()
        .position(|t| t.player_id == player_id)
        .map(|idx| (idx as u64 + 1, totals[idx].total))
}
