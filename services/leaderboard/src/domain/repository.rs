#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{OtpCode, Player, Score, ScoreTotal};
use crate::error::LeaderboardError;

/// Repository for registered players.
pub trait PlayerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Player>, LeaderboardError>;

    async fn phone_exists(&self, phone_no: &str) -> Result<bool, LeaderboardError>;

    async fn create(&self, player: &Player) -> Result<(), LeaderboardError>;
}

/// Repository for one-time passcodes.
pub trait OtpRepository: Send + Sync {
    /// Atomically drop any previous code for this phone number and store the
    /// new one. A missing number matches previously stored null-number rows.
    async fn replace_for_phone(&self, code: &OtpCode) -> Result<(), LeaderboardError>;

    /// Most recent code stored for phone + code string, expired or not.
    /// Expiry is the caller's concern so stale codes can be reported as such.
    async fn find_latest(
        &self,
        phone_no: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, LeaderboardError>;
}

/// Repository for the append-only score ledger.
pub trait ScoreRepository: Send + Sync {
    /// Append `score` unless the player already has `cap` entries dated the
    /// score's UTC day. Returns `false` (and writes nothing) when capped.
    /// The cap check and the insert are atomic.
    async fn insert_within_daily_cap(
        &self,
        score: &Score,
        cap: u64,
    ) -> Result<bool, LeaderboardError>;

    /// All-time per-player sums, highest total first.
    async fn overall_totals(&self) -> Result<Vec<ScoreTotal>, LeaderboardError>;

    /// Per-player sums within `[start, end)`, upper bound exclusive, highest
    /// total first.
    async fn totals_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ScoreTotal>, LeaderboardError>;
}
