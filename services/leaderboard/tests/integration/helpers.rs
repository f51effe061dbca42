use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use arcade_leaderboard::domain::repository::{OtpRepository, PlayerRepository, ScoreRepository};
use arcade_leaderboard::domain::types::{FIXED_OTP_CODE, OTP_TTL_SECS, OtpCode, Player, Score, ScoreTotal};
use arcade_leaderboard::error::LeaderboardError;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

// ── MockPlayerRepo ───────────────────────────────────────────────────────────

pub struct MockPlayerRepo {
    pub players: Arc<Mutex<Vec<Player>>>,
}

impl MockPlayerRepo {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players: Arc::new(Mutex::new(players)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the player list for post-execution inspection.
    pub fn players_handle(&self) -> Arc<Mutex<Vec<Player>>> {
        Arc::clone(&self.players)
    }
}

impl PlayerRepository for MockPlayerRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Player>, LeaderboardError> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn phone_exists(&self, phone_no: &str) -> Result<bool, LeaderboardError> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.phone_no == phone_no))
    }

    async fn create(&self, player: &Player) -> Result<(), LeaderboardError> {
        self.players.lock().unwrap().push(player.clone());
        Ok(())
    }
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

pub struct MockOtpRepo {
    pub codes: Arc<Mutex<Vec<OtpCode>>>,
}

impl MockOtpRepo {
    pub fn new(codes: Vec<OtpCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn codes_handle(&self) -> Arc<Mutex<Vec<OtpCode>>> {
        Arc::clone(&self.codes)
    }
}

impl OtpRepository for MockOtpRepo {
    async fn replace_for_phone(&self, code: &OtpCode) -> Result<(), LeaderboardError> {
        let mut codes = self.codes.lock().unwrap();
        codes.retain(|c| c.phone_no != code.phone_no);
        codes.push(code.clone());
        Ok(())
    }

    async fn find_latest(
        &self,
        phone_no: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, LeaderboardError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.phone_no.as_deref() == Some(phone_no) && c.code == code)
            .max_by_key(|c| c.created_at)
            .cloned())
    }
}

// ── MockScoreRepo ────────────────────────────────────────────────────────────

/// In-memory ledger. The grouped sums mirror the SQL queries: per-player
/// totals sorted by total descending.
pub struct MockScoreRepo {
    pub scores: Arc<Mutex<Vec<Score>>>,
}

impl MockScoreRepo {
    pub fn new(scores: Vec<Score>) -> Self {
        Self {
            scores: Arc::new(Mutex::new(scores)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn scores_handle(&self) -> Arc<Mutex<Vec<Score>>> {
        Arc::clone(&self.scores)
    }

    fn totals_where(&self, keep: impl Fn(&Score) -> bool) -> Vec<ScoreTotal> {
        let mut sums: BTreeMap<Uuid, i64> = BTreeMap::new();
        for score in self.scores.lock().unwrap().iter().filter(|s| keep(s)) {
            *sums.entry(score.player_id).or_default() += i64::from(score.value);
        }
        let mut totals: Vec<ScoreTotal> = sums
            .into_iter()
            .map(|(player_id, total)| ScoreTotal { player_id, total })
            .collect();
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals
    }
}

impl ScoreRepository for MockScoreRepo {
    async fn insert_within_daily_cap(
        &self,
        score: &Score,
        cap: u64,
    ) -> Result<bool, LeaderboardError> {
        let mut scores = self.scores.lock().unwrap();
        let day = score.created_at.date_naive();
        let submitted_today = scores
            .iter()
            .filter(|s| s.player_id == score.player_id && s.created_at.date_naive() == day)
            .count() as u64;
        if submitted_today >= cap {
            return Ok(false);
        }
        scores.push(score.clone());
        Ok(true)
    }

    async fn overall_totals(&self) -> Result<Vec<ScoreTotal>, LeaderboardError> {
        Ok(self.totals_where(|_| true))
    }

    async fn totals_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ScoreTotal>, LeaderboardError> {
        Ok(self.totals_where(|s| s.created_at >= start && s.created_at < end))
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_player(phone_no: &str) -> Player {
    Player {
        id: Uuid::now_v7(),
        phone_no: phone_no.to_owned(),
        name: "Test Player".to_owned(),
        dob: chrono::NaiveDate::from_ymd_opt(1990, 7, 15).unwrap(),
        email: "player@example.com".to_owned(),
        created_at: Utc::now(),
    }
}

/// A fresh, unexpired code for `phone_no`.
pub fn test_otp(phone_no: &str) -> OtpCode {
    let now = Utc::now();
    OtpCode {
        id: Uuid::now_v7(),
        phone_no: Some(phone_no.to_owned()),
        code: FIXED_OTP_CODE.to_owned(),
        expires_at: now + Duration::seconds(OTP_TTL_SECS),
        created_at: now,
    }
}

pub fn test_score(player_id: Uuid, value: i32, created_at: DateTime<Utc>) -> Score {
    Score {
        id: Uuid::now_v7(),
        player_id,
        value,
        created_at,
    }
}
