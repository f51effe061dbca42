use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Registered player. Created once at registration, immutable afterwards.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: Uuid,
    pub phone_no: String,
    pub name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// One-time passcode issued for a phone number. The number is optional
/// because OTP requests accept a missing one.
#[derive(Debug, Clone)]
pub struct OtpCode {
    pub id: Uuid,
    pub phone_no: Option<String>,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl OtpCode {
    /// The code stays good through the stored expiry instant itself.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Single entry in the append-only score ledger.
#[derive(Debug, Clone)]
pub struct Score {
    pub id: Uuid,
    pub player_id: Uuid,
    pub value: i32,
    pub created_at: DateTime<Utc>,
}

/// Per-player sum produced by the ranking queries, ordered highest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTotal {
    pub player_id: Uuid,
    pub total: i64,
}

/// Code stored for every OTP request. The legacy flow ships a fixed code and
/// never sends an SMS; kept for compatibility. Not safe for production use.
pub const FIXED_OTP_CODE: &str = "1234";

/// OTP time-to-live in seconds.
pub const OTP_TTL_SECS: i64 = 60;

/// Maximum score submissions per player per UTC day.
pub const DAILY_SCORE_LIMIT: u64 = 3;

/// Lowest accepted score value.
pub const SCORE_MIN: i32 = 50;

/// Highest accepted score value.
pub const SCORE_MAX: i32 = 500;
