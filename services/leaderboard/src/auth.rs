use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::FromRequestParts;
use http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repository::PlayerRepository;
use crate::domain::types::Player;
use crate::error::LeaderboardError;
use crate::state::AppState;

/// Session token lifetime in seconds.
pub const SESSION_TTL_SECS: u64 = 3600;

/// JWT claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a session token for a freshly registered player.
pub fn issue_session_token(player_id: Uuid, secret: &str) -> Result<String, LeaderboardError> {
    let claims = SessionClaims {
        sub: player_id.to_string(),
        exp: now_secs() + SESSION_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| LeaderboardError::Internal(e.into()))
}

/// Validate a session token (signature + expiry) and return its claims.
pub fn validate_session_token(
    token: &str,
    secret: &str,
) -> Result<SessionClaims, LeaderboardError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| LeaderboardError::InvalidToken)?;

    Ok(data.claims)
}

/// Resolve a bearer token to its player row.
///
/// A missing, malformed, or expired token fails `InvalidToken` (401); a token
/// that verifies but names a player row that no longer exists fails
/// `PlayerNotFound` (404). The legacy middleware drew the same line. Generic
/// over the repository so the lookup stays testable without a database.
pub async fn authenticate<P: PlayerRepository>(
    players: &P,
    token: Option<&str>,
    secret: &str,
) -> Result<Player, LeaderboardError> {
    let token = token.ok_or(LeaderboardError::InvalidToken)?;
    let claims = validate_session_token(token, secret)?;
    let player_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| LeaderboardError::InvalidToken)?;
    players
        .find_by_id(player_id)
        .await?
        .ok_or(LeaderboardError::PlayerNotFound)
}

/// Authenticated player resolved from the `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct CurrentPlayer(pub Player);

impl FromRequestParts<AppState> for CurrentPlayer {
    type Rejection = LeaderboardError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);
        let state = state.clone();

        async move {
            let player =
                authenticate(&state.player_repo(), token.as_deref(), &state.jwt_secret).await?;
            Ok(Self(player))
        }
    }
}
