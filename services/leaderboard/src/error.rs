use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::validation::FieldErrors;

/// Leaderboard service error variants. Display strings double as the
/// client-facing messages, all preserved verbatim from the legacy API.
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("Invalid OTP")]
    InvalidOtp,
    #[error("OTP expired")]
    ExpiredOtp,
    #[error("You can only submit score 3 times per day not more than 3 times")]
    RateLimitExceeded,
    #[error("Token invalid or missing")]
    InvalidToken,
    #[error("User not found")]
    PlayerNotFound,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl LeaderboardError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidOtp => "INVALID_OTP",
            Self::ExpiredOtp => "EXPIRED_OTP",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for LeaderboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidOtp | Self::ExpiredOtp | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::RateLimitExceeded => StatusCode::FORBIDDEN,
            Self::PlayerNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only; TraceLayer already records method/uri/status for every
        // request, and 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = self.kind(), "internal error");
        }
        // Three envelope shapes survive from the legacy API: a field map for
        // validation, `success: false` for the auth middleware failures, and
        // `status: error` for everything else.
        let body = match &self {
            Self::Validation(errors) => serde_json::json!({ "errors": errors }),
            Self::InvalidToken | Self::PlayerNotFound => serde_json::json!({
                "success": false,
                "message": self.to_string(),
            }),
            _ => serde_json::json!({
                "status": "error",
                "message": self.to_string(),
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}
