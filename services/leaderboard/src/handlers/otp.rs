use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::LeaderboardError;
use crate::state::AppState;
use crate::usecase::otp::{SendOtpInput, SendOtpUseCase};
use crate::validation::{FieldErrors, phone_number};

// ── POST /sendOtp ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Optional; when present, 9 to 12 digits.
    #[validate(custom(function = phone_number))]
    pub phone_no: Option<String>,
}

#[derive(Serialize)]
pub struct SendOtpResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, LeaderboardError> {
    if let Err(errors) = body.validate() {
        return Err(LeaderboardError::Validation(FieldErrors::from(errors)));
    }

    let usecase = SendOtpUseCase {
        otps: state.otp_repo(),
    };
    usecase
        .execute(SendOtpInput {
            phone_no: body.phone_no,
        })
        .await?;

    Ok(Json(SendOtpResponse {
        status: "success",
        message: "OTP sent successfully",
    }))
}
