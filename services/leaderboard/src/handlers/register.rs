use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::LeaderboardError;
use crate::state::AppState;
use crate::usecase::register::{RegisterInput, RegisterUseCase};
use crate::validation::{FieldErrors, iso_date, otp_code, parse_date, phone_number_exact};

// ── POST /register ────────────────────────────────────────────────────────────

/// Every field is required; absence is reported alongside the format errors
/// so one response carries the full field-error map.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = phone_number_exact))]
    pub phone_no: Option<String>,
    #[validate(length(
        max = 255,
        message = "The name may not be greater than 255 characters."
    ))]
    pub name: Option<String>,
    #[validate(custom(function = iso_date))]
    pub dob: Option<String>,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,
    #[validate(custom(function = otp_code))]
    pub otp: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub token: String,
}

/// An absent field and an empty string are both "missing" to the required
/// check, matching the legacy validator.
fn provided(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, LeaderboardError> {
    let mut errors = match body.validate() {
        Ok(()) => FieldErrors::default(),
        Err(e) => FieldErrors::from(e),
    };
    errors.require(&[
        ("phone_no", provided(&body.phone_no)),
        ("name", provided(&body.name)),
        ("dob", provided(&body.dob)),
        ("email", provided(&body.email)),
        ("otp", provided(&body.otp)),
    ]);
    if !errors.is_empty() {
        return Err(LeaderboardError::Validation(errors));
    }

    // All fields are present and well-formed past this point.
    let dob = body
        .dob
        .as_deref()
        .and_then(parse_date)
        .ok_or_else(|| LeaderboardError::Validation(FieldErrors::single(
            "dob",
            "The dob is not a valid date.",
        )))?;

    let usecase = RegisterUseCase {
        players: state.player_repo(),
        otps: state.otp_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase
        .execute(RegisterInput {
            phone_no: body.phone_no.unwrap_or_default(),
            name: body.name.unwrap_or_default(),
            dob,
            email: body.email.unwrap_or_default(),
            otp: body.otp.unwrap_or_default(),
        })
        .await?;

    Ok(Json(RegisterResponse {
        status: "success",
        message: "Registration successful",
        token: output.token,
    }))
}
