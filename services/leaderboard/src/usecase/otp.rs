use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::repository::OtpRepository;
use crate::domain::types::{FIXED_OTP_CODE, OTP_TTL_SECS, OtpCode};
use crate::error::LeaderboardError;

pub struct SendOtpInput {
    pub phone_no: Option<String>,
}

pub struct SendOtpUseCase<O: OtpRepository> {
    pub otps: O,
}

impl<O: OtpRepository> SendOtpUseCase<O> {
    pub async fn execute(&self, input: SendOtpInput) -> Result<(), LeaderboardError> {
        let now = Utc::now();
        let code = OtpCode {
            id: Uuid::now_v7(),
            phone_no: input.phone_no,
            code: FIXED_OTP_CODE.to_owned(),
            expires_at: now + Duration::seconds(OTP_TTL_SECS),
            created_at: now,
        };
        // Reissuing invalidates any previous code for the same number.
        self.otps.replace_for_phone(&code).await
    }
}
