use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::issue_session_token;
use crate::domain::repository::{OtpRepository, PlayerRepository};
use crate::domain::types::Player;
use crate::error::LeaderboardError;
use crate::validation::FieldErrors;

pub struct RegisterInput {
    pub phone_no: String,
    pub name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub otp: String,
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub player: Player,
    pub token: String,
}

pub struct RegisterUseCase<P, O>
where
    P: PlayerRepository,
    O: OtpRepository,
{
    pub players: P,
    pub otps: O,
    pub jwt_secret: String,
}

impl<P, O> RegisterUseCase<P, O>
where
    P: PlayerRepository,
    O: OtpRepository,
{
    pub async fn execute(&self, input: RegisterInput) -> Result<RegisterOutput, LeaderboardError> {
        // 1. Phone number must not be registered yet. Reported as a field
        //    error, same as the rest of the request validation.
        if self.players.phone_exists(&input.phone_no).await? {
            return Err(LeaderboardError::Validation(FieldErrors::single(
                "phone_no",
                "The phone no has already been taken.",
            )));
        }

        // 2. Latest code for phone + code string, expired or not. A wrong
        //    code and a stale code report differently.
        let otp = self
            .otps
            .find_latest(&input.phone_no, &input.otp)
            .await?
            .ok_or(LeaderboardError::InvalidOtp)?;
        if otp.is_expired(Utc::now()) {
            return Err(LeaderboardError::ExpiredOtp);
        }

        // 3. Create the player and hand back a session token. The code row is
        //    left in place; the phone uniqueness above is what stops reuse.
        let player = Player {
            id: Uuid::now_v7(),
            phone_no: input.phone_no,
            name: input.name,
            dob: input.dob,
            email: input.email,
            created_at: Utc::now(),
        };
        self.players.create(&player).await?;

        let token = issue_session_token(player.id, &self.jwt_secret)?;
        Ok(RegisterOutput { player, token })
    }
}
