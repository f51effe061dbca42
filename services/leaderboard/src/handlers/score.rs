use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::CurrentPlayer;
use crate::error::LeaderboardError;
use crate::state::AppState;
use crate::usecase::score::{SubmitScoreInput, SubmitScoreUseCase};
use crate::validation::FieldErrors;

// ── POST /postScore ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct PostScoreRequest {
    #[validate(range(
        min = 50,
        max = 500,
        message = "The score must be between 50 and 500."
    ))]
    pub score: Option<i32>,
}

#[derive(Serialize)]
pub struct PostScoreResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn post_score(
    State(state): State<AppState>,
    CurrentPlayer(player): CurrentPlayer,
    Json(body): Json<PostScoreRequest>,
) -> Result<Json<PostScoreResponse>, LeaderboardError> {
    let mut errors = match body.validate() {
        Ok(()) => FieldErrors::default(),
        Err(e) => FieldErrors::from(e),
    };
    errors.require(&[("score", body.score.is_some())]);
    if !errors.is_empty() {
        return Err(LeaderboardError::Validation(errors));
    }

    let usecase = SubmitScoreUseCase {
        scores: state.score_repo(),
    };
    usecase
        .execute(SubmitScoreInput {
            player_id: player.id,
            value: body.score.unwrap_or_default(),
        })
        .await?;

    Ok(Json(PostScoreResponse {
        status: "success",
        message: "Score saved successfully.",
    }))
}
