use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use arcade_core::health::{healthz, readyz};
use arcade_core::middleware::request_id_layer;

use crate::handlers::{
    leaderboard::{overall_score, weekly_score},
    otp::send_otp,
    register::register,
    score::post_score,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration
        .route("/sendOtp", post(send_otp))
        .route("/register", post(register))
        // Scores (bearer auth)
        .route("/postScore", post(post_score))
        .route("/overallScore", get(overall_score))
        .route("/weeklyScore", get(weekly_score))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
