use axum::http::StatusCode;

/// Handler for `GET /healthz`. Answers as long as the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`. Services can swap in their own check if
/// readiness means more than being up.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
