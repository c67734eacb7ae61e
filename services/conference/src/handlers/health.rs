use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

// ── GET /healthz ─────────────────────────────────────────────────────────────

/// Liveness: the process is serving requests.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Readiness: the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
