//! Liveness and readiness probes
//!
//! `/livez` only proves the process answers HTTP. `/readyz` also pings storage.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /livez
async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz
async fn readyz(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.store.ping().await.map_err(ApiError::Unavailable)?;
    Ok(StatusCode::OK)
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn livez_returns_ok() {
        assert_eq!(livez().await, StatusCode::OK);
    }
}
