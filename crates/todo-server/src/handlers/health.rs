//! Health check

use crate::AppState;
use axum::{extract::State, http::StatusCode};

pub async fn health(State(state): State<AppState>) -> Result<&'static str, StatusCode> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!("Health check failed: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    Ok("ok")
}
