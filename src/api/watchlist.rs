//! Watchlist endpoints.

use crate::error::Result;
use crate::types::{Market, WatchlistEntry};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct WatchlistResponse {
    pub data: Vec<WatchlistEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub symbol: String,
    pub market: Market,
}

/// GET /
async fn list(State(state): State<AppState>) -> Result<Json<WatchlistResponse>> {
    let data = state.watchlist.list().await;
    Ok(Json(WatchlistResponse { data }))
}

/// POST /toggle
///
/// Add the instrument if absent, remove it if present; returns the full
/// updated list either way.
async fn toggle(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<WatchlistResponse>> {
    let data = state.watchlist.toggle(&request.symbol, request.market).await;
    Ok(Json(WatchlistResponse { data }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/toggle", post(toggle))
}
