//! Proxy endpoint for the Sina stock feed.

use crate::error::{AppError, Result};
use crate::types::{FeedQuote, Market};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct StockQuery {
    symbols: Option<String>,
    market: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StockResponse {
    pub data: HashMap<String, Option<FeedQuote>>,
    pub timestamp: i64,
}

/// GET /?symbols=sh600519,s_sh000001&market=A
///
/// Symbols are forwarded to the feed (display symbols are resolved to feed
/// codes first); records that failed to parse upstream come back as `null`.
async fn get_quotes(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Result<Json<StockResponse>> {
    let symbols = query
        .symbols
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing symbols parameter".to_string()))?;
    let market = Market::from_query(query.market.as_deref());

    let data = state
        .sina_client
        .fetch_quotes(symbols, market)
        .await
        .map_err(|e| {
            error!("Stock API error: {}", e);
            AppError::Internal("Failed to fetch stock data".to_string())
        })?;

    Ok(Json(StockResponse {
        data,
        timestamp: chrono::Utc::now().timestamp_millis(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_quotes))
}
