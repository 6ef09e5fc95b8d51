//! Proxy endpoint for Binance crypto quotes.

use crate::error::{AppError, Result};
use crate::sources::binance::lookup_pair;
use crate::types::CryptoQuote;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct CryptoQuery {
    symbols: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CryptoResponse {
    pub data: Vec<CryptoQuote>,
    pub timestamp: i64,
}

/// GET /?symbols=BTC,ETH
///
/// Omitting `symbols` returns every supported pair. The response is sorted
/// by 24h notional volume descending.
async fn get_quotes(
    State(state): State<AppState>,
    Query(query): Query<CryptoQuery>,
) -> Result<Json<CryptoResponse>> {
    // Reject requests that name only unsupported symbols before any fetch.
    if let Some(ref symbols) = query.symbols {
        let any_known = symbols
            .split(',')
            .map(str::trim)
            .any(|s| lookup_pair(s).is_some());
        if !any_known {
            return Err(AppError::BadRequest("No valid symbols provided".to_string()));
        }
    }

    let data = state
        .binance_client
        .fetch_quotes(query.symbols.as_deref())
        .await
        .map_err(|e| {
            error!("Crypto API error: {}", e);
            AppError::Internal("Failed to fetch crypto data".to_string())
        })?;

    Ok(Json(CryptoResponse {
        data,
        timestamp: chrono::Utc::now().timestamp_millis(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_quotes))
}
