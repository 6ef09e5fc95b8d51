//! Prediction endpoints.

use crate::error::{AppError, Result};
use crate::parse::ticker::normalize;
use crate::signals::predict;
use crate::sources::binance::lookup_pair;
use crate::types::Prediction;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub symbol: String,
    /// Display name; defaults to the symbol.
    pub name: Option<String>,
    pub price: f64,
    /// Price window, oldest first. Windows shorter than the analysis
    /// length are replaced with a synthetic one.
    pub history: Option<Vec<f64>>,
}

/// POST /predict
///
/// Run the analysis pipeline over caller-supplied prices.
async fn predict_custom(Json(request): Json<PredictRequest>) -> Result<Json<Prediction>> {
    if request.price <= 0.0 {
        return Err(AppError::BadRequest("Price must be positive".to_string()));
    }

    let name = request.name.as_deref().unwrap_or(&request.symbol);
    let prediction = predict(
        &request.symbol,
        name,
        request.price,
        request.history.as_deref(),
    );
    Ok(Json(prediction))
}

/// GET /:symbol
///
/// Fetch the live ticker for a supported crypto pair and predict from it.
async fn predict_crypto(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Prediction>> {
    let (display, pair, name) = lookup_pair(&symbol)
        .ok_or_else(|| AppError::NotFound(format!("Unknown symbol: {}", symbol)))?;

    let ticker = state.binance_client.fetch_ticker(pair).await.map_err(|e| {
        error!("Signals API error for {}: {}", pair, e);
        AppError::ExternalApi(format!("Failed to fetch ticker for {}", display))
    })?;

    let quote = normalize(&ticker, display, name);
    if quote.price <= 0.0 {
        return Err(AppError::ExternalApi(format!(
            "No usable price for {}",
            display
        )));
    }

    Ok(Json(predict(display, name, quote.price, None)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict_custom))
        .route("/:symbol", get(predict_crypto))
}
