use serde::{Deserialize, Serialize};

/// Moving-average trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Momentum strength relative to the prevailing trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Momentum {
    Strong,
    Moderate,
    Weak,
}

/// Trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSignal {
    Buy,
    Sell,
    Hold,
}

/// Derived indicator snapshot, recomputed per prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    pub sma5: f64,
    pub sma10: f64,
    pub sma20: f64,
    pub rsi: f64,
    pub trend: Trend,
    pub momentum: Momentum,
}

/// One-step-ahead price prediction with its supporting indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub predicted_price: f64,
    /// Predicted absolute price change.
    pub price_change: f64,
    /// Predicted percent change.
    pub change_percent: f64,
    /// Confidence score, clamped to 30-95.
    pub confidence: u8,
    pub signal: TradeSignal,
    pub reason: String,
    pub indicators: IndicatorSet,
}
