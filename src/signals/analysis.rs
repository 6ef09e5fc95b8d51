//! Trend and momentum classification from indicator values.

use crate::types::{Momentum, Trend};

/// Classify the trend from the three moving averages.
///
/// Strict ordering only: equal neighbors are NEUTRAL, not a tolerance match.
pub fn classify_trend(sma5: f64, sma10: f64, sma20: f64) -> Trend {
    if sma5 > sma10 && sma10 > sma20 {
        Trend::Up
    } else if sma5 < sma10 && sma10 < sma20 {
        Trend::Down
    } else {
        Trend::Neutral
    }
}

/// Classify momentum strength from RSI in the context of the trend.
pub fn classify_momentum(rsi: f64, trend: Trend) -> Momentum {
    match trend {
        Trend::Up => {
            if rsi > 60.0 {
                Momentum::Strong
            } else if rsi > 45.0 {
                Momentum::Moderate
            } else {
                Momentum::Weak
            }
        }
        Trend::Down => {
            if rsi < 40.0 {
                Momentum::Strong
            } else if rsi < 55.0 {
                Momentum::Moderate
            } else {
                Momentum::Weak
            }
        }
        Trend::Neutral => Momentum::Moderate,
    }
}
