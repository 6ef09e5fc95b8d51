//! Trading-signal generation and one-step price projection.

use crate::parse::round_to;
use crate::signals::analysis::{classify_momentum, classify_trend};
use crate::signals::indicators::{ema, rsi, sma, RSI_PERIOD};
use crate::types::{IndicatorSet, Momentum, Prediction, TradeSignal, Trend};
use rand::Rng;

/// Conceptual price-history window length. Shorter windows are discarded
/// and re-synthesized so the indicator math always sees a full window.
pub const HISTORY_LEN: usize = 20;

const HOLD_REASON: &str = "Range-bound market, hold";

/// Generate a prediction for one instrument.
///
/// `history` is the preferred price window (oldest first); when it is absent
/// or shorter than [`HISTORY_LEN`] a deterministic-length synthetic window
/// anchored to the current price is used instead. The result is a pure
/// function of the inputs apart from the synthetic-window noise.
pub fn predict(symbol: &str, name: &str, price: f64, history: Option<&[f64]>) -> Prediction {
    let prices: Vec<f64> = match history {
        Some(h) if h.len() >= HISTORY_LEN => h.to_vec(),
        _ => synthesize_history(price, HISTORY_LEN),
    };

    let sma5 = sma(&prices, 5);
    let sma10 = sma(&prices, 10);
    let sma20 = sma(&prices, 20);
    let rsi_value = rsi(&prices, RSI_PERIOD);

    let trend = classify_trend(sma5, sma10, sma20);
    let momentum = classify_momentum(rsi_value, trend);

    let (signal, confidence, reason) = generate_signal(rsi_value, trend, price, sma5, sma20);

    let predicted_price = project_price(&prices, price, trend, momentum);
    let price_change = predicted_price - price;
    let change_percent = if price == 0.0 {
        0.0
    } else {
        price_change / price * 100.0
    };

    let digits = if price > 100.0 { 2 } else { 4 };

    Prediction {
        symbol: symbol.to_string(),
        name: name.to_string(),
        current_price: price,
        predicted_price: round_to(predicted_price, digits),
        price_change: round_to(price_change, digits),
        change_percent: round_to(change_percent, 2),
        confidence,
        signal,
        reason,
        indicators: IndicatorSet {
            sma5: round_to(sma5, 2),
            sma10: round_to(sma10, 2),
            sma20: round_to(sma20, 2),
            rsi: round_to(rsi_value, 1),
            trend,
            momentum,
        },
    }
}

/// Evaluate the signal rules in fixed priority order.
///
/// Confidence starts at 50, accumulates additively and is clamped to
/// [30, 95] at the end.
pub fn generate_signal(
    rsi: f64,
    trend: Trend,
    price: f64,
    sma5: f64,
    sma20: f64,
) -> (TradeSignal, u8, String) {
    let mut signal = TradeSignal::Hold;
    let mut confidence: i32 = 50;
    let mut reasons: Vec<&str> = Vec::new();

    if rsi < 30.0 {
        signal = TradeSignal::Buy;
        confidence += 20;
        reasons.push("RSI oversold");
    } else if rsi > 70.0 {
        signal = TradeSignal::Sell;
        confidence += 20;
        reasons.push("RSI overbought");
    }

    if sma5 > sma20 && price > sma5 {
        if signal != TradeSignal::Sell {
            signal = TradeSignal::Buy;
            confidence += 15;
            reasons.push("golden cross");
        }
    } else if sma5 < sma20 && price < sma5 && signal != TradeSignal::Buy {
        signal = TradeSignal::Sell;
        confidence += 15;
        reasons.push("death cross");
    }

    if trend == Trend::Up && signal == TradeSignal::Buy {
        confidence += 10;
        reasons.push("uptrend");
    } else if trend == Trend::Down && signal == TradeSignal::Sell {
        confidence += 10;
        reasons.push("downtrend");
    }

    if price > sma20 && signal == TradeSignal::Buy {
        confidence += 5;
    } else if price < sma20 && signal == TradeSignal::Sell {
        confidence += 5;
    }

    let confidence = confidence.clamp(30, 95) as u8;
    let reason = if reasons.is_empty() {
        HOLD_REASON.to_string()
    } else {
        reasons.join(", ")
    };

    (signal, confidence, reason)
}

/// Project the next price from the short EMA and the mean per-step return,
/// scaled by a signed trend/momentum multiplier.
fn project_price(prices: &[f64], price: f64, trend: Trend, momentum: Momentum) -> f64 {
    if prices.len() < 5 || price == 0.0 {
        return price;
    }

    let ema5 = ema(prices, 5);

    let mut returns = Vec::with_capacity(prices.len() - 1);
    for pair in prices.windows(2) {
        if pair[0] != 0.0 {
            returns.push((pair[1] - pair[0]) / pair[0]);
        }
    }
    if returns.is_empty() {
        return price;
    }
    let avg_return: f64 = returns.iter().sum::<f64>() / returns.len() as f64;

    let magnitude = match momentum {
        Momentum::Strong => 1.5,
        Momentum::Moderate => 1.0,
        Momentum::Weak => 0.5,
    };
    let trend_multiplier = match trend {
        Trend::Up => magnitude,
        Trend::Down => -magnitude,
        Trend::Neutral => 0.0,
    };

    let predicted_change = avg_return * trend_multiplier + (ema5 - price) / price * 0.3;
    price * (1.0 + predicted_change)
}

/// Synthesize a history window anchored to the current price: start slightly
/// below it, apply per-step multiplicative noise with a mild upward bias,
/// and force the final sample to the current price exactly.
fn synthesize_history(price: f64, len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut current = price * (1.0 - 0.05 * rng.gen::<f64>());

    let mut prices = Vec::with_capacity(len);
    for _ in 0..len {
        let step = (rng.gen::<f64>() - 0.48) * 0.02 * current;
        current += step;
        prices.push(current);
    }
    if let Some(last) = prices.last_mut() {
        *last = price;
    }
    prices
}
