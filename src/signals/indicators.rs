//! Moving averages and the relative strength index.
//!
//! All functions take an ordered price history, oldest first, and degrade
//! gracefully on short input instead of failing.

/// Default RSI lookback period.
pub const RSI_PERIOD: usize = 14;

/// Simple moving average over the trailing `period` samples.
///
/// Fewer than `period` samples degrades to the most recent sample.
pub fn sma(prices: &[f64], period: usize) -> f64 {
    if prices.len() < period {
        return prices.last().copied().unwrap_or(0.0);
    }
    prices[prices.len() - period..].iter().sum::<f64>() / period as f64
}

/// Exponential moving average: SMA seed over the first `period` samples,
/// then multiplier `2/(period+1)` applied forward.
pub fn ema(prices: &[f64], period: usize) -> f64 {
    if prices.len() < period {
        return prices.last().copied().unwrap_or(0.0);
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut ema = prices[..period].iter().sum::<f64>() / period as f64;
    for price in &prices[period..] {
        ema = (price - ema) * multiplier + ema;
    }
    ema
}

/// Wilder-smoothed RSI.
///
/// Fewer than `period + 1` samples returns the neutral 50. A window with
/// gains but no losses after convergence returns 100; a fully flat window
/// (no gains and no losses) is "no signal" and also returns the neutral 50.
/// Those are distinct degenerate states and must stay separate.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if prices.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses += -change;
        }
    }

    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;

    for i in period + 1..prices.len() {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            avg_gain = (avg_gain * (period - 1) as f64 + change) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64) / period as f64;
        } else {
            avg_gain = (avg_gain * (period - 1) as f64) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + change.abs()) / period as f64;
        }
    }

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return 50.0;
        }
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_constant_sequence() {
        let prices = vec![42.0; 20];
        assert_eq!(sma(&prices, 5), 42.0);
        assert_eq!(sma(&prices, 10), 42.0);
        assert_eq!(sma(&prices, 20), 42.0);
    }

    #[test]
    fn test_sma_trailing_window() {
        let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(sma(&prices, 3), 5.0);
    }

    #[test]
    fn test_sma_short_input_degrades_to_last_sample() {
        let prices = vec![10.0, 20.0, 30.0];
        assert_eq!(sma(&prices, 5), 30.0);
        assert_eq!(sma(&[], 5), 0.0);
    }

    #[test]
    fn test_ema_constant_sequence() {
        let prices = vec![7.5; 20];
        assert!((ema(&prices, 5) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_ema_weights_recent_prices() {
        let mut prices = vec![100.0; 15];
        prices.extend_from_slice(&[110.0, 112.0, 114.0, 116.0, 118.0]);

        let e = ema(&prices, 5);
        let s = sma(&prices, 20);
        assert!(e > s, "EMA {} should exceed the full-window SMA {}", e, s);
    }

    #[test]
    fn test_ema_short_input_degrades_to_last_sample() {
        assert_eq!(ema(&[3.0, 4.0], 5), 4.0);
    }

    #[test]
    fn test_rsi_short_input_is_neutral() {
        let prices: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
        assert_eq!(rsi(&prices, RSI_PERIOD), 50.0);
    }

    #[test]
    fn test_rsi_strictly_increasing_approaches_100() {
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 2.0).collect();
        assert_eq!(rsi(&prices, RSI_PERIOD), 100.0);
    }

    #[test]
    fn test_rsi_strictly_decreasing_approaches_0() {
        let prices: Vec<f64> = (0..30).map(|i| 200.0 - i as f64 * 2.0).collect();
        let value = rsi(&prices, RSI_PERIOD);
        assert!(value < 5.0, "RSI of a steady decline should be near 0, got {}", value);
    }

    #[test]
    fn test_rsi_flat_sequence_is_neutral_not_overbought() {
        let prices = vec![100.0; 20];
        assert_eq!(rsi(&prices, RSI_PERIOD), 50.0);
    }

    #[test]
    fn test_rsi_gains_without_losses_is_100() {
        // Flat early window, then pure gains: avg loss decays to zero while
        // avg gain stays positive.
        let mut prices = vec![100.0; 10];
        prices.extend((0..10).map(|i| 100.0 + (i + 1) as f64));
        assert_eq!(rsi(&prices, RSI_PERIOD), 100.0);
    }

    #[test]
    fn test_rsi_bounded() {
        let prices = vec![
            100.0, 101.5, 99.8, 102.3, 103.1, 101.0, 104.2, 103.5, 105.0, 104.1, 106.3, 105.8,
            107.2, 106.0, 108.5, 107.9, 109.1, 108.2, 110.4, 109.7,
        ];
        let value = rsi(&prices, RSI_PERIOD);
        assert!((0.0..=100.0).contains(&value));
    }
}
