//! Normalizer for the Binance 24-hour ticker response.
//!
//! Ticker numerics arrive as strings; coercion is failure-tolerant and the
//! batch output is sorted by notional volume descending, which downstream
//! consumers rely on for "top by volume" display.

use crate::parse::round_to;
use crate::types::CryptoQuote;
use serde::Deserialize;

/// Binance 24hr ticker response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceTicker {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub last_price: String,
    #[serde(default)]
    pub price_change: String,
    #[serde(default)]
    pub price_change_percent: String,
    #[serde(default)]
    pub high_price: String,
    #[serde(default)]
    pub low_price: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub quote_volume: String,
}

/// Coerce a string-encoded numeric field; unparsable values become 0.
pub fn coerce(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Normalize one ticker into a canonical crypto quote.
pub fn normalize(ticker: &BinanceTicker, symbol: &str, name: &str) -> CryptoQuote {
    let price = coerce(&ticker.last_price);
    let change = coerce(&ticker.price_change);
    let change_percent = coerce(&ticker.price_change_percent);

    // Sub-dollar assets need more precision for the absolute change.
    let change_digits = if price < 1.0 { 6 } else { 2 };

    let high = coerce(&ticker.high_price);
    let low = coerce(&ticker.low_price);

    CryptoQuote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change: round_to(change, change_digits),
        change_percent: round_to(change_percent, 2),
        high24h: if high == 0.0 { price } else { high },
        low24h: if low == 0.0 { price } else { low },
        volume24h: coerce(&ticker.quote_volume),
        market_cap: 0.0,
        sparkline: None,
        currency: "USD".to_string(),
    }
}

/// Order a batch of quotes by notional volume, highest first.
pub fn sort_by_volume(mut quotes: Vec<CryptoQuote>) -> Vec<CryptoQuote> {
    quotes.sort_by(|a, b| {
        b.volume24h
            .partial_cmp(&a.volume24h)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(last: &str, change: &str, pct: &str, high: &str, low: &str, quote_vol: &str) -> BinanceTicker {
        BinanceTicker {
            symbol: "BTCUSDT".to_string(),
            last_price: last.to_string(),
            price_change: change.to_string(),
            price_change_percent: pct.to_string(),
            high_price: high.to_string(),
            low_price: low.to_string(),
            volume: "668000".to_string(),
            quote_volume: quote_vol.to_string(),
        }
    }

    #[test]
    fn test_ticker_deserialization() {
        let json = r#"{
            "symbol": "BTCUSDT",
            "lastPrice": "43256.78",
            "priceChange": "1234.56",
            "priceChangePercent": "2.94",
            "highPrice": "43890.00",
            "lowPrice": "41560.00",
            "volume": "668000",
            "quoteVolume": "28900000000"
        }"#;

        let ticker: BinanceTicker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.last_price, "43256.78");
        assert_eq!(ticker.quote_volume, "28900000000");
    }

    #[test]
    fn test_ticker_missing_fields_default_empty() {
        let json = r#"{"symbol": "ETHUSDT", "lastPrice": "2500.00"}"#;
        let ticker: BinanceTicker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.price_change, "");
        assert_eq!(coerce(&ticker.price_change), 0.0);
    }

    #[test]
    fn test_normalize_standard_ticker() {
        let t = ticker(
            "43256.78",
            "1234.56",
            "2.94",
            "43890.00",
            "41560.00",
            "28900000000",
        );
        let quote = normalize(&t, "BTC", "Bitcoin");

        assert_eq!(quote.price, 43256.78);
        assert_eq!(quote.change, 1234.56);
        assert_eq!(quote.change_percent, 2.94);
        assert_eq!(quote.high24h, 43890.00);
        assert_eq!(quote.low24h, 41560.00);
        assert_eq!(quote.volume24h, 28_900_000_000.0);
        assert_eq!(quote.market_cap, 0.0);
        assert_eq!(quote.currency, "USD");
    }

    #[test]
    fn test_normalize_sub_dollar_change_precision() {
        let t = ticker("0.082345", "0.00123456", "1.52", "0.0850", "0.0790", "800000000");
        let quote = normalize(&t, "DOGE", "Dogecoin");

        assert_eq!(quote.change, 0.001235);
        assert_eq!(quote.change_percent, 1.52);
    }

    #[test]
    fn test_normalize_unparsable_fields_coerce_to_zero() {
        let t = ticker("not-a-number", "", "abc", "", "", "");
        let quote = normalize(&t, "BTC", "Bitcoin");

        assert_eq!(quote.price, 0.0);
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.change_percent, 0.0);
        assert_eq!(quote.volume24h, 0.0);
    }

    #[test]
    fn test_normalize_missing_high_low_default_to_price() {
        let t = ticker("2500.00", "10.00", "0.40", "", "", "250000000");
        let quote = normalize(&t, "ETH", "Ethereum");

        assert_eq!(quote.high24h, 2500.00);
        assert_eq!(quote.low24h, 2500.00);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let t = ticker("0.4567", "0.0123", "2.77", "0.47", "0.44", "120000000");
        let first = normalize(&t, "ADA", "Cardano");
        let second = normalize(&t, "ADA", "Cardano");
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_by_volume_descending() {
        let quotes = vec![
            normalize(&ticker("100", "1", "1", "101", "99", "5000"), "A", "A"),
            normalize(&ticker("100", "1", "1", "101", "99", "9000"), "B", "B"),
            normalize(&ticker("100", "1", "1", "101", "99", "7000"), "C", "C"),
        ];

        let sorted = sort_by_volume(quotes);
        let symbols: Vec<&str> = sorted.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["B", "C", "A"]);
    }
}
