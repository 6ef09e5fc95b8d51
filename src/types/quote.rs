use serde::{Deserialize, Serialize};

/// Quote for a market index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Traded share count, normalized to shares (not lots).
    pub volume: f64,
    /// Notional traded amount in currency units.
    pub turnover: f64,
}

/// Quote for a tradable equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityQuote {
    pub name: String,
    pub open: f64,
    pub prev_close: f64,
    pub price: f64,
    pub high: f64,
    pub low: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: f64,
    pub turnover: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Canonical quote produced by the text-feed parser.
///
/// The instrument class is decided once at parse time from the upstream
/// naming convention; downstream consumers match on the variant instead of
/// sniffing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedQuote {
    Index(IndexQuote),
    Equity(EquityQuote),
}

impl FeedQuote {
    /// Last traded price (or index level).
    pub fn price(&self) -> f64 {
        match self {
            FeedQuote::Index(q) => q.price,
            FeedQuote::Equity(q) => q.price,
        }
    }

    /// Upstream display name.
    pub fn name(&self) -> &str {
        match self {
            FeedQuote::Index(q) => &q.name,
            FeedQuote::Equity(q) => &q.name,
        }
    }
}

/// Canonical quote produced by the crypto ticker normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high24h: f64,
    pub low24h: f64,
    /// Notional (quote-asset) volume over the trailing 24 hours.
    pub volume24h: f64,
    pub market_cap: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<Vec<f64>>,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_quote_tagged_serialization() {
        let quote = FeedQuote::Index(IndexQuote {
            name: "上证指数".to_string(),
            price: 3120.5,
            change: 12.3,
            change_percent: 0.4,
            open: None,
            prev_close: None,
            high: None,
            low: None,
            volume: 28_900_000.0,
            turnover: 3_456_000_000.0,
        });

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["type"], "index");
        assert_eq!(json["changePercent"], 0.4);
        assert!(json.get("open").is_none());
    }

    #[test]
    fn test_equity_quote_serialization() {
        let quote = FeedQuote::Equity(EquityQuote {
            name: "贵州茅台".to_string(),
            open: 1676.5,
            prev_close: 1676.5,
            price: 1689.0,
            high: 1695.0,
            low: 1673.0,
            change: 12.5,
            change_percent: 0.75,
            volume: 2_890_000.0,
            turnover: 4_876_000_000.0,
            date: Some("2024-01-15".to_string()),
            time: Some("15:00:00".to_string()),
        });

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["type"], "equity");
        assert_eq!(json["prevClose"], 1676.5);
        assert_eq!(json["date"], "2024-01-15");
    }

    #[test]
    fn test_crypto_quote_field_names() {
        let quote = CryptoQuote {
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            price: 43256.78,
            change: 1234.56,
            change_percent: 2.94,
            high24h: 43890.0,
            low24h: 41560.0,
            volume24h: 28_900_000_000.0,
            market_cap: 0.0,
            sparkline: None,
            currency: "USD".to_string(),
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["high24h"], 43890.0);
        assert_eq!(json["volume24h"], 28_900_000_000.0);
        assert_eq!(json["marketCap"], 0.0);
        assert!(json.get("sparkline").is_none());
    }

    #[test]
    fn test_feed_quote_accessors() {
        let quote = FeedQuote::Equity(EquityQuote {
            name: "五粮液".to_string(),
            open: 140.0,
            prev_close: 139.0,
            price: 141.5,
            high: 142.0,
            low: 139.5,
            change: 2.5,
            change_percent: 1.8,
            volume: 1000.0,
            turnover: 141_500.0,
            date: None,
            time: None,
        });

        assert_eq!(quote.price(), 141.5);
        assert_eq!(quote.name(), "五粮液");
    }
}
