use serde::{Deserialize, Serialize};
use std::fmt;

/// Market segment an instrument trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    /// Mainland A-share market (Shanghai/Shenzhen).
    #[serde(rename = "A")]
    AShare,
    /// Hong Kong market.
    #[serde(rename = "HK")]
    HongKong,
    /// Cryptocurrency spot market.
    #[serde(rename = "CRYPTO")]
    Crypto,
}

impl Market {
    /// Parse the stock proxy's market query parameter (`A` or `HK`).
    /// Anything else maps to the A-share default; the crypto market is
    /// never selected this way, it has its own endpoint.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("HK") | Some("hk") => Market::HongKong,
            _ => Market::AShare,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::AShare => write!(f, "A"),
            Market::HongKong => write!(f, "HK"),
            Market::Crypto => write!(f, "CRYPTO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_from_query_defaults_to_a_share() {
        assert_eq!(Market::from_query(None), Market::AShare);
        assert_eq!(Market::from_query(Some("A")), Market::AShare);
        assert_eq!(Market::from_query(Some("bogus")), Market::AShare);
    }

    #[test]
    fn test_market_from_query_never_selects_crypto() {
        // The stock proxy only speaks A/HK; a stray CRYPTO value falls back
        // to the A-share default instead of selecting the crypto market.
        assert_eq!(Market::from_query(Some("CRYPTO")), Market::AShare);
        assert_eq!(Market::from_query(Some("crypto")), Market::AShare);
    }

    #[test]
    fn test_market_from_query_hk() {
        assert_eq!(Market::from_query(Some("HK")), Market::HongKong);
        assert_eq!(Market::from_query(Some("hk")), Market::HongKong);
    }

    #[test]
    fn test_market_serde_round_trip() {
        let json = serde_json::to_string(&Market::HongKong).unwrap();
        assert_eq!(json, "\"HK\"");
        let back: Market = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Market::HongKong);
    }
}
