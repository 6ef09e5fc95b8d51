//! Binance REST client for 24-hour crypto tickers.

use crate::parse::ticker::{normalize, sort_by_volume, BinanceTicker};
use crate::types::CryptoQuote;
use anyhow::bail;
use futures_util::future::join_all;
use reqwest::Client;
use tracing::{debug, warn};

/// Supported trading pairs (display symbol, Binance pair, full name).
pub const CRYPTO_PAIRS: &[(&str, &str, &str)] = &[
    ("BTC", "BTCUSDT", "Bitcoin"),
    ("ETH", "ETHUSDT", "Ethereum"),
    ("BNB", "BNBUSDT", "BNB"),
    ("SOL", "SOLUSDT", "Solana"),
    ("XRP", "XRPUSDT", "XRP"),
    ("ADA", "ADAUSDT", "Cardano"),
    ("DOGE", "DOGEUSDT", "Dogecoin"),
    ("AVAX", "AVAXUSDT", "Avalanche"),
    ("DOT", "DOTUSDT", "Polkadot"),
    ("LINK", "LINKUSDT", "Chainlink"),
];

/// Look up a supported pair by display symbol (case-insensitive).
pub fn lookup_pair(symbol: &str) -> Option<(&'static str, &'static str, &'static str)> {
    let upper = symbol.to_uppercase();
    CRYPTO_PAIRS
        .iter()
        .find(|(display, _, _)| *display == upper)
        .copied()
}

/// Binance REST client.
#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl BinanceClient {
    /// Create a new Binance client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the 24hr ticker for one supported symbol.
    pub async fn fetch_ticker(&self, pair: &str) -> anyhow::Result<BinanceTicker> {
        let url = format!("{}/ticker/24hr?symbol={}", self.base_url, pair);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            bail!("Binance API error for {}: {}", pair, response.status());
        }

        Ok(response.json().await?)
    }

    /// Fetch normalized quotes for the requested symbols, or for every
    /// supported pair when `symbols` is absent.
    ///
    /// Unknown symbols are dropped up front; a request that names none of
    /// the supported pairs is an error. Per-symbol fetch failures are logged
    /// and skipped, but a batch where every fetch failed is an error.
    pub async fn fetch_quotes(&self, symbols: Option<&str>) -> anyhow::Result<Vec<CryptoQuote>> {
        let requested: Vec<(&str, &str, &str)> = match symbols {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter_map(lookup_pair)
                .collect(),
            None => CRYPTO_PAIRS.to_vec(),
        };
        if requested.is_empty() {
            bail!("No valid symbols provided");
        }

        let fetches = requested.iter().map(|(display, pair, name)| async move {
            match self.fetch_ticker(pair).await {
                Ok(ticker) => Some(normalize(&ticker, display, name)),
                Err(e) => {
                    warn!("Failed to fetch {}: {}", pair, e);
                    None
                }
            }
        });

        let quotes: Vec<CryptoQuote> = join_all(fetches).await.into_iter().flatten().collect();
        if quotes.is_empty() {
            bail!("No data received from Binance API");
        }

        debug!("Fetched {} crypto quotes from Binance", quotes.len());
        Ok(sort_by_volume(quotes))
    }
}
