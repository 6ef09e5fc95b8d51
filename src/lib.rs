//! Spyglass - market data proxy and trading-signal server.
//!
//! Aggregates A-share and Hong Kong quotes from the Sina feed and crypto
//! tickers from Binance, runs a technical-analysis pipeline over price
//! windows, and serves the results over a small HTTP API.

pub mod api;
pub mod config;
pub mod error;
pub mod parse;
pub mod services;
pub mod signals;
pub mod sources;
pub mod types;

use config::Config;
use services::WatchlistStore;
use sources::{BinanceClient, SinaFeedClient};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sina_client: Arc<SinaFeedClient>,
    pub binance_client: Arc<BinanceClient>,
    pub watchlist: Arc<WatchlistStore>,
}

impl AppState {
    /// Wire up clients and stores from configuration.
    pub fn from_config(config: Config) -> Self {
        let sina_client = Arc::new(SinaFeedClient::new(config.sina_feed_url.clone()));
        let binance_client = Arc::new(BinanceClient::new(config.binance_api_url.clone()));
        let watchlist = Arc::new(WatchlistStore::open(config.watchlist_path.clone()));

        Self {
            config: Arc::new(config),
            sina_client,
            binance_client,
            watchlist,
        }
    }
}

// Re-export commonly used types
pub use types::*;
