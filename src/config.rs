use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Sina quote-feed base URL.
    pub sina_feed_url: String,
    /// Binance REST API base URL.
    pub binance_api_url: String,
    /// Watchlist persistence file path.
    pub watchlist_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            sina_feed_url: env::var("SINA_FEED_URL")
                .unwrap_or_else(|_| "https://hq.sinajs.cn".to_string()),
            binance_api_url: env::var("BINANCE_API_URL")
                .unwrap_or_else(|_| "https://api.binance.com/api/v3".to_string()),
            watchlist_path: env::var("WATCHLIST_PATH")
                .unwrap_or_else(|_| ".spyglass_watchlist.json".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
