//! Sina Finance quote-feed client.
//!
//! The feed speaks GBK-encoded JavaScript assignments and requires a
//! finance.sina.com.cn Referer; responses are decoded and handed to the
//! positional parser for the requested market.

use crate::parse::sina::parse_feed;
use crate::types::{FeedQuote, Market};
use anyhow::bail;
use encoding_rs::GBK;
use reqwest::Client;
use std::collections::HashMap;
use tracing::{debug, warn};

const REFERER: &str = "https://finance.sina.com.cn";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// A-share index mapping (display symbol -> feed code).
pub const A_SHARE_INDEX_CODES: &[(&str, &str)] = &[
    ("000001.SH", "s_sh000001"),
    ("399001.SZ", "s_sz399001"),
    ("399006.SZ", "s_sz399006"),
];

/// A-share equity mapping (exchange code -> feed code).
pub const A_SHARE_STOCK_CODES: &[(&str, &str)] = &[
    ("600519", "sh600519"),
    ("000858", "sz000858"),
    ("601318", "sh601318"),
    ("300750", "sz300750"),
    ("600036", "sh600036"),
    ("601899", "sh601899"),
    ("600030", "sh600030"),
    ("000001", "sz000001"),
    ("600900", "sh600900"),
    ("601012", "sh601012"),
];

/// Hong Kong index mapping.
pub const HK_INDEX_CODES: &[(&str, &str)] = &[("HSI", "rt_hkHSI"), ("HSTECH", "rt_hkHSTECH")];

/// Hong Kong equity mapping.
pub const HK_STOCK_CODES: &[(&str, &str)] = &[
    ("00700", "rt_hk00700"),
    ("09988", "rt_hk09988"),
    ("03690", "rt_hk03690"),
    ("01810", "rt_hk01810"),
    ("09618", "rt_hk09618"),
    ("00005", "rt_hk00005"),
    ("02318", "rt_hk02318"),
    ("01024", "rt_hk01024"),
    ("09999", "rt_hk09999"),
    ("02020", "rt_hk02020"),
];

/// Resolve a display symbol to its feed code. Symbols already in feed form
/// (or not in the tables) pass through unchanged.
pub fn feed_code(symbol: &str, market: Market) -> &str {
    let tables: [&[(&str, &str)]; 2] = match market {
        Market::HongKong => [HK_INDEX_CODES, HK_STOCK_CODES],
        _ => [A_SHARE_INDEX_CODES, A_SHARE_STOCK_CODES],
    };
    for table in tables {
        if let Some((_, code)) = table.iter().find(|(display, _)| *display == symbol) {
            return code;
        }
    }
    symbol
}

/// Sina quote-feed REST client.
#[derive(Clone)]
pub struct SinaFeedClient {
    client: Client,
    base_url: String,
}

impl SinaFeedClient {
    /// Create a new feed client.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch and parse one batch of quotes.
    ///
    /// `symbols` is a comma-separated list; display symbols are resolved to
    /// feed codes first. A response with no parseable records is an error,
    /// while individual empty records come back as explicit `None` entries.
    pub async fn fetch_quotes(
        &self,
        symbols: &str,
        market: Market,
    ) -> anyhow::Result<HashMap<String, Option<FeedQuote>>> {
        let codes: Vec<&str> = symbols
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| feed_code(s, market))
            .collect();
        if codes.is_empty() {
            bail!("No symbols requested");
        }

        let url = format!("{}/list={}", self.base_url, codes.join(","));
        let response = self
            .client
            .get(&url)
            .header("Referer", REFERER)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Sina feed returned {}", status);
            bail!("Sina feed error: {}", status);
        }

        let bytes = response.bytes().await?;
        let (text, _, _) = GBK.decode(&bytes);

        let quotes = parse_feed(&text, market);
        if quotes.is_empty() {
            bail!("No quotes in feed response");
        }

        debug!("Fetched {} quote records from Sina", quotes.len());
        Ok(quotes)
    }
}
