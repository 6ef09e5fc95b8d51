//! File-backed watchlist store.
//!
//! The list is loaded from disk once at startup and kept in memory; every
//! mutation rewrites the backing file so membership survives restarts.

use crate::types::{Market, WatchlistEntry};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// In-memory watchlist with JSON file persistence.
pub struct WatchlistStore {
    path: PathBuf,
    entries: RwLock<Vec<WatchlistEntry>>,
}

impl WatchlistStore {
    /// Open the store, loading any existing file at `path`.
    ///
    /// A missing file is an empty list; an unreadable or corrupt file is
    /// treated the same way so a bad write can never wedge startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(list) => list,
                Err(e) => {
                    warn!("Watchlist file {:?} is corrupt, starting empty: {}", path, e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Current entries, newest last.
    pub async fn list(&self) -> Vec<WatchlistEntry> {
        self.entries.read().await.clone()
    }

    /// Add the symbol if absent, remove it if present, and return the
    /// updated list. Membership is keyed on (symbol, market).
    pub async fn toggle(&self, symbol: &str, market: Market) -> Vec<WatchlistEntry> {
        let mut entries = self.entries.write().await;

        let existing = entries
            .iter()
            .position(|e| e.symbol == symbol && e.market == market);
        match existing {
            Some(index) => {
                entries.remove(index);
                debug!("Removed {} ({}) from watchlist", symbol, market);
            }
            None => {
                entries.push(WatchlistEntry {
                    symbol: symbol.to_string(),
                    market,
                    added_at: Utc::now().timestamp_millis(),
                });
                debug!("Added {} ({}) to watchlist", symbol, market);
            }
        }

        self.persist(&entries);
        entries.clone()
    }

    /// Write the current list to disk. Persistence failures are logged and
    /// otherwise ignored; the in-memory list stays authoritative.
    fn persist(&self, entries: &[WatchlistEntry]) {
        match serde_json::to_string_pretty(entries) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    warn!("Failed to write watchlist {:?}: {}", self.path, e);
                }
            }
            Err(e) => {
                warn!("Failed to serialize watchlist: {}", e);
            }
        }
    }
}
