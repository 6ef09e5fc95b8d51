use crate::types::Market;
use serde::{Deserialize, Serialize};

/// A single watched instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub symbol: String,
    pub market: Market,
    /// Millisecond timestamp the entry was added.
    pub added_at: i64,
}
