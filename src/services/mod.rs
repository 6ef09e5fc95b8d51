//! Long-lived application services.

pub mod watchlist;

pub use watchlist::WatchlistStore;
