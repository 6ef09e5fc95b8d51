//! External market-data sources.

pub mod binance;
pub mod sina;

pub use binance::BinanceClient;
pub use sina::SinaFeedClient;
