pub mod market;
pub mod quote;
pub mod signal;
pub mod watchlist;

pub use market::*;
pub use quote::*;
pub use signal::*;
pub use watchlist::*;
