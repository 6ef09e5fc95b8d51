pub mod crypto;
pub mod health;
pub mod signals;
pub mod stock;
pub mod watchlist;

use crate::AppState;
use axum::Router;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/stock", stock::router())
        .nest("/api/crypto", crypto::router())
        .nest("/api/signals", signals::router())
        .nest("/api/watchlist", watchlist::router())
}
