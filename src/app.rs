use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{health, trading_data};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/trading-data", trading_data::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
