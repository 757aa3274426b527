use axum::routing::{get, patch};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Operational routes
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::metrics));

    let api = Router::new()
        // Portfolio
        .route("/api/portfolio/:user_id", get(handlers::portfolio::get_portfolio))
        // Stocks
        .route("/api/stocks", get(handlers::stocks::list_stocks))
        .route("/api/stocks/:symbol", get(handlers::stocks::get_stock))
        // Transactions
        .route("/api/transactions/:user_id", get(handlers::transactions::list_transactions))
        // Dashboard
        .route("/api/dashboard/:user_id", get(handlers::dashboard::get_dashboard))
        // Watchlist
        .route(
            "/api/watchlist/:user_id",
            get(handlers::watchlist::list_watchlist).post(handlers::watchlist::add_to_watchlist),
        )
        .route(
            "/api/watchlist/:user_id/:item_id",
            patch(handlers::watchlist::update_watchlist_item)
                .delete(handlers::watchlist::remove_from_watchlist),
        );

    // CORS: the dashboard frontend is served from a different origin in dev
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
