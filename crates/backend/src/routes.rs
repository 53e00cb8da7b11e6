use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::shared::state::AppState;
use crate::system;

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D100 Sales dashboard
        .route(
            "/api/d100/options",
            get(handlers::d100_sales_dashboard::get_options),
        )
        .route(
            "/api/d100/dashboard",
            post(handlers::d100_sales_dashboard::render_dashboard),
        )
        .with_state(state)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}
