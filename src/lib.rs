use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod providers;
pub mod repositories;
pub mod routes;
pub mod services;

use services::metrics::MetricsService;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<dyn MetricsService>,
    pub request_timeout: Duration,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::metrics::get_metrics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
