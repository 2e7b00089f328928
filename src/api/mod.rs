use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::fetcher::PageFetcher;

pub mod error;
pub mod handlers;
pub mod models;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<dyn PageFetcher>,
}

impl AppState {
    pub fn new(config: Config, fetcher: Arc<dyn PageFetcher>) -> AppState {
        AppState {
            config: Arc::new(config),
            fetcher,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/search", get(handlers::search_handler))
        .route("/article", get(handlers::article_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
