use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::handlers::probes::health;
use super::state::AppState;
use crate::{conf::Settings, prelude::Result};

pub fn build_routes(conf: &Settings) -> Result<Router> {
    let state = AppState::new(conf)?;
    Ok(routes(state))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/scrape", post(handlers::scrape::run))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
