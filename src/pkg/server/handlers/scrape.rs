use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    pkg::{internal::listing::JobRecord, server::state::AppState},
    prelude::Result,
};

#[derive(Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub jobs: Vec<JobRecord>,
    pub count: usize,
}

pub async fn run(State(state): State<AppState>) -> Result<Json<ScrapeResponse>> {
    tracing::info!("starting scrape for all locations");
    let jobs = state.aggregator.run().await?;
    tracing::info!("scrape complete, found {} jobs", jobs.len());
    Ok(Json(ScrapeResponse {
        success: true,
        count: jobs.len(),
        jobs,
    }))
}
