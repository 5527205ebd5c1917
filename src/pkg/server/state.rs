use std::sync::Arc;

use crate::{
    conf::Settings,
    pkg::internal::{
        adaptors::jobspy::JobSpyClient,
        aggregator::{Aggregator, AggregatorConfig},
        board::JobBoard,
    },
    prelude::Result,
};

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<AppState> {
        let client = JobSpyClient::new(&settings.scraper_url, settings.scraper_timeout())?;
        tracing::debug!("using job search api at {}", &settings.scraper_url);
        Ok(AppState::with_board(
            settings.aggregator_config(),
            Arc::new(client),
        ))
    }

    pub fn with_board(config: AggregatorConfig, board: Arc<dyn JobBoard>) -> AppState {
        AppState {
            aggregator: Arc::new(Aggregator::new(config, board)),
        }
    }
}
