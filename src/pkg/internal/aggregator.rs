use std::{collections::HashSet, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    conf::{DEFAULT_EXCLUDED_TITLES, DEFAULT_LOCATIONS, DEFAULT_SEARCH_TERMS, DEFAULT_SOURCES},
    pkg::internal::{
        board::{JobBoard, SearchQuery},
        filter::TitleFilter,
        listing::JobRecord,
    },
    prelude::{Error, Result},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub locations: Vec<String>,
    pub search_terms: Vec<String>,
    pub excluded_title_fragments: Vec<String>,
    pub results_wanted: u32,
    pub max_age_hours: u32,
    pub country: String,
    pub sources: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        AggregatorConfig {
            locations: owned(DEFAULT_LOCATIONS),
            search_terms: owned(DEFAULT_SEARCH_TERMS),
            excluded_title_fragments: owned(DEFAULT_EXCLUDED_TITLES),
            results_wanted: 50,
            max_age_hours: 168,
            country: "USA".into(),
            sources: owned(DEFAULT_SOURCES),
        }
    }
}

impl AggregatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.locations.is_empty() {
            return Err(Error::Configuration("no locations configured".into()));
        }
        if self.search_terms.is_empty() {
            return Err(Error::Configuration("no search terms configured".into()));
        }
        if self.sources.is_empty() {
            return Err(Error::Configuration("no job sources configured".into()));
        }
        if self.results_wanted == 0 {
            return Err(Error::Configuration("results_wanted must be positive".into()));
        }
        Ok(())
    }
}

/// Result of searching one (location, term) combination.
#[derive(Debug)]
pub enum SearchOutcome {
    Found(Vec<JobRecord>),
    Failed(String),
}

/// Run-scoped dedup and exclusion state. Ids are marked seen only once a
/// record is accepted, so an excluded record never shadows a later one.
pub struct RunCollector<'a> {
    filter: &'a TitleFilter,
    seen: HashSet<String>,
    jobs: Vec<JobRecord>,
}

impl<'a> RunCollector<'a> {
    pub fn new(filter: &'a TitleFilter) -> Self {
        RunCollector {
            filter,
            seen: HashSet::new(),
            jobs: vec![],
        }
    }

    /// Returns whether the record was kept.
    pub fn offer(&mut self, record: JobRecord) -> bool {
        if self.seen.contains(&record.external_id) {
            return false;
        }
        if self.filter.is_excluded(record.title.as_deref()) {
            return false;
        }
        self.seen.insert(record.external_id.clone());
        self.jobs.push(record);
        true
    }

    pub fn finish(self) -> Vec<JobRecord> {
        self.jobs
    }
}

pub fn dedup_and_filter<I>(records: I, filter: &TitleFilter) -> Vec<JobRecord>
where
    I: IntoIterator<Item = JobRecord>,
{
    let mut collector = RunCollector::new(filter);
    for record in records {
        collector.offer(record);
    }
    collector.finish()
}

pub struct Aggregator {
    config: AggregatorConfig,
    filter: TitleFilter,
    board: Arc<dyn JobBoard>,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig, board: Arc<dyn JobBoard>) -> Self {
        let filter = TitleFilter::new(&config.excluded_title_fragments);
        Aggregator {
            config,
            filter,
            board,
        }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub async fn search(&self, location: &str, search_term: &str) -> SearchOutcome {
        let query = SearchQuery {
            sources: &self.config.sources,
            search_term,
            location,
            results_wanted: self.config.results_wanted,
            max_age_hours: self.config.max_age_hours,
            country: &self.config.country,
        };
        tracing::info!("scraping {} jobs in {}", search_term, location);
        match self.board.search(&query).await {
            Ok(rows) => SearchOutcome::Found(
                rows.into_iter()
                    .map(|row| JobRecord::from_raw(row, location))
                    .collect(),
            ),
            Err(err) => SearchOutcome::Failed(err.to_string()),
        }
    }

    /// Sweeps every location and term in order. Failed combinations are logged
    /// and contribute nothing; only invalid configuration fails the run.
    pub async fn run(&self) -> Result<Vec<JobRecord>> {
        self.config.validate()?;
        let mut collector = RunCollector::new(&self.filter);
        for location in &self.config.locations {
            for search_term in &self.config.search_terms {
                match self.search(location, search_term).await {
                    SearchOutcome::Found(records) if records.is_empty() => {
                        tracing::info!("no results for {} in {}", search_term, location);
                    }
                    SearchOutcome::Found(records) => {
                        let found = records.len();
                        let kept = records
                            .into_iter()
                            .map(|r| collector.offer(r))
                            .filter(|kept| *kept)
                            .count();
                        tracing::info!(
                            "found {} jobs for {} in {} ({} new)",
                            found,
                            search_term,
                            location,
                            kept
                        );
                    }
                    SearchOutcome::Failed(reason) => {
                        tracing::warn!(
                            "error scraping {} in {}: {}",
                            search_term,
                            location,
                            reason
                        );
                    }
                }
            }
        }
        let jobs = collector.finish();
        tracing::info!("total unique jobs found: {}", jobs.len());
        Ok(jobs)
    }
}
