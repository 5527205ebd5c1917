use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;

use crate::{pkg::internal::aggregator::AggregatorConfig, prelude::Result};

pub const DEFAULT_LOCATIONS: &[&str] = &[
    "Madison, WI",
    "Boulder, CO",
    "Fort Collins, CO",
    "Raleigh, NC",
    "Durham, NC",
];

pub const DEFAULT_SEARCH_TERMS: &[&str] = &["psychiatrist", "psychiatry"];

pub const DEFAULT_EXCLUDED_TITLES: &[&str] = &[
    "nurse practitioner",
    "np ",
    " np",
    "aprn",
    "registered nurse",
    " rn ",
    " rn,",
    "psychologist",
    "social worker",
    "nurse",
    "nursing",
    "counselor",
    "counseler",
    "neurologist",
    "epileptologist",
];

pub const DEFAULT_SOURCES: &[&str] = &["indeed", "linkedin", "glassdoor"];

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub listen_port: u16,
    //upstream
    pub scraper_url: String,
    pub scraper_timeout_secs: u64,
    //search
    pub locations: Vec<String>,
    pub search_terms: Vec<String>,
    pub excluded_titles: Vec<String>,
    pub sources: Vec<String>,
    pub results_wanted: u32,
    pub max_age_hours: u32,
    pub country: String,
}

impl Settings {
    pub fn new() -> Result<Self> {
        Self::from_env(Environment::default())
    }

    /// Loads settings over the reference defaults. List values are split on
    /// `;` since locations carry commas, e.g. `LOCATIONS="Madison, WI;Austin, TX"`.
    pub fn from_env(env: Environment) -> Result<Self> {
        let env = env
            .try_parsing(true)
            .list_separator(";")
            .with_list_parse_key("locations")
            .with_list_parse_key("search_terms")
            .with_list_parse_key("excluded_titles")
            .with_list_parse_key("sources");
        let conf = Config::builder()
            .set_default("listen_port", 5001i64)?
            .set_default("scraper_url", "http://localhost:8000")?
            .set_default("scraper_timeout_secs", 300i64)?
            .set_default("locations", DEFAULT_LOCATIONS.to_vec())?
            .set_default("search_terms", DEFAULT_SEARCH_TERMS.to_vec())?
            .set_default("excluded_titles", DEFAULT_EXCLUDED_TITLES.to_vec())?
            .set_default("sources", DEFAULT_SOURCES.to_vec())?
            .set_default("results_wanted", 50i64)?
            .set_default("max_age_hours", 168i64)?
            .set_default("country", "USA")?
            .add_source(env)
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        // a trailing `;` or an empty variable leaves blank entries behind
        for list in [
            &mut s.locations,
            &mut s.search_terms,
            &mut s.excluded_titles,
            &mut s.sources,
        ] {
            list.retain(|v| !v.trim().is_empty());
        }
        Ok(s)
    }

    pub fn scraper_timeout(&self) -> Duration {
        Duration::from_secs(self.scraper_timeout_secs)
    }

    pub fn aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig {
            locations: self.locations.clone(),
            search_terms: self.search_terms.clone(),
            excluded_title_fragments: self.excluded_titles.clone(),
            results_wanted: self.results_wanted,
            max_age_hours: self.max_age_hours,
            country: self.country.clone(),
            sources: self.sources.clone(),
        }
    }
}
