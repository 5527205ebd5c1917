use crate::{pkg::internal::adaptors::jobspy::spec::RawJobRow, prelude::Result};

/// Parameters for one upstream search, i.e. one (location, term) combination.
#[derive(Debug, Clone, Copy)]
pub struct SearchQuery<'a> {
    pub sources: &'a [String],
    pub search_term: &'a str,
    pub location: &'a str,
    pub results_wanted: u32,
    pub max_age_hours: u32,
    pub country: &'a str,
}

/// A job search backend. Implementations fail the whole call or return every
/// row they found; partial results are not a thing at this seam.
#[async_trait::async_trait]
pub trait JobBoard: Send + Sync {
    async fn search(&self, query: &SearchQuery<'_>) -> Result<Vec<RawJobRow>>;
}
