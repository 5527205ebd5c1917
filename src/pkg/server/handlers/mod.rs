pub mod probes;
pub mod scrape;
