pub mod adaptors;
pub mod aggregator;
pub mod board;
pub mod filter;
pub mod listing;
