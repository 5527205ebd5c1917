pub mod client;
pub mod spec;

pub use client::JobSpyClient;
