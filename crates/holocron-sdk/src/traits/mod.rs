//! Core traits for holocron
//!
//! - [`ResourceFetcher`]: single-entity reads used by the graph aggregator

mod fetcher;

pub use fetcher::ResourceFetcher;
