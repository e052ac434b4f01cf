//! Harvest pipeline.
//!
//! Walks the configured repositories, fetches their labeled issues, and
//! collects the results.

pub mod aggregator;

pub use aggregator::*;
