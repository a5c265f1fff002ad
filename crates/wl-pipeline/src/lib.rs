//! Washline pipeline: dedup ingestor → bounded work queue → transform
//! workers → bounded result queue → single output writer.
//!
//! Channel closure is the completion barrier: the ingestor drops the work
//! sender at end of stream, workers drop their result senders on exit, and
//! the writer drains the result queue to closure before the run returns.

pub mod ingest;
pub mod pipeline;

pub use ingest::{DedupIngestor, IngestStats};
pub use pipeline::{Pipeline, RunSummary};
