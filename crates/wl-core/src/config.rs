use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Depth of the work and result queues between the pipeline stages.
pub const DEFAULT_QUEUE_DEPTH: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WashlineConfig {
    /// Path of the emoji-name dictionary (JSON object, glyph → names).
    pub dictionary_path: PathBuf,
    /// Number of transform workers. 0 means one per logical CPU.
    pub workers: usize,
    /// Bounded queue depth between ingest, workers, and the writer.
    pub queue_depth: usize,
}

impl Default for WashlineConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("data/emoji_names.json"),
            workers: 0,
            queue_depth: DEFAULT_QUEUE_DEPTH,
        }
    }
}

impl WashlineConfig {
    /// Effective worker count, resolving 0 to the logical CPU count.
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}
