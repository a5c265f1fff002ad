//! Dedup ingestor: lazy sequence of distinct payloads from a line stream.

use std::collections::HashSet;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Fixed bot-template signatures. Lines containing either are dropped
/// before any other processing, case-sensitively.
pub const NOISE_SIGNATURES: [&str; 2] = [
    "howdy. i'm the sheriff of",
    "Beep boop, I am a robot made out",
];

/// Records expected per line: `id f2 f3 payload...` (payload keeps its
/// embedded spaces because the split is bounded).
const RECORD_FIELDS: usize = 4;

/// Per-run ingest counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines_read: u64,
    pub dropped_noise: u64,
    pub dropped_malformed: u64,
    pub dropped_duplicate: u64,
}

impl IngestStats {
    /// Lines that survived every filter and were emitted downstream.
    pub fn emitted(&self) -> u64 {
        self.lines_read - self.dropped_noise - self.dropped_malformed - self.dropped_duplicate
    }
}

/// Reads records one line at a time, filters noise and malformed lines,
/// and drops records whose identifier was already seen this run.
///
/// The seen-set is owned by the instance, so independent runs (and tests)
/// never share dedup state. A read error ends the sequence like EOF.
pub struct DedupIngestor<R> {
    reader: R,
    seen: HashSet<String>,
    stats: IngestStats,
}

impl<R: AsyncBufRead + Unpin> DedupIngestor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            seen: HashSet::new(),
            stats: IngestStats::default(),
        }
    }

    /// Next distinct payload, in input line order. `None` once the stream
    /// is exhausted (or errored).
    pub async fn next_payload(&mut self) -> Option<String> {
        loop {
            let mut raw = String::new();
            match self.reader.read_line(&mut raw).await {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            // An unterminated tail ends the stream without being a record.
            let line = raw.strip_suffix('\n')?;
            self.stats.lines_read += 1;

            if NOISE_SIGNATURES.iter().any(|sig| line.contains(sig)) {
                self.stats.dropped_noise += 1;
                continue;
            }

            let parts: Vec<&str> = line.splitn(RECORD_FIELDS, ' ').collect();
            if parts.len() != RECORD_FIELDS {
                self.stats.dropped_malformed += 1;
                continue;
            }

            let id = parts[0];
            if self.seen.contains(id) {
                self.stats.dropped_duplicate += 1;
                continue;
            }
            self.seen.insert(id.to_string());
            return Some(parts[RECORD_FIELDS - 1].to_string());
        }
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }
}
