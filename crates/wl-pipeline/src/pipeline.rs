//! The concurrent run: ingest task, worker pool, inline writer.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use wl_clean::{clean, CompiledPattern};
use wl_core::{Result, WashlineConfig};

use crate::ingest::{DedupIngestor, IngestStats};

/// Counters for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: u64,
    pub dropped_noise: u64,
    pub dropped_malformed: u64,
    pub dropped_duplicate: u64,
    /// Records cleaned and written. Equals lines_read minus all drops.
    pub cleaned: u64,
}

impl RunSummary {
    fn from_parts(ingest: IngestStats, written: u64) -> Self {
        Self {
            lines_read: ingest.lines_read,
            dropped_noise: ingest.dropped_noise,
            dropped_malformed: ingest.dropped_malformed,
            dropped_duplicate: ingest.dropped_duplicate,
            cleaned: written,
        }
    }
}

/// One-shot stream transform: every surviving record is cleaned by one of
/// N workers and written exactly once. Output order is not the input
/// order; workers race to the result queue.
pub struct Pipeline {
    pattern: Arc<CompiledPattern>,
    workers: usize,
    queue_depth: usize,
}

impl Pipeline {
    pub fn new(pattern: CompiledPattern, config: &WashlineConfig) -> Self {
        Self {
            pattern: Arc::new(pattern),
            workers: config.effective_workers().max(1),
            queue_depth: config.queue_depth.max(1),
        }
    }

    /// Run the pipeline to stream exhaustion and return the counters.
    ///
    /// Returns only after the ingest task, every worker, and the writer
    /// have all finished, so no submitted record is left in flight.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<RunSummary>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin,
    {
        let (work_tx, work_rx) = mpsc::channel::<String>(self.queue_depth);
        let (result_tx, mut result_rx) = mpsc::channel::<String>(self.queue_depth);
        let work_rx = Arc::new(Mutex::new(work_rx));

        tracing::debug!(workers = self.workers, depth = self.queue_depth, "starting pool");

        let mut workers: Vec<JoinHandle<()>> = Vec::with_capacity(self.workers);
        for _ in 0..self.workers {
            let work_rx = Arc::clone(&work_rx);
            let result_tx = result_tx.clone();
            let pattern = Arc::clone(&self.pattern);
            workers.push(tokio::spawn(async move {
                loop {
                    // Hold the lock across recv only, never across a transform.
                    let payload = work_rx.lock().await.recv().await;
                    let Some(payload) = payload else { break };
                    let cleaned = clean(&pattern, &payload);
                    if result_tx.send(cleaned).await.is_err() {
                        break;
                    }
                }
            }));
        }
        // Workers hold the only remaining result senders; the writer loop
        // below ends when the last worker exits.
        drop(result_tx);

        let ingest: JoinHandle<IngestStats> = tokio::spawn(async move {
            let mut ingestor = DedupIngestor::new(input);
            while let Some(payload) = ingestor.next_payload().await {
                if work_tx.send(payload).await.is_err() {
                    break;
                }
            }
            ingestor.stats()
        });

        let mut written = 0u64;
        while let Some(line) = result_rx.recv().await {
            output.write_all(line.as_bytes()).await?;
            output.write_all(b"\n").await?;
            written += 1;
        }
        output.flush().await?;

        let stats = ingest.await.map_err(anyhow::Error::from)?;
        for worker in workers {
            worker.await.map_err(anyhow::Error::from)?;
        }

        let summary = RunSummary::from_parts(stats, written);
        tracing::debug!(?summary, "run complete");
        Ok(summary)
    }
}
