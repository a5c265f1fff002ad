//! Washline binary: one-shot stdin → stdout normalizer run.

use anyhow::Result;
use tokio::io::BufReader;
use wl_clean::CompiledPattern;
use wl_core::{EmojiDictionary, WashlineConfig};
use wl_pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = WashlineConfig::default();

    let dictionary = match EmojiDictionary::load(&config.dictionary_path) {
        Ok(dict) => {
            tracing::debug!(glyphs = dict.len(), "loaded emoji dictionary");
            dict
        }
        Err(err) => {
            // Degraded run: emoji isolation becomes a no-op.
            tracing::warn!(%err, "running without emoji isolation");
            EmojiDictionary::empty()
        }
    };

    // A pattern compile failure is fatal before any input is read.
    let pattern = CompiledPattern::compile(&dictionary)?;

    let pipeline = Pipeline::new(pattern, &config);
    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    let summary = pipeline.run(input, &mut output).await?;

    tracing::info!(
        lines_read = summary.lines_read,
        dropped_noise = summary.dropped_noise,
        dropped_malformed = summary.dropped_malformed,
        dropped_duplicate = summary.dropped_duplicate,
        cleaned = summary.cleaned,
        "washline run complete"
    );
    Ok(())
}
