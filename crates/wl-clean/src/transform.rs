//! The per-post transform: a pure function over one payload line.

use crate::pattern::CompiledPattern;

/// Clean one payload.
///
/// Pass order is fixed: lowercase, then URL truncation, then punctuation
/// removal, then emoji isolation. No whitespace collapsing afterwards;
/// adjacent emoji may leave repeated spaces.
pub fn clean(pattern: &CompiledPattern, text: &str) -> String {
    let text = text.to_lowercase();
    let text = pattern.truncate_urls(&text);
    let text = pattern.strip_punctuation(&text);
    pattern.isolate_emoji(&text)
}
