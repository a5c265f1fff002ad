//! Pattern compiler: turns the emoji dictionary into a single
//! longest-match-first alternation, plus the URL and punctuation patterns.

use std::cmp::Ordering;

use regex::Regex;
use wl_core::{EmojiDictionary, Result};

/// Replacement template wrapping a matched emoji in surrounding spaces.
const EMOJI_REPLACEMENT: &str = " $1 ";

/// Alternation order: descending code-point count, ties broken by
/// ascending lexicographic order.
///
/// The regex alternation is first-match-wins, so when one glyph sequence
/// is a prefix of another the longer one must come first or the engine
/// matches the prefix and leaves trailing code points unconsumed.
pub fn alternation_order(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

/// Dictionary keys escaped and sorted for the alternation group.
pub fn alternation_set(dict: &EmojiDictionary) -> Vec<String> {
    let mut glyphs: Vec<&str> = dict.glyphs().collect();
    glyphs.sort_unstable_by(|a, b| alternation_order(a, b));
    glyphs.into_iter().map(|g| regex::escape(g)).collect()
}

/// The compiled cleaning patterns, immutable and shared read-only across
/// all transform workers.
#[derive(Debug)]
pub struct CompiledPattern {
    /// `None` when the dictionary is empty: emoji isolation is a no-op.
    emoji: Option<Regex>,
    url: Regex,
    punct: Regex,
}

impl CompiledPattern {
    /// Compile the patterns from a dictionary.
    ///
    /// An empty dictionary degrades to a pattern set without emoji
    /// isolation; a regex compile error is fatal.
    pub fn compile(dict: &EmojiDictionary) -> Result<Self> {
        let emoji = if dict.is_empty() {
            tracing::debug!("empty dictionary, emoji isolation disabled");
            None
        } else {
            let alts = alternation_set(dict);
            // Optional trailing variation selector is consumed with the glyph.
            let source = format!("((?:{})\u{FE0F}?)", alts.join("|"));
            Some(Regex::new(&source)?)
        };
        Ok(Self {
            emoji,
            url: Regex::new(r"(https?://[^/\s]*)\S*")?,
            // Group 1 shields already-truncated URLs from dot removal.
            // The authority must end on a non-noise character so trailing
            // punctuation glued to a bare host is still deleted.
            punct: Regex::new(r#"(https?://[^/\s]*[^/\s()"'!,.])|[()"'!,.]"#)?,
        })
    }

    pub fn has_emoji(&self) -> bool {
        self.emoji.is_some()
    }

    /// Replace every URL with its scheme+host, dropping path/query/fragment.
    pub fn truncate_urls(&self, text: &str) -> String {
        self.url.replace_all(text, "$1").into_owned()
    }

    /// Delete every punctuation-noise character outside URL spans.
    pub fn strip_punctuation(&self, text: &str) -> String {
        self.punct
            .replace_all(text, |caps: &regex::Captures| {
                caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string()
            })
            .into_owned()
    }

    /// Wrap every emoji match in a single leading and trailing space.
    pub fn isolate_emoji(&self, text: &str) -> String {
        match &self.emoji {
            Some(re) => re.replace_all(text, EMOJI_REPLACEMENT).into_owned(),
            None => text.to_string(),
        }
    }
}
