//! Emoji-name dictionary: glyph sequence → human-readable names.
//!
//! Loaded once at startup; only the key set matters to the cleaning
//! pattern, but the full mapping is kept for callers that want names.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, WashError};

#[derive(Debug, Clone, Default)]
pub struct EmojiDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl EmojiDictionary {
    /// Load the dictionary from a JSON object file.
    ///
    /// Failure is recoverable: callers fall back to [`EmojiDictionary::empty`]
    /// and run with emoji isolation disabled.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| WashError::DictionaryUnavailable {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let entries: HashMap<String, Vec<String>> =
            serde_json::from_str(&raw).map_err(|e| WashError::DictionaryUnavailable {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        Ok(Self { entries })
    }

    /// An empty dictionary, for degraded runs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dictionary from glyph keys alone (names left empty).
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: keys.into_iter().map(|k| (k.into(), Vec::new())).collect(),
        }
    }

    /// Glyph sequences in arbitrary map order.
    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn names(&self, glyph: &str) -> Option<&[String]> {
        self.entries.get(glyph).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
