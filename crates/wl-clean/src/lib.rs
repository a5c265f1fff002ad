//! Washline cleaning engine — compiles the emoji alternation pattern and
//! applies the per-post text transform.
//!
//! Passes, in order:
//! 1. Lowercase fold
//! 2. URL truncation to scheme+host
//! 3. Punctuation-noise removal
//! 4. Emoji token isolation

pub mod pattern;
pub mod transform;

pub use pattern::CompiledPattern;
pub use transform::clean;

#[cfg(test)]
mod tests;
