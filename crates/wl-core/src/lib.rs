//! Shared types for Washline: errors, run configuration, and the emoji
//! dictionary the cleaning pattern is compiled from.

pub mod config;
pub mod dictionary;
pub mod error;

pub use config::WashlineConfig;
pub use dictionary::EmojiDictionary;
pub use error::{Result, WashError};
