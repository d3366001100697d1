//! Language-specific pattern data
//!
//! Each built-in language is a TOML configuration embedded in the binary.
//! External configurations in the same schema can be loaded from disk.

mod builtin;
mod config;
mod loader;

pub use builtin::Language;
pub use config::{Exceptions, LanguageConfig, Metadata, PatternSet};
pub use loader::get_hyphenator;
