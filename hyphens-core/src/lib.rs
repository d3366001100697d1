//! Liang hyphenation for soft-hyphen insertion
//!
//! This crate finds the legal breakpoints inside words using Frank Liang's
//! pattern algorithm, the one TeX uses. It has two parts:
//!
//! - **Pattern compiler**: parses pattern tokens such as `hy3ph` into a
//!   prefix trie of gap weights, and hyphenated exception words such as
//!   `ta-ble` into explicit break tables.
//! - **Hyphenation engine**: overlays every matching pattern on a word,
//!   keeps the maximum weight per gap and breaks where the weight is odd.
//!
//! Pattern data for English, Russian and Afrikaans is embedded and compiled
//! on first use.
//!
//! # Example
//!
//! ```rust
//! use hyphens_core::{get_hyphenator, Hyphenator, SOFT_HYPHEN};
//!
//! // Compile patterns directly
//! let hyphenator = Hyphenator::compile("hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n", "");
//! assert_eq!(hyphenator.hyphenate("hyphenation"), vec!["hy", "phen", "ation"]);
//!
//! // Or use an embedded language
//! let english = get_hyphenator("en").unwrap();
//! let text = english.hyphenate_text("Hyphenation!", &SOFT_HYPHEN.to_string());
//! assert_eq!(text, "Hy\u{ad}phen\u{ad}ation!");
//! ```

pub mod error;
pub mod exception;
pub mod hyphenator;
pub mod language;
pub mod pattern;
pub mod text;

pub use error::{Error, Result};
pub use exception::{compile_exceptions, ExceptionMap};
pub use hyphenator::{Hyphenator, HyphenatorBuilder, SHORT_WORD_MAX_CHARS};
pub use language::{get_hyphenator, Language, LanguageConfig};
pub use pattern::{compile_patterns, Pattern, PatternTrie, Weights};
pub use text::{segments, Segment, SOFT_HYPHEN};
