//! Hyphenation engine
//!
//! For a word that is not an exception, every pattern matching at every
//! offset of `.word.` raises the weight of the gaps it covers; the final
//! weight of a gap is the maximum over all matches. Odd weights permit a
//! break, even weights forbid one.
//!
//! The engine is total: any string, including the empty one, produces a
//! result. The worst case is a word left whole.

use std::iter;

use crate::exception::ExceptionMap;
use crate::language::LanguageConfig;
use crate::pattern::PatternTrie;
use crate::text::{segments, Segment};

/// Words of at most this many characters are never split
pub const SHORT_WORD_MAX_CHARS: usize = 3;

/// Marks the start and end of the word during the pattern scan
const BOUNDARY_MARKER: char = '.';

/// Offset of the first word gap in a weight array, past the leading marker
const WORD_OFFSET: usize = 2;

/// Compiled patterns and exceptions for one or more languages
///
/// Immutable once built. Share it between threads with an `Arc`; every
/// call allocates only its own scratch buffers.
#[derive(Debug, Clone, Default)]
pub struct Hyphenator {
    trie: PatternTrie,
    exceptions: ExceptionMap,
}

impl Hyphenator {
    /// Wrap an already compiled trie and exception table
    pub fn new(trie: PatternTrie, exceptions: ExceptionMap) -> Self {
        Self { trie, exceptions }
    }

    /// Compile one pattern block and one exception block
    pub fn compile(patterns: &str, exceptions: &str) -> Self {
        Self::builder().patterns(patterns).exceptions(exceptions).build()
    }

    /// Start a builder that accepts any number of blocks
    pub fn builder() -> HyphenatorBuilder {
        HyphenatorBuilder::new()
    }

    /// Validate and compile a language configuration
    pub fn from_config(config: &LanguageConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self::builder().language(config).build())
    }

    /// The compiled pattern trie
    pub fn trie(&self) -> &PatternTrie {
        &self.trie
    }

    /// The compiled exception table
    pub fn exceptions(&self) -> &ExceptionMap {
        &self.exceptions
    }

    /// Final weight array for `word`.
    ///
    /// The array covers the decorated word `.word.` (lowercased), so it holds
    /// `lowercase(word).chars().count() + 3` entries and index `i + 2` is the
    /// gap after the i-th character. Short words get an all-zero array.
    pub fn points(&self, word: &str) -> Vec<u32> {
        let lowered = word.to_lowercase();
        let char_count = lowered.chars().count();

        if word.chars().count() <= SHORT_WORD_MAX_CHARS {
            return vec![0; char_count + 3];
        }

        if let Some(breaks) = self.exceptions.get_lowercase(&lowered) {
            let mut points = vec![0; char_count + 3];
            for (point, &flag) in points.iter_mut().skip(1).zip(breaks) {
                *point = u32::from(flag);
            }
            return points;
        }

        self.pattern_points(&lowered)
    }

    /// Scan `.lowered.` against the trie and suppress the edge gaps
    fn pattern_points(&self, lowered: &str) -> Vec<u32> {
        let decorated: Vec<char> = iter::once(BOUNDARY_MARKER)
            .chain(lowered.chars())
            .chain(iter::once(BOUNDARY_MARKER))
            .collect();
        let mut points = vec![0u32; decorated.len() + 1];

        for start in 0..decorated.len() {
            self.trie.overlay(&decorated, start, &mut points);
        }

        // Never break after the first character or before the last one
        let len = points.len();
        for idx in [1, 2, len - 2, len - 3] {
            points[idx] = 0;
        }
        points
    }

    /// Byte offsets into `word` where a break is permitted.
    ///
    /// Offsets are strictly increasing and lie strictly inside the word. A
    /// literal `-` already present in the word is never followed by an
    /// extra break.
    pub fn break_points(&self, word: &str) -> Vec<usize> {
        if word.chars().count() <= SHORT_WORD_MAX_CHARS {
            return Vec::new();
        }

        let points = self.points(word);
        word.char_indices()
            .zip(points.iter().skip(WORD_OFFSET))
            .filter(|&((_, ch), &point)| point % 2 == 1 && ch != '-')
            .map(|((idx, ch), _)| idx + ch.len_utf8())
            .filter(|&offset| offset < word.len())
            .collect()
    }

    /// Split `word` into fragments at every permitted break.
    ///
    /// The fragments borrow from `word` and concatenate back to it exactly.
    /// Words of three characters or fewer come back whole.
    pub fn hyphenate<'w>(&self, word: &'w str) -> Vec<&'w str> {
        let mut fragments = Vec::new();
        let mut start = 0;
        for offset in self.break_points(word) {
            fragments.push(&word[start..offset]);
            start = offset;
        }
        fragments.push(&word[start..]);
        fragments
    }

    /// Insert `separator` at every permitted break of every word in `text`.
    ///
    /// Non-word characters are copied unchanged; see [`segments`] for what
    /// counts as a word.
    pub fn hyphenate_text(&self, text: &str, separator: &str) -> String {
        let mut output = String::with_capacity(text.len() + text.len() / 4);

        for segment in segments(text) {
            match segment {
                Segment::Word(word) => {
                    for (idx, fragment) in self.hyphenate(word).into_iter().enumerate() {
                        if idx > 0 {
                            output.push_str(separator);
                        }
                        output.push_str(fragment);
                    }
                }
                Segment::Other(other) => output.push_str(other),
            }
        }

        output
    }

    /// Run [`hyphenate_text`](Self::hyphenate_text) over many texts in parallel.
    ///
    /// Results are returned in input order.
    #[cfg(feature = "parallel")]
    pub fn hyphenate_batch<S>(&self, texts: &[S], separator: &str) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.hyphenate_text(text.as_ref(), separator))
            .collect()
    }

    /// Run [`hyphenate_text`](Self::hyphenate_text) over many texts.
    ///
    /// Results are returned in input order.
    #[cfg(not(feature = "parallel"))]
    pub fn hyphenate_batch<S>(&self, texts: &[S], separator: &str) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .iter()
            .map(|text| self.hyphenate_text(text.as_ref(), separator))
            .collect()
    }
}

/// Accumulates pattern and exception blocks into one [`Hyphenator`]
#[derive(Debug, Default)]
pub struct HyphenatorBuilder {
    trie: PatternTrie,
    exceptions: ExceptionMap,
}

impl HyphenatorBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block of pattern tokens; later blocks win on identical letters
    pub fn patterns(mut self, text: &str) -> Self {
        self.trie.extend_from_text(text);
        self
    }

    /// Add a block of hyphenated exception words
    pub fn exceptions(mut self, text: &str) -> Self {
        self.exceptions.extend_from_text(text);
        self
    }

    /// Add every pattern block and the exceptions of a language config
    pub fn language(mut self, config: &LanguageConfig) -> Self {
        for set in &config.patterns {
            let count = self.trie.extend_from_text(&set.text);
            log::debug!(
                "{}: loaded {count} patterns from '{}'",
                config.metadata.code,
                set.name
            );
        }
        self.exceptions.extend_from_text(&config.exceptions.text);
        self
    }

    /// Finish compilation
    pub fn build(self) -> Hyphenator {
        log::debug!(
            "compiled hyphenator: {} patterns in {} nodes, {} exceptions",
            self.trie.len(),
            self.trie.node_count(),
            self.exceptions.len()
        );
        Hyphenator::new(self.trie, self.exceptions)
    }
}
