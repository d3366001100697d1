//! Pattern compiler
//!
//! Liang patterns mix letters with digit weights, e.g. `hy3ph` or `.ach4`.
//! Each digit is the weight of the gap in front of the next letter; a gap
//! without a digit weighs 0. A leading or trailing `.` anchors the pattern to
//! a word boundary and is stored as an ordinary character.
//!
//! Patterns are folded into a prefix trie so that every pattern matching at a
//! given offset of a word is found in a single walk.

use smallvec::SmallVec;
use std::collections::HashMap;

/// Gap weights of a pattern, always one longer than its letter sequence
pub type Weights = SmallVec<[u32; 8]>;

/// A single parsed pattern token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    letters: String,
    weights: Weights,
}

impl Pattern {
    /// Split a token into its letters and gap weights.
    ///
    /// Parsing never fails. A maximal run of ASCII digits is read as one
    /// decimal number and assigned to the gap preceding the next letter, so
    /// a leading digit weighs gap 0 and consecutive digits form a
    /// multi-digit weight. A run too large for `u32` saturates to the
    /// largest value with the same parity as the run.
    pub fn parse(token: &str) -> Self {
        let mut letters = String::with_capacity(token.len());
        let mut weights = Weights::new();
        weights.push(0);
        let mut in_digits = false;

        for ch in token.chars() {
            if ch.is_ascii_digit() {
                let digit = u32::from(ch as u8 - b'0');
                if let Some(weight) = weights.last_mut() {
                    *weight = if in_digits {
                        weight
                            .checked_mul(10)
                            .and_then(|w| w.checked_add(digit))
                            .unwrap_or(u32::MAX - 1 + digit % 2)
                    } else {
                        digit
                    };
                }
                in_digits = true;
            } else {
                letters.push(ch);
                weights.push(0);
                in_digits = false;
            }
        }

        Self { letters, weights }
    }

    /// Digit-free character sequence, the trie key
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Weight of each gap, `letters().chars().count() + 1` entries
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }
}

/// Trie node stored by index in the arena
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Weights of the pattern whose letters end here
    weights: Option<Weights>,
}

/// Prefix trie of compiled patterns
///
/// Nodes live in one contiguous vector and refer to their children by index.
/// The trie is only mutated while it is being compiled; a [`Hyphenator`]
/// owns it afterwards and reads it without locking.
///
/// [`Hyphenator`]: crate::Hyphenator
#[derive(Debug, Clone)]
pub struct PatternTrie {
    nodes: Vec<TrieNode>,
    /// Number of distinct letter paths carrying weights
    patterns: usize,
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTrie {
    /// Create an empty trie holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            patterns: 0,
        }
    }

    /// Compile a whitespace-separated block of pattern tokens
    pub fn compile(text: &str) -> Self {
        let mut trie = Self::new();
        trie.extend_from_text(text);
        trie
    }

    /// Compile several pattern blocks into one trie, in order
    pub fn compile_all<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut trie = Self::new();
        for text in texts {
            trie.extend_from_text(text);
        }
        trie
    }

    /// Parse and insert every token of `text`, returning how many were read
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let mut count = 0;
        for token in text.split_whitespace() {
            self.insert(&Pattern::parse(token));
            count += 1;
        }
        log::trace!(
            "inserted {count} pattern tokens, trie now holds {} patterns",
            self.patterns
        );
        count
    }

    /// Insert one pattern.
    ///
    /// A pattern whose letters are already present replaces the earlier
    /// weights, which are returned.
    pub fn insert(&mut self, pattern: &Pattern) -> Option<Weights> {
        let mut current_idx = 0usize;

        for ch in pattern.letters().chars() {
            current_idx = match self.nodes[current_idx].children.get(&ch) {
                Some(&child_idx) => child_idx as usize,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx]
                        .children
                        .insert(ch, new_idx as u32);
                    new_idx
                }
            };
        }

        let previous = self.nodes[current_idx]
            .weights
            .replace(pattern.weights.clone());
        if previous.is_some() {
            log::trace!("pattern {:?} replaces earlier weights", pattern.letters());
        } else {
            self.patterns += 1;
        }
        previous
    }

    /// Weights stored for exactly this letter sequence
    pub fn get(&self, letters: &str) -> Option<&[u32]> {
        let mut current_idx = 0usize;
        for ch in letters.chars() {
            current_idx = *self.nodes[current_idx].children.get(&ch)? as usize;
        }
        self.nodes[current_idx].weights.as_deref()
    }

    /// Number of distinct patterns
    pub fn len(&self) -> usize {
        self.patterns
    }

    /// True if no pattern has been inserted
    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Number of trie nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Raise `points` to every pattern that matches `chars` from `start`.
    ///
    /// Walks one character at a time and stops at the first character
    /// without a child, so every prefix pattern is applied, not only the
    /// longest one. `points[start + j]` receives the j-th weight.
    pub(crate) fn overlay(&self, chars: &[char], start: usize, points: &mut [u32]) {
        let mut current_idx = 0usize;

        for ch in chars.iter().skip(start) {
            match self.nodes[current_idx].children.get(ch) {
                Some(&next_idx) => current_idx = next_idx as usize,
                None => break,
            }

            if let Some(weights) = &self.nodes[current_idx].weights {
                for (point, &weight) in points.iter_mut().skip(start).zip(weights.iter()) {
                    *point = (*point).max(weight);
                }
            }
        }
    }
}

/// Compile a pattern block into a fresh trie
pub fn compile_patterns(text: &str) -> PatternTrie {
    PatternTrie::compile(text)
}
