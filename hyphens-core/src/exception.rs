//! Exception table
//!
//! Exceptions are whole words given with their permitted breaks spelled out,
//! e.g. `as-so-ciate`. A word found here bypasses the pattern scan entirely.

use std::collections::HashMap;

/// Map from lowercase word to explicit break flags
///
/// The flag vector of a word with `n` characters holds `n + 1` entries:
/// entry `i` is 1 when a break is permitted between characters `i - 1`
/// and `i`, 0 otherwise. Entry 0 is always 0.
#[derive(Debug, Clone, Default)]
pub struct ExceptionMap {
    entries: HashMap<String, Vec<u8>>,
}

impl ExceptionMap {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from whitespace-separated hyphenated words
    pub fn compile(text: &str) -> Self {
        let mut map = Self::new();
        map.extend_from_text(text);
        map
    }

    /// Add every token of `text`, returning how many were read
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let mut count = 0;
        for token in text.split_whitespace() {
            self.insert_token(token);
            count += 1;
        }
        log::trace!(
            "read {count} exception tokens, table now holds {} words",
            self.entries.len()
        );
        count
    }

    /// Add one hyphenated word such as `ta-ble`.
    ///
    /// Returns the flags previously stored for the same word, if any.
    /// Tokens made only of hyphens carry no word and are skipped.
    pub fn insert_token(&mut self, token: &str) -> Option<Vec<u8>> {
        let lowered = token.to_lowercase();
        let mut key = String::with_capacity(lowered.len());
        let mut breaks = vec![0u8];
        let mut pending = false;

        for ch in lowered.chars() {
            if ch == '-' {
                pending = true;
                continue;
            }
            if !key.is_empty() {
                breaks.push(u8::from(pending));
            }
            key.push(ch);
            pending = false;
        }

        if key.is_empty() {
            return None;
        }
        breaks.push(u8::from(pending));

        self.entries.insert(key, breaks)
    }

    /// Break flags for `word`, compared case-insensitively
    pub fn get(&self, word: &str) -> Option<&[u8]> {
        self.get_lowercase(&word.to_lowercase())
    }

    /// Lookup for a key the caller has already lowercased
    pub(crate) fn get_lowercase(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// True if `word` has an entry
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of words in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build an exception table from a block of hyphenated words
pub fn compile_exceptions(text: &str) -> ExceptionMap {
    ExceptionMap::compile(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_positions() {
        let map = compile_exceptions("as-so-ciate");
        // a s | s o | c i a t e
        assert_eq!(
            map.get("associate"),
            Some(&[0, 0, 1, 0, 1, 0, 0, 0, 0, 0][..])
        );
    }

    #[test]
    fn test_vector_length_is_key_plus_one() {
        let map = compile_exceptions("ta-ble re-cog-ni-zance ас-бест");
        for word in ["table", "recognizance", "асбест"] {
            let flags = map.get(word).unwrap();
            assert_eq!(flags.len(), word.chars().count() + 1, "word {word}");
            assert_eq!(flags[0], 0);
        }
    }

    #[test]
    fn test_word_without_hyphens_blocks_breaks() {
        let map = compile_exceptions("project");
        assert_eq!(map.get("project"), Some(&[0; 8][..]));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let map = compile_exceptions("Ta-Ble");
        assert!(map.contains("table"));
        assert!(map.contains("TABLE"));
        assert!(map.contains("Table"));
    }

    #[test]
    fn test_leading_and_trailing_hyphens() {
        let map = compile_exceptions("-abc-");
        // A leading hyphen cannot move entry 0
        assert_eq!(map.get("abc"), Some(&[0, 0, 0, 1][..]));
    }

    #[test]
    fn test_consecutive_hyphens_mark_one_gap() {
        let map = compile_exceptions("ab--cd");
        assert_eq!(map.get("abcd"), Some(&[0, 0, 1, 0, 0][..]));
    }

    #[test]
    fn test_hyphen_only_token_is_skipped() {
        let mut map = ExceptionMap::new();
        assert_eq!(map.insert_token("---"), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_reinsert_returns_previous() {
        let mut map = compile_exceptions("ta-ble");
        let previous = map.insert_token("tab-le");
        assert_eq!(previous, Some(vec![0, 0, 1, 0, 0, 0]));
        assert_eq!(map.get("table"), Some(&[0, 0, 0, 1, 0, 0][..]));
        assert_eq!(map.len(), 1);
    }
}
