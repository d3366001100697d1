//! Property-based invariant tests for the hyphenation engine.
//!
//! These hold for any input:
//!
//! 1. Fragments concatenate back to the word.
//! 2. Short words are never split.
//! 3. Pattern-derived splits leave at least two characters at each edge.
//! 4. Inserting a separator and removing it again restores the text.
//! 5. Results do not depend on call order or threading.

use std::sync::OnceLock;

use hyphens_core::{get_hyphenator, Hyphenator, Language, SHORT_WORD_MAX_CHARS};
use proptest::prelude::*;

/// English patterns without the exception list
fn english_patterns_only() -> &'static Hyphenator {
    static HYPHENATOR: OnceLock<Hyphenator> = OnceLock::new();
    HYPHENATOR.get_or_init(|| {
        let config = Language::English.config().unwrap();
        config
            .patterns
            .iter()
            .fold(Hyphenator::builder(), |builder, set| builder.patterns(&set.text))
            .build()
    })
}

fn lowercase_word(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), 0..max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn prose() -> impl Strategy<Value = String> {
    "[a-zA-Zа-яА-Я ,.;/'!?-]{0,80}"
}

proptest! {
    #[test]
    fn fragments_rebuild_any_word(word in "\\PC{0,24}") {
        let english = get_hyphenator("en").unwrap();
        let fragments = english.hyphenate(&word);

        prop_assert_eq!(fragments.concat(), word.clone());
        if !word.is_empty() {
            prop_assert!(fragments.iter().all(|fragment| !fragment.is_empty()));
        }
    }

    #[test]
    fn short_words_are_never_split(word in "\\PC{0,3}") {
        prop_assume!(word.chars().count() <= SHORT_WORD_MAX_CHARS);
        let english = get_hyphenator("en").unwrap();

        prop_assert_eq!(english.hyphenate(&word), vec![word.as_str()]);
        prop_assert!(english.break_points(&word).is_empty());
    }

    #[test]
    fn edge_fragments_keep_two_letters(word in lowercase_word(16)) {
        let fragments = english_patterns_only().hyphenate(&word);

        if fragments.len() > 1 {
            let first = fragments[0].chars().count();
            let last = fragments[fragments.len() - 1].chars().count();
            prop_assert!(first >= 2, "{:?}", fragments);
            prop_assert!(last >= 2, "{:?}", fragments);
        }
    }

    #[test]
    fn break_points_are_increasing_and_interior(word in lowercase_word(20)) {
        let breaks = english_patterns_only().break_points(&word);

        prop_assert!(breaks.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(breaks.iter().all(|&offset| offset > 0 && offset < word.len()));
    }

    #[test]
    fn separator_round_trips(text in prose()) {
        let merged = get_hyphenator("en+ru").unwrap();
        let output = merged.hyphenate_text(&text, "|");

        prop_assert_eq!(output.replace('|', ""), text);
        prop_assert!(!output.contains("||"));
        prop_assert!(!output.starts_with('|'));
        prop_assert!(!output.ends_with('|'));
    }

    #[test]
    fn hyphenation_is_deterministic(texts in proptest::collection::vec(prose(), 0..8)) {
        let english = get_hyphenator("en").unwrap();
        let sequential: Vec<String> = texts
            .iter()
            .map(|text| english.hyphenate_text(text, "-"))
            .collect();

        prop_assert_eq!(english.hyphenate_batch(&texts, "-"), sequential.clone());
        prop_assert_eq!(english.hyphenate_batch(&texts, "-"), sequential);
    }
}
