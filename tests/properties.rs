//! Property-based tests for the indexing pipeline.

use proptest::prelude::*;
use wordlines::{flatten_ranges, is_minimal, pages_to_ranges, Indexer, Tokenizer, DEFAULT_STOP_WORDS};

/// Lines mixing ASCII letters, the delimiter set and arbitrary printable Unicode.
fn line_strategy() -> impl Strategy<Value = String> {
    r"([a-zA-Z .,;/\\?!-]|\PC){0,40}"
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..20)
}

proptest! {
    #[test]
    fn prop_tokens_are_non_empty_and_lowercase(line in line_strategy(), number in 1u32..1000) {
        let tokens = Tokenizer::new().tokenize_line(&line, number);
        for token in tokens {
            prop_assert!(!token.word.is_empty());
            prop_assert_eq!(token.word.clone(), token.word.to_lowercase());
            prop_assert_eq!(token.line, number);
        }
    }

    #[test]
    fn prop_stop_words_never_indexed(doc in document_strategy()) {
        let index = Indexer::new().index_text(&doc.join("\n")).unwrap();
        for word in DEFAULT_STOP_WORDS {
            prop_assert!(!index.contains(word));
        }
    }

    #[test]
    fn prop_words_sorted_and_unique(doc in document_strategy()) {
        let index = Indexer::new().index_text(&doc.join("\n")).unwrap();
        let words: Vec<&str> = index.words().collect();
        prop_assert!(words.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_every_entry_has_minimal_ranges(doc in document_strategy()) {
        let index = Indexer::new().index_text(&doc.join("\n")).unwrap();
        for entry in index.entries() {
            prop_assert!(!entry.ranges.is_empty());
            prop_assert!(is_minimal(&entry.ranges));
        }
    }

    #[test]
    fn prop_ranges_are_minimal(lines in prop::collection::vec(0u32..200, 0..100)) {
        let ranges = pages_to_ranges(&lines);
        prop_assert!(is_minimal(&ranges));
    }

    #[test]
    fn prop_ranges_cover_exactly_the_input(lines in prop::collection::vec(0u32..200, 0..100)) {
        let ranges = pages_to_ranges(&lines);
        let mut expected = lines.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(flatten_ranges(&ranges), expected);
    }

    #[test]
    fn prop_neighbours_share_a_range(lines in prop::collection::vec(0u32..200, 0..100)) {
        let ranges = pages_to_ranges(&lines);
        for &i in &lines {
            if lines.contains(&(i + 1)) {
                let holder = ranges.iter().find(|r| r.contains(i)).unwrap();
                prop_assert!(holder.contains(i + 1));
            }
        }
    }

    #[test]
    fn prop_recompressing_flattened_ranges_is_identity(lines in prop::collection::vec(0u32..200, 0..100)) {
        let ranges = pages_to_ranges(&lines);
        prop_assert_eq!(pages_to_ranges(&flatten_ranges(&ranges)), ranges);
    }
}
