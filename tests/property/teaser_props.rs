//! Teaser invariants over random bodies.

use crate::common::{assert_is_body_slice, assert_words_well_formed, options, strip_markers};
use lede::scoring::{stem_terms, weigh_words, SEARCH_TERM_WEIGHT};
use lede::testing::identity_builder;
use lede::tokenize::split_words;
use lede::{make_teaser, IdentityStemmer};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Zé]{1,7}[.,]?").unwrap()
}

/// Words joined by single spaces, sentence boundaries and the odd double space.
fn body_strategy() -> impl Strategy<Value = String> {
    let sep = prop::sample::select(vec![" ", " ", " ", " ", ". ", "  "]);
    prop::collection::vec((word_strategy(), sep), 0..80).prop_map(|parts| {
        let mut body: String = parts.into_iter().map(|(w, s)| w + s).collect();
        body.truncate(body.trim_end().len());
        body
    })
}

fn terms_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,3}", 0..4)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_teaser_is_body_slice(
        body in body_strategy(),
        terms in terms_strategy(),
        word_count in 1usize..40,
    ) {
        let teaser = identity_builder(word_count).build(&body, &terms);
        assert_is_body_slice(&body, &teaser);
    }

    #[test]
    fn prop_markers_strip_back_to_body_slice(
        body in body_strategy(),
        terms in terms_strategy(),
        word_count in 1usize..40,
    ) {
        let marked = make_teaser(&body, &terms, IdentityStemmer, &options(word_count));
        let stripped = strip_markers(&marked);
        prop_assert!(body.contains(&stripped), "{:?} is not in {:?}", stripped, body);
    }

    #[test]
    fn prop_word_offsets_exact(body in body_strategy(), terms in terms_strategy()) {
        let stemmed = stem_terms(&IdentityStemmer, &terms);
        let weighing = weigh_words(&body, &stemmed, &IdentityStemmer);
        assert_words_well_formed(&body, &weighing.words);
    }

    #[test]
    fn prop_window_has_requested_word_count(
        body in body_strategy(),
        terms in terms_strategy(),
        word_count in 1usize..40,
    ) {
        let total = split_words(&body).len();
        let teaser = identity_builder(word_count).build(&body, &terms);
        let inside = split_words(teaser.text()).len();
        // sentence boundaries inside the teaser split the same way
        prop_assert_eq!(inside, total.min(word_count));
    }

    #[test]
    fn prop_highlights_are_exactly_the_matching_words(
        body in body_strategy(),
        terms in prop::collection::vec("[a-z]{1,3}", 1..4),
        word_count in 1usize..40,
    ) {
        let teaser = identity_builder(word_count).build(&body, &terms);
        let stemmed = stem_terms(&IdentityStemmer, &terms);
        let range = teaser.body_range();
        let expected = weigh_words(&body, &stemmed, &IdentityStemmer)
            .words
            .into_iter()
            .filter(|w| w.offset >= range.start && w.end() <= range.end)
            .filter(|w| w.weight == SEARCH_TERM_WEIGHT)
            .count();
        prop_assert_eq!(teaser.highlights().len(), expected);
    }

    /// Up to six words, no window without a match can outscore one with a
    /// match. Wider windows of sentence starts can.
    #[test]
    fn prop_match_is_shown_when_present(
        body in body_strategy(),
        terms in prop::collection::vec("[a-z]{1,3}", 1..4),
        word_count in 1usize..=6,
    ) {
        let stemmed = stem_terms(&IdentityStemmer, &terms);
        let found = weigh_words(&body, &stemmed, &IdentityStemmer).search_term_found;
        let teaser = identity_builder(word_count).build(&body, &terms);
        prop_assert_eq!(found, !teaser.highlights().is_empty());
    }

    #[test]
    fn prop_deterministic(body in body_strategy(), terms in terms_strategy()) {
        let builder = identity_builder(12);
        prop_assert_eq!(builder.marked(&body, &terms), builder.marked(&body, &terms));
    }
}
