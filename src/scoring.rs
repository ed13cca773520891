// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word weights.
//!
//! Every word gets one of three weights:
//!
//! | Word                         | Weight |
//! |------------------------------|--------|
//! | Matches a search term        | 40     |
//! | First word of a sentence     | 8      |
//! | Anything else                | 2      |
//!
//! A match beats a sentence start. The gaps are wide on purpose: a single
//! match outweighs the sentence-start bonus of any window, so windows are
//! ranked first by how many matches they hold and only then by how many
//! sentences they begin.
//!
//! A word matches when its stem *starts with* a stemmed search term. Prefix,
//! not equality, so "config" finds "configuration" even when the stemmer
//! leaves them with different roots.

use crate::stemmer::Stemmer;
use crate::tokenize::split_words;
use crate::types::WeightedWord;

/// Weight of a word that matches a search term.
pub const SEARCH_TERM_WEIGHT: u32 = 40;

/// Weight of the first word of a sentence.
pub const SENTENCE_START_WEIGHT: u32 = 8;

/// Weight of every other word.
pub const DEFAULT_WEIGHT: u32 = 2;

/// Result of weighing a body against a set of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Weighing {
    pub words: Vec<WeightedWord>,
    /// True if at least one word matched a search term.
    pub search_term_found: bool,
}

/// Weight for a single word.
#[inline]
pub fn word_weight(is_match: bool, sentence_start: bool) -> u32 {
    if is_match {
        SEARCH_TERM_WEIGHT
    } else if sentence_start {
        SENTENCE_START_WEIGHT
    } else {
        DEFAULT_WEIGHT
    }
}

/// Does `stemmed_word` start with any of the stemmed terms?
#[inline]
pub fn matches_any(stemmed_word: &str, stemmed_terms: &[String]) -> bool {
    stemmed_terms
        .iter()
        .any(|term| stemmed_word.starts_with(term.as_str()))
}

/// Lower-case and stem each search term once.
///
/// Duplicates are kept. An empty term stems to the empty string, which is a
/// prefix of everything.
pub fn stem_terms<S, T>(stemmer: &S, terms: &[T]) -> Vec<String>
where
    S: Stemmer + ?Sized,
    T: AsRef<str>,
{
    terms
        .iter()
        .map(|term| stemmer.stem(&term.as_ref().to_lowercase()))
        .collect()
}

/// Weigh every word of `body` in document order.
pub fn weigh_words<S>(body: &str, stemmed_terms: &[String], stemmer: &S) -> Weighing
where
    S: Stemmer + ?Sized,
{
    let mut weighing = Weighing::default();

    for span in split_words(body) {
        let text = span.text.to_lowercase();
        let is_match = matches_any(&stemmer.stem(&text), stemmed_terms);
        weighing.search_term_found |= is_match;
        weighing.words.push(WeightedWord {
            text,
            weight: word_weight(is_match, span.sentence_start),
            offset: span.offset,
            len: span.text.len(),
        });
    }

    weighing
}
