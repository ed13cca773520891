// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Teaser generation.
//!
//! Given a document body and the user's search terms, pick the most relevant
//! run of `word_count` words and mark the words that match a term.
//!
//! # Pipeline
//!
//! ```text
//! body ──split_words──▶ spans ──weigh_words──▶ weighted words
//!                                                   │
//!                          window_sums ◀────────────┘
//!                               │
//!                         select_window ──▶ assemble ──▶ Teaser
//! ```
//!
//! 1. Lower-case and stem the search terms once.
//! 2. Split the body into sentences (`". "`) and words (`' '`).
//! 3. Weigh each word: 40 for a match, 8 for a sentence start, 2 otherwise.
//! 4. Score every window of `min(words, word_count)` words.
//! 5. Choose the best window if anything matched, else the first.
//! 6. Copy the window out of the original body, recording matched words.
//!
//! # Example
//!
//! ```
//! use lede::{make_teaser, IdentityStemmer, TeaserOptions};
//!
//! let options = TeaserOptions::default().with_word_count(4);
//! let teaser = make_teaser(
//!     "The quick brown fox. The lazy dog sleeps.",
//!     &["fox"],
//!     IdentityStemmer,
//!     &options,
//! );
//! assert_eq!(teaser, "<em>fox</em>. The lazy dog");
//! ```

mod options;
mod snippet;

pub use options::{
    Emphasis, OptionsError, TeaserOptions, DEFAULT_EMPHASIS_CLOSE, DEFAULT_EMPHASIS_OPEN,
    DEFAULT_WORD_COUNT,
};
pub use snippet::{Highlight, Segment, Teaser};

use crate::contracts::{check_highlights_valid, check_window_in_bounds, check_words_well_formed};
use crate::scoring::{stem_terms, weigh_words, SEARCH_TERM_WEIGHT};
use crate::stemmer::{DefaultStemmer, Stemmer};
use crate::types::WeightedWord;
use crate::window::{select_window, window_sums};

/// Builds teasers with a fixed stemmer and options.
///
/// Stateless between calls: every `build` starts from scratch, so one builder
/// can serve any number of documents.
#[derive(Debug, Clone)]
pub struct TeaserBuilder<S = DefaultStemmer> {
    stemmer: S,
    options: TeaserOptions,
}

impl Default for TeaserBuilder<DefaultStemmer> {
    fn default() -> Self {
        Self::new(DefaultStemmer::default())
    }
}

impl<S: Stemmer> TeaserBuilder<S> {
    pub fn new(stemmer: S) -> Self {
        Self {
            stemmer,
            options: TeaserOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TeaserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.options.word_count = word_count;
        self
    }

    pub fn options(&self) -> &TeaserOptions {
        &self.options
    }

    /// Build the teaser for `body`.
    pub fn build<T: AsRef<str>>(&self, body: &str, terms: &[T]) -> Teaser {
        let stemmed_terms = stem_terms(&self.stemmer, terms);
        let weighing = weigh_words(body, &stemmed_terms, &self.stemmer);
        let words = weighing.words;
        check_words_well_formed(body, &words);

        if words.is_empty() {
            return Teaser::new(body.to_string(), Vec::new(), 0);
        }

        let window_size = words.len().min(self.options.word_count);
        let weights: Vec<u32> = words.iter().map(|w| w.weight).collect();
        let sums = window_sums(&weights, window_size);
        let start = select_window(&sums, weighing.search_term_found);
        check_window_in_bounds(start, window_size, words.len());

        tracing::trace!(
            words = words.len(),
            window_size,
            start,
            search_term_found = weighing.search_term_found,
            "selected teaser window"
        );

        let teaser = assemble(body, &words[start..start + window_size], words[start].offset);
        check_highlights_valid(&teaser);
        teaser
    }

    /// Build the teaser and render it with the configured emphasis markers.
    pub fn marked<T: AsRef<str>>(&self, body: &str, terms: &[T]) -> String {
        self.build(body, terms).to_marked(&self.options.emphasis)
    }
}

/// Copy the window's words out of the body, gaps included.
fn assemble(body: &str, window: &[WeightedWord], body_start: usize) -> Teaser {
    let mut text = String::new();
    let mut highlights = Vec::new();
    let mut index = body_start;

    for word in window {
        if index < word.offset {
            // missing text from index to start of `word`
            text.push_str(&body[index..word.offset]);
        }
        let start = text.len();
        text.push_str(&body[word.offset..word.end()]);
        if word.weight == SEARCH_TERM_WEIGHT {
            highlights.push(Highlight::new(start, text.len()));
        }
        index = word.end();
    }

    Teaser::new(text, highlights, body_start)
}

/// One-shot teaser with markers applied.
///
/// Equivalent to building with a `TeaserBuilder` and calling `to_marked` with
/// the options' emphasis.
pub fn make_teaser<S, T>(body: &str, terms: &[T], stemmer: S, options: &TeaserOptions) -> String
where
    S: Stemmer,
    T: AsRef<str>,
{
    TeaserBuilder::new(stemmer)
        .with_options(options.clone())
        .marked(body, terms)
}
