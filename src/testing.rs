//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication between `tests/`,
//! `benches/` and the fuzz target.

#![doc(hidden)]

use crate::stemmer::IdentityStemmer;
use crate::teaser::{Emphasis, TeaserBuilder, TeaserOptions};
use crate::types::SearchHit;

/// Builder with the identity stemmer and the given window size.
///
/// Identity stemming keeps expectations independent of stemmer internals.
pub fn identity_builder(word_count: usize) -> TeaserBuilder<IdentityStemmer> {
    TeaserBuilder::new(IdentityStemmer).with_word_count(word_count)
}

/// Options with the given window size and default markers.
pub fn options(word_count: usize) -> TeaserOptions {
    TeaserOptions::default().with_word_count(word_count)
}

/// Remove the default `<em>`/`</em>` markers from a marked teaser.
pub fn strip_markers(marked: &str) -> String {
    strip_emphasis(marked, &Emphasis::default())
}

/// Remove the given markers from a marked teaser.
pub fn strip_emphasis(marked: &str, emphasis: &Emphasis) -> String {
    if emphasis.open.is_empty() {
        return marked.to_string();
    }
    marked.replace(&emphasis.open, "").replace(&emphasis.close, "")
}

/// A body of `sentences` sentences of `words` words each, e.g.
/// `"w0 w1 w2. w3 w4 w5."` for `(2, 3)`.
pub fn make_body(sentences: usize, words: usize) -> String {
    (0..sentences)
        .map(|s| {
            (0..words)
                .map(|w| format!("w{}", s * words + w))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(". ")
        + "."
}

/// A search hit with a generated reference.
pub fn make_hit(id: usize, title: &str, body: &str) -> SearchHit {
    SearchHit::new(format!("doc{}.html", id), title, body)
}
