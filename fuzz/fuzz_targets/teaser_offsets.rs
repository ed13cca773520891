// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for teaser offset bookkeeping.
//!
//! Arbitrary bodies and terms go through the full pipeline. The teaser must
//! always be the exact body slice it claims to be, every highlight must sit
//! on a char boundary inside it, and stripping the markers must give that
//! slice back. Multi-byte text, runs of spaces and stray periods are where
//! offset counting goes wrong.

#![no_main]

use arbitrary::Arbitrary;
use lede::testing::strip_markers;
use lede::{IdentityStemmer, TeaserBuilder};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    body: String,
    terms: Vec<String>,
    word_count: u8,
}

fuzz_target!(|input: Input| {
    let word_count = usize::from(input.word_count).max(1);
    let builder = TeaserBuilder::new(IdentityStemmer).with_word_count(word_count);
    let teaser = builder.build(&input.body, &input.terms);

    let range = teaser.body_range();
    assert_eq!(&input.body[range], teaser.text());

    for highlight in teaser.highlights() {
        assert!(highlight.start < highlight.stop);
        assert!(teaser.text().is_char_boundary(highlight.start));
        assert!(teaser.text().is_char_boundary(highlight.stop));
    }

    // markers may occur in the body itself; only check bodies without them
    if !input.body.contains("<em>") && !input.body.contains("</em>") {
        let marked = builder.marked(&input.body, &input.terms);
        assert_eq!(strip_markers(&marked), teaser.text());
    }
});
