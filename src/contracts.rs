//! Runtime contracts for teaser construction.
//!
//! Debug-mode assertions over the offset bookkeeping and window selection.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Turn a silent off-by-one in the offset arithmetic into a loud panic
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                             |
//! |----------------------------|------------------------------------------------------|
//! | `check_words_well_formed`  | offsets strictly increase; each slice is its word    |
//! | `check_window_in_bounds`   | `start + size <= word count`                         |
//! | `check_highlights_valid`   | highlights ordered, disjoint, on char boundaries     |
//!
//! Offsets are the fragile part. They are computed by counting delimiters, not
//! by searching the body, so one wrong `+ 1` shifts every later word.

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Weight ordering. A match must outweigh a sentence start, which must
/// outweigh a plain word; otherwise the window ranking inverts.
const _: () = {
    use crate::scoring::{DEFAULT_WEIGHT, SEARCH_TERM_WEIGHT, SENTENCE_START_WEIGHT};
    assert!(SEARCH_TERM_WEIGHT > SENTENCE_START_WEIGHT);
    assert!(SENTENCE_START_WEIGHT > DEFAULT_WEIGHT);
    assert!(DEFAULT_WEIGHT > 0);
};

use crate::teaser::Teaser;
use crate::types::WeightedWord;

// ============================================================================
// WORD CONTRACTS
// ============================================================================

/// Check that every weighted word points at itself in the body.
///
/// # Panics (debug builds only)
/// Panics if an offset runs past the body, offsets are not strictly
/// increasing, or `body[offset..offset + len]` does not lower-case to the
/// recorded text.
#[inline]
pub fn check_words_well_formed(body: &str, words: &[WeightedWord]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (i, word) in words.iter().enumerate() {
        debug_assert!(
            word.end() <= body.len(),
            "Contract violation: word[{}] ends at {} > body.len() {}",
            i,
            word.end(),
            body.len()
        );

        if i > 0 {
            debug_assert!(
                words[i - 1].end() < word.offset,
                "Contract violation: word[{}] at {} overlaps word[{}] ending at {}",
                i,
                word.offset,
                i - 1,
                words[i - 1].end()
            );
        }

        let slice = body.get(word.offset..word.end());
        debug_assert!(
            slice.map(str::to_lowercase).as_deref() == Some(word.text.as_str()),
            "Contract violation: word[{}] is {:?} but body[{}..{}] is {:?}",
            i,
            word.text,
            word.offset,
            word.end(),
            slice
        );
    }
}

// ============================================================================
// WINDOW CONTRACTS
// ============================================================================

/// Check that the chosen window lies inside the word list.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_window_in_bounds(start: usize, size: usize, word_count: usize) {
    debug_assert!(
        start + size <= word_count,
        "Contract violation: window {}..{} exceeds {} words",
        start,
        start + size,
        word_count
    );
}

// ============================================================================
// TEASER CONTRACTS
// ============================================================================

/// Check that highlights are ordered, disjoint and sliceable.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_highlights_valid(teaser: &Teaser) {
    let text = teaser.text();
    let mut prev_stop = 0;

    for (i, h) in teaser.highlights().iter().enumerate() {
        debug_assert!(
            prev_stop <= h.start && h.start < h.stop && h.stop <= text.len(),
            "Contract violation: highlight[{}] {}..{} out of order or bounds (prev stop {}, len {})",
            i,
            h.start,
            h.stop,
            prev_stop,
            text.len()
        );
        debug_assert!(
            text.is_char_boundary(h.start) && text.is_char_boundary(h.stop),
            "Contract violation: highlight[{}] {}..{} splits a character",
            i,
            h.start,
            h.stop
        );
        prev_stop = h.stop;
    }
}
