// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence and word splitting with offset bookkeeping.
//!
//! This is a heuristic splitter, not a linguistic one. Sentences end at the
//! literal two-character token `". "` and words end at a single space. It does
//! not know about abbreviations, question marks, tabs or runs of spaces. That
//! imprecision is part of the contract: sentence starts earn a weight bonus, so
//! changing what counts as a sentence changes which window wins.
//!
//! Offsets are tracked by counting, not by searching: each word advances the
//! cursor by its length plus one (the space, or the period eaten by the
//! sentence split), and each sentence advances it by one more (the space half
//! of `". "`). Empty tokens from consecutive spaces produce no word but still
//! advance the cursor by one.
//!
//! Splitting happens on the original body, not the lower-cased one. Both
//! delimiters are ASCII and lower-casing never creates or removes an ASCII
//! space or period, so the token structure is identical either way, and this
//! way the offsets stay valid byte offsets into the text we slice from.

/// Sentence boundary.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Word boundary within a sentence.
pub const WORD_DELIMITER: char = ' ';

/// A non-empty word token, borrowed from the body it was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    /// The word as it appears in the body (original casing).
    pub text: &'a str,
    /// Byte offset of the word in the body.
    pub offset: usize,
    /// True for the first non-empty word of a sentence.
    pub sentence_start: bool,
}

/// Split `body` into words, in document order.
///
/// ```
/// use lede::tokenize::split_words;
///
/// let words = split_words("The fox. A dog");
/// let texts: Vec<&str> = words.iter().map(|w| w.text).collect();
/// assert_eq!(texts, vec!["The", "fox", "A", "dog"]);
/// assert_eq!(words[2].offset, 9);
/// assert!(words[2].sentence_start);
/// ```
pub fn split_words(body: &str) -> Vec<WordSpan<'_>> {
    let mut words = Vec::new();
    let mut offset = 0usize;

    for sentence in body.split(SENTENCE_DELIMITER) {
        let mut sentence_start = true;
        for word in sentence.split(WORD_DELIMITER) {
            if !word.is_empty() {
                words.push(WordSpan {
                    text: word,
                    offset,
                    sentence_start,
                });
                sentence_start = false;
            }
            // ' ' or '.' if last word in sentence
            offset += word.len() + 1;
        }
        // the split ate a two-char boundary
        offset += 1;
    }

    words
}
