// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The assembled teaser and its renditions.
//!
//! A `Teaser` is a contiguous slice of the original body plus the ranges of
//! the words to highlight. Markers are applied only when rendering, so the
//! same teaser can become marked text, escaped HTML or coloured terminal
//! output without being rebuilt.

use super::options::Emphasis;
use htmlescape::encode_minimal;
use std::fmt;
use std::ops::Range;

/// A highlighted word, as a byte range into the teaser text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub start: usize,
    pub stop: usize,
}

impl Highlight {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }
}

/// A run of teaser text, either plain or highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(text) | Segment::Match(text) => text,
        }
    }
}

/// A window of a document with its matched words marked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teaser {
    text: String,
    highlights: Vec<Highlight>,
    body_start: usize,
}

impl Teaser {
    pub(crate) fn new(text: String, highlights: Vec<Highlight>, body_start: usize) -> Self {
        Self {
            text,
            highlights,
            body_start,
        }
    }

    /// The teaser text, without markers, in the body's original casing.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Where the teaser came from in the body (byte range).
    pub fn body_range(&self) -> Range<usize> {
        self.body_start..self.body_start + self.text.len()
    }

    /// The highlighted words, in order.
    pub fn highlighted_words(&self) -> impl Iterator<Item = &str> {
        self.highlights.iter().map(|h| &self.text[h.start..h.stop])
    }

    /// Split the text into alternating plain and highlighted runs.
    ///
    /// Plain runs are never empty. Adjacent matches stay separate segments.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::with_capacity(self.highlights.len() * 2 + 1);
        let mut start_from = 0;

        for h in &self.highlights {
            if start_from < h.start {
                segments.push(Segment::Plain(&self.text[start_from..h.start]));
            }
            segments.push(Segment::Match(&self.text[h.start..h.stop]));
            start_from = h.stop;
        }
        if start_from < self.text.len() {
            segments.push(Segment::Plain(&self.text[start_from..]));
        }

        segments
    }

    /// Teaser text with each matched word wrapped in the emphasis markers.
    ///
    /// Text is copied verbatim; nothing is escaped.
    pub fn to_marked(&self, emphasis: &Emphasis) -> String {
        let extra = self.highlights.len() * (emphasis.open.len() + emphasis.close.len());
        let mut marked = String::with_capacity(self.text.len() + extra);

        for segment in self.segments() {
            match segment {
                Segment::Plain(text) => marked.push_str(text),
                Segment::Match(text) => {
                    marked.push_str(&emphasis.open);
                    marked.push_str(text);
                    marked.push_str(&emphasis.close);
                }
            }
        }

        marked
    }

    /// HTML rendition: text escaped, matched words in `<em>`.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        for segment in self.segments() {
            match segment {
                Segment::Plain(text) => html.push_str(&encode_minimal(text)),
                Segment::Match(text) => {
                    html.push_str("<em>");
                    html.push_str(&encode_minimal(text));
                    html.push_str("</em>");
                }
            }
        }

        html
    }
}

impl fmt::Display for Teaser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
