// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a teaser is built from, and the search hits it is built for.
//!
//! Two families live here. `WeightedWord` is the transient scoring artifact:
//! one per non-empty word of the body, rebuilt on every call and thrown away
//! once the teaser is assembled. `SearchHit` and `RenderedHit` are the shapes
//! at the edges: what the upstream search index hands us, and what we hand to
//! whatever draws the result list.
//!
//! # Invariants
//!
//! - **WeightedWord**: `body[offset..offset + len].to_lowercase() == text`.
//!   Offsets are byte offsets into the original (not lower-cased) body.
//!
//! - **Word sequence**: offsets strictly increase, and the words in order are
//!   the body's space-separated tokens, each exactly once.

use serde::{Deserialize, Serialize};

use crate::teaser::Teaser;

/// A word annotated with its relevance weight and its position in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedWord {
    /// Lower-cased word text, as compared against the stemmed search terms.
    pub text: String,
    /// Relevance weight (see `scoring`).
    pub weight: u32,
    /// Byte offset of the word's first character in the original body.
    pub offset: usize,
    /// Byte length of the word in the original body.
    pub len: usize,
}

impl WeightedWord {
    /// Byte offset one past the word's last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Stored fields of a document, as returned by the search index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HitDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// One ranked result from the upstream search index.
///
/// Deserializes from the `{ "ref": ..., "doc": { "title": ..., "body": ... } }`
/// shape emitted by lunr-style indexes. Extra fields (`score`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "ref", alias = "reference")]
    pub reference: String,
    #[serde(rename = "doc", alias = "document")]
    pub document: HitDocument,
}

impl SearchHit {
    pub fn new(reference: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            document: HitDocument {
                title: title.into(),
                body: body.into(),
            },
        }
    }
}

/// A search hit paired with its teaser, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHit {
    pub reference: String,
    pub title: String,
    pub teaser: Teaser,
}
