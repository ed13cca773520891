// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Teaser options.
//!
//! Deserializable with every field defaulted, so a partial JSON file such as
//! `{ "wordCount": 12 }` is a complete configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of words in a teaser unless configured otherwise.
pub const DEFAULT_WORD_COUNT: usize = 30;

/// Marker inserted before a highlighted word.
pub const DEFAULT_EMPHASIS_OPEN: &str = "<em>";

/// Marker inserted after a highlighted word.
pub const DEFAULT_EMPHASIS_CLOSE: &str = "</em>";

/// The marker pair wrapped around each matched word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emphasis {
    pub open: String,
    pub close: String,
}

impl Emphasis {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for Emphasis {
    fn default() -> Self {
        Self::new(DEFAULT_EMPHASIS_OPEN, DEFAULT_EMPHASIS_CLOSE)
    }
}

/// Teaser generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeaserOptions {
    /// Words in the sliding window (default: 30)
    pub word_count: usize,
    /// Markers around matched words (default: `<em>` / `</em>`)
    pub emphasis: Emphasis,
}

impl Default for TeaserOptions {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            emphasis: Emphasis::default(),
        }
    }
}

impl TeaserOptions {
    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Reject options that cannot produce a meaningful teaser.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.word_count == 0 {
            return Err(OptionsError::ZeroWordCount);
        }
        if self.emphasis.open.is_empty() != self.emphasis.close.is_empty() {
            return Err(OptionsError::UnpairedEmphasis {
                open: self.emphasis.open.clone(),
                close: self.emphasis.close.clone(),
            });
        }
        Ok(())
    }
}

/// Invalid teaser options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// A zero-word window selects nothing.
    ZeroWordCount,
    /// One emphasis marker is empty and the other is not.
    UnpairedEmphasis { open: String, close: String },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::ZeroWordCount => write!(f, "word count must be at least 1"),
            OptionsError::UnpairedEmphasis { open, close } => write!(
                f,
                "emphasis markers must both be set or both be empty (open {:?}, close {:?})",
                open, close
            ),
        }
    }
}

impl std::error::Error for OptionsError {}
