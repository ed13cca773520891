// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stemming, as an injected capability.
//!
//! The teaser only needs one thing from a stemmer: a deterministic map from a
//! lower-cased word to its root. How that root is computed is not our business,
//! so it sits behind a trait. Closures implement it directly:
//!
//! ```
//! use lede::Stemmer;
//!
//! let strip_s = |word: &str| word.trim_end_matches('s').to_string();
//! assert_eq!(strip_s.stem("dogs"), "dog");
//! ```

/// Reduce a word to an approximate root form.
///
/// Callers lower-case before stemming. Implementations must be pure: the same
/// word always yields the same stem.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String,
{
    #[inline]
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Leaves words as they are. Matching degrades to plain prefix matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    #[inline]
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// English Snowball (Porter2) stemmer.
#[cfg(feature = "snowball")]
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

#[cfg(feature = "snowball")]
impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(rust_stemmers::Algorithm::English),
        }
    }
}

#[cfg(feature = "snowball")]
impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(feature = "snowball")]
impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer").finish_non_exhaustive()
    }
}

#[cfg(feature = "snowball")]
impl Stemmer for SnowballStemmer {
    #[inline]
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// The stemmer used when the caller doesn't pick one.
#[cfg(feature = "snowball")]
pub type DefaultStemmer = SnowballStemmer;

/// The stemmer used when the caller doesn't pick one.
#[cfg(not(feature = "snowball"))]
pub type DefaultStemmer = IdentityStemmer;
