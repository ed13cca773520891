// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning the raw query string into search terms.

/// Split a query into terms on single spaces.
///
/// Empty pieces (leading, trailing or doubled spaces) are dropped: an empty
/// term is a prefix of every word and would highlight the whole teaser.
/// Order and duplicates are kept; case is left for the teaser to fold.
///
/// ```
/// use lede::split_query;
///
/// assert_eq!(split_query("Rust  lifetimes "), vec!["Rust", "lifetimes"]);
/// assert!(split_query("   ").is_empty());
/// ```
pub fn split_query(query: &str) -> Vec<String> {
    query
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(|s| s.to_string())
        .collect()
}
