// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sliding-window scoring and selection.
//!
//! A window is a run of exactly `size` consecutive words. Its score is the sum
//! of its word weights. Sums are computed with a running total: drop the word
//! leaving on the left, add the word entering on the right. One pass, O(n).
//!
//! # Tie-breaking
//!
//! Selection walks the sums from the last window to the first and only moves
//! on a strict improvement. When several windows share the maximum, the first
//! one met on that backward walk stays, which is the *last* window in document
//! order. This is not the same as "first maximum scanning forward", and the
//! difference only shows on ties, so the backward loop is kept as-is.
//!
//! When no word matched any term, the scores are ignored and the lede (window
//! 0) is shown.

/// Sum of weights for every window of `size` consecutive words.
///
/// Returns `weights.len() - size + 1` sums. `size` must not exceed the number
/// of weights.
pub fn window_sums(weights: &[u32], size: usize) -> Vec<u32> {
    debug_assert!(
        size <= weights.len(),
        "window size {} > word count {}",
        size,
        weights.len()
    );

    let mut sums = Vec::with_capacity(weights.len() - size + 1);
    let mut cur_sum: u32 = weights[..size].iter().sum();
    sums.push(cur_sum);

    for i in 0..weights.len() - size {
        cur_sum += weights[i + size];
        cur_sum -= weights[i];
        sums.push(cur_sum);
    }

    sums
}

/// Index of the window to show.
pub fn select_window(sums: &[u32], search_term_found: bool) -> usize {
    if !search_term_found {
        return 0;
    }

    let mut max_sum = 0;
    let mut max_index = 0;
    // backwards
    for i in (0..sums.len()).rev() {
        if sums[i] > max_sum {
            max_sum = sums[i];
            max_index = i;
        }
    }
    max_index
}
