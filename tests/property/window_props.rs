//! Window selection against a brute-force oracle.

use lede::window::{select_window, window_sums};
use proptest::prelude::*;

/// Score every window from scratch; keep the last of the best.
fn oracle(weights: &[u32], size: usize, found: bool) -> usize {
    if !found {
        return 0;
    }
    let mut best = (0, 0);
    for start in 0..=weights.len() - size {
        let sum: u32 = weights[start..start + size].iter().sum();
        if sum >= best.1 {
            best = (start, sum);
        }
    }
    best.0
}

fn weights_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(prop::sample::select(vec![2u32, 8, 40]), 1..60)
}

proptest! {
    #[test]
    fn prop_sums_match_direct_sums(weights in weights_strategy(), size in 1usize..20) {
        let size = size.min(weights.len());
        let sums = window_sums(&weights, size);
        prop_assert_eq!(sums.len(), weights.len() - size + 1);
        for (start, sum) in sums.iter().enumerate() {
            let direct: u32 = weights[start..start + size].iter().sum();
            prop_assert_eq!(*sum, direct);
        }
    }

    #[test]
    fn prop_selection_matches_oracle(
        weights in weights_strategy(),
        size in 1usize..20,
        found in any::<bool>(),
    ) {
        let size = size.min(weights.len());
        let sums = window_sums(&weights, size);
        prop_assert_eq!(select_window(&sums, found), oracle(&weights, size, found));
    }
}
