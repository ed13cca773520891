//! Which window wins when several share the best score.
//!
//! Candidates are scanned from the last window back to the first, and the best
//! is only replaced on a strict improvement. On a tie the first window met on
//! that backward scan stays: the one latest in the document.

use crate::common::{marked, teaser};
use lede::window::{select_window, window_sums};

#[test]
fn two_equal_windows_pick_the_later_one() {
    // weights: x=40(start) a=2 a=2 a=2 x=40 -> sums(2) = [42, 4, 4, 42]
    let body = "x a a a x";
    let t = teaser(body, &["x"], 2);
    assert_eq!(t.body_range(), 6..9);
    assert_eq!(t.text(), "a x");
}

#[test]
fn tie_rule_matches_backward_strict_scan() {
    let body = "fox one two. fox one two. fox one two";
    let t = teaser(body, &["fox"], 3);
    // every window holds one "fox" and scores 44; the last one wins
    assert_eq!(t.text(), "fox one two");
    assert_eq!(t.body_range().start, 26);
}

#[test]
fn strict_improvement_still_wins_over_position() {
    let body = "fox fox filler filler fox";
    assert_eq!(marked(body, &["fox"], 2), "<em>fox</em> <em>fox</em>");
}

#[test]
fn backward_scan_differs_from_forward_first_maximum() {
    let sums = window_sums(&[40, 2, 2, 40], 1);
    assert_eq!(sums, vec![40, 2, 2, 40]);

    let forward_first = sums
        .iter()
        .enumerate()
        .fold((0, 0), |best, (i, &s)| if s > best.1 { (i, s) } else { best })
        .0;
    assert_eq!(forward_first, 0);
    assert_eq!(select_window(&sums, true), 3);
}

#[test]
fn tie_without_match_is_irrelevant() {
    // identical windows everywhere, nothing matched: always window 0
    let body = "a a a a a a";
    assert_eq!(teaser(body, &["zzz"], 2).body_range(), 0..3);
}
