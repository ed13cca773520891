//! End-to-end teaser scenarios.

use crate::common::{lede_of, marked, strip_markers, teaser};

// ============================================================================
// DEGENERATE INPUTS
// ============================================================================

#[test]
fn empty_body_comes_back_empty() {
    assert_eq!(marked("", &["x"], 30), "");
}

#[test]
fn empty_terms_return_short_body_whole() {
    let body = "Getting started. Install the tool, then run it.";
    assert_eq!(lede_of(body, 30), body);
}

#[test]
fn sentence_list_without_terms_starts_at_first_sentence() {
    assert_eq!(lede_of("a. b. c.", 30), "a. b. c.");
    assert_eq!(lede_of("a. b. c.", 2), "a. b");
}

#[test]
fn body_shorter_than_window_with_match_is_whole() {
    let body = "Only a few words about search.";
    assert_eq!(marked(body, &["search"], 30), "Only a few words about <em>search.</em>");
}

// ============================================================================
// WINDOW PLACEMENT
// ============================================================================

#[test]
fn match_in_second_sentence_pulls_the_window() {
    let body = "The quick brown fox. The lazy dog sleeps.";
    let result = marked(body, &["fox"], 4);
    assert_eq!(result.matches("<em>fox</em>").count(), 1);
    assert!(result.contains("<em>fox</em>"));
}

#[test]
fn window_prefers_more_matches() {
    let body = "rust here. filler filler filler filler filler. rust and rust again";
    let t = teaser(body, &["rust"], 4);
    assert_eq!(t.highlighted_words().count(), 2);
    assert_eq!(t.text(), "rust and rust again");
}

#[test]
fn no_match_falls_back_to_lede_even_when_later_sentences_score_higher() {
    // later windows hold more sentence starts, but nothing matched
    let body = "one two three four. a. b. c. d.";
    assert_eq!(marked(body, &["zzz"], 3), "one two three");
}

#[test]
fn window_never_exceeds_word_count() {
    let body = "w ".repeat(200);
    for n in [1, 5, 30, 199, 200, 500] {
        let t = teaser(&body, &["w"], n);
        assert_eq!(t.text().split(' ').count(), n.min(200), "word_count {}", n);
    }
}

// ============================================================================
// EMPHASIS
// ============================================================================

#[test]
fn every_matching_word_in_window_is_marked() {
    let body = "Search the index. Searching is fast. A searcher searches.";
    let result = marked(body, &["search"], 30);
    assert_eq!(
        result,
        "<em>Search</em> the index. <em>Searching</em> is fast. A <em>searcher</em> <em>searches.</em>"
    );
}

#[test]
fn adjacent_matches_are_marked_independently() {
    assert_eq!(
        marked("dog dogs", &["dog"], 30),
        "<em>dog</em> <em>dogs</em>"
    );
}

#[test]
fn punctuation_inside_a_word_stays_inside_the_marker() {
    assert_eq!(marked("see fox, run", &["fox"], 30), "see <em>fox,</em> run");
}

#[test]
fn stripping_markers_gives_back_the_text() {
    let body = "Rust makes systems programming safe. Rust is fast.";
    let t = teaser(body, &["rust", "safe"], 30);
    assert_eq!(strip_markers(&marked(body, &["rust", "safe"], 30)), t.text());
}

#[test]
fn marking_only_touches_unmarked_input() {
    // a second pass sees "<em>fox</em>" as a word that doesn't start with "fox"
    let once = marked("a fox", &["fox"], 30);
    let twice = marked(&once, &["fox"], 30);
    assert_eq!(twice, "a <em>fox</em>");
}
