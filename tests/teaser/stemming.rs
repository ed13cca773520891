//! Stemming-aware matching.

use lede::{make_teaser, IdentityStemmer};

use crate::common::options;

#[test]
fn closure_stemmer_matches_morphological_variants() {
    let naive = |word: &str| {
        word.trim_end_matches(|c: char| !c.is_alphanumeric())
            .trim_end_matches("ing")
            .trim_end_matches('s')
            .to_string()
    };
    let result = make_teaser("She jumps. Jumping is fun.", &["JUMP"], naive, &options(30));
    assert_eq!(result, "She <em>jumps</em>. <em>Jumping</em> is fun.");
}

#[test]
fn terms_are_stemmed_before_matching() {
    // "runs" stems to "run" which prefixes "running"
    let strip_s = |word: &str| word.trim_end_matches('s').to_string();
    let result = make_teaser("running late", &["runs"], strip_s, &options(30));
    assert_eq!(result, "<em>running</em> late");
}

#[test]
fn identity_stemmer_needs_a_literal_prefix() {
    let result = make_teaser("running late", &["runs"], IdentityStemmer, &options(30));
    assert_eq!(result, "running late");
}

#[cfg(feature = "snowball")]
#[test]
fn snowball_matches_plural_and_singular() {
    let builder = lede::TeaserBuilder::new(lede::SnowballStemmer::english());
    let t = builder.build("One dog barks. Two dogs bark.", &["dogs"]);
    assert_eq!(t.highlighted_words().collect::<Vec<_>>(), vec!["dog", "dogs"]);
}

#[cfg(feature = "snowball")]
#[test]
fn default_builder_uses_snowball() {
    let t = lede::TeaserBuilder::default().build("The sleeping cat sleeps.", &["sleep"]);
    assert_eq!(t.highlighted_words().collect::<Vec<_>>(), vec!["sleeping", "sleeps."]);
}
