//! Search-result teasers.
//!
//! Given a document body and the words a user searched for, pick the most
//! relevant run of words and highlight the matches. The window is found by a
//! sliding sum over per-word weights, so the whole thing is one linear pass.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ tokenize.rs │────▶│  scoring.rs  │────▶│  window.rs  │
//! │ (sentences, │     │ (2 / 8 / 40, │     │ (sums, tie- │
//! │  offsets)   │     │  stemming)   │     │  breaking)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      teaser/                         │
//! │   (TeaserBuilder, Teaser, TeaserOptions, markers)    │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!               render.rs (HTML result list)
//! ```
//!
//! Everything is a pure function of its inputs. No module keeps state between
//! calls, so a builder can be shared freely and calls can race each other.
//!
//! # Usage
//!
//! ```
//! use lede::{IdentityStemmer, TeaserBuilder};
//!
//! let builder = TeaserBuilder::new(IdentityStemmer).with_word_count(6);
//! let body = "Indexes are built offline. The search page loads the index and queries it.";
//! let teaser = builder.build(body, &["queries"]);
//!
//! assert_eq!(teaser.highlighted_words().collect::<Vec<_>>(), vec!["queries"]);
//! assert_eq!(
//!     builder.marked(body, &["queries"]),
//!     "loads the index and <em>queries</em> it."
//! );
//! ```

// Module declarations
pub mod contracts;
mod query;
mod render;
pub mod scoring;
mod stemmer;
mod teaser;
pub mod testing;
pub mod tokenize;
mod types;
pub mod window;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use query::split_query;
pub use render::{render_hit, render_html, render_page, teaser_hits};
#[cfg(feature = "snowball")]
pub use stemmer::SnowballStemmer;
pub use stemmer::{DefaultStemmer, IdentityStemmer, Stemmer};
pub use teaser::{
    make_teaser, Emphasis, Highlight, OptionsError, Segment, Teaser, TeaserBuilder,
    TeaserOptions, DEFAULT_EMPHASIS_CLOSE, DEFAULT_EMPHASIS_OPEN, DEFAULT_WORD_COUNT,
};
pub use types::{HitDocument, RenderedHit, SearchHit, WeightedWord};
