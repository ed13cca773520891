// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lede command-line interface.
//!
//! Three subcommands: `snippet` turns one body into a teaser, `render` turns a
//! list of search hits into the HTML a results page shows, and `show` prints
//! the same hits to the terminal. Bodies and hits are read from a file or from
//! stdin, so each command sits at the end of a pipe.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lede",
    about = "Search-result teasers with highlighted query terms",
    version
)]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct TeaserArgs {
    /// Words per teaser (default: 30, or the config file's wordCount)
    #[arg(short, long)]
    pub words: Option<usize>,

    /// JSON options file, e.g. { "wordCount": 20, "emphasis": { "open": "**", "close": "**" } }
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stemmer applied to terms and words before prefix matching
    #[arg(long, value_enum, default_value_t = StemmerKind::Snowball)]
    pub stemmer: StemmerKind,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemmerKind {
    /// English Snowball stemmer (identity when built without `snowball`)
    Snowball,
    /// No stemming; plain prefix matching
    Identity,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Body text with emphasis markers around matches
    Marked,
    /// Escaped HTML with <em> around matches
    Html,
    /// Coloured terminal output
    Ansi,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a teaser for one document body
    Snippet {
        /// Search terms
        terms: Vec<String>,

        /// File holding the document body (default: stdin)
        #[arg(short, long)]
        body: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Marked)]
        format: OutputFormat,

        #[command(flatten)]
        teaser: TeaserArgs,
    },

    /// Render search hits as an HTML result list
    Render {
        /// Query the hits were found for (split on spaces)
        query: String,

        /// JSON array of { "ref", "doc": { "title", "body" } } (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Wrap the list in the results heading and <ul>
        #[arg(long)]
        page: bool,

        #[command(flatten)]
        teaser: TeaserArgs,
    },

    /// Print search hits with their teasers to the terminal
    Show {
        /// Query the hits were found for (split on spaces)
        query: String,

        /// JSON array of { "ref", "doc": { "title", "body" } } (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        teaser: TeaserArgs,
    },
}
