// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "snowball")]
use lede::SnowballStemmer;
use lede::{
    render_html, render_page, split_query, teaser_hits, IdentityStemmer, SearchHit, Stemmer,
    TeaserBuilder, TeaserOptions,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, OutputFormat, StemmerKind, TeaserArgs};

/// Stemmer chosen on the command line.
enum CliStemmer {
    #[cfg(feature = "snowball")]
    Snowball(SnowballStemmer),
    Identity(IdentityStemmer),
}

impl CliStemmer {
    fn from_kind(kind: StemmerKind) -> Self {
        match kind {
            #[cfg(feature = "snowball")]
            StemmerKind::Snowball => CliStemmer::Snowball(SnowballStemmer::english()),
            #[cfg(not(feature = "snowball"))]
            StemmerKind::Snowball => {
                tracing::warn!("built without snowball support; using identity stemmer");
                CliStemmer::Identity(IdentityStemmer)
            }
            StemmerKind::Identity => CliStemmer::Identity(IdentityStemmer),
        }
    }
}

impl Stemmer for CliStemmer {
    fn stem(&self, word: &str) -> String {
        match self {
            #[cfg(feature = "snowball")]
            CliStemmer::Snowball(stemmer) => stemmer.stem(word),
            CliStemmer::Identity(stemmer) => stemmer.stem(word),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries the teaser output.
fn init_logging(verbose: bool) {
    let default = if verbose { "lede=debug" } else { "lede=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Snippet {
            terms,
            body,
            format,
            teaser,
        } => {
            let builder = make_builder(&teaser)?;
            let body = read_input(body.as_deref())?;
            let terms: Vec<String> = terms.iter().flat_map(|t| split_query(t)).collect();
            tracing::debug!(bytes = body.len(), terms = ?terms, "building snippet");

            let teaser = builder.build(&body, &terms);
            let emphasis = &builder.options().emphasis;
            let output = match format {
                OutputFormat::Marked => teaser.to_marked(emphasis),
                OutputFormat::Html => teaser.to_html(),
                OutputFormat::Ansi if display::use_colors() => display::teaser_ansi(&teaser),
                OutputFormat::Ansi => teaser.to_marked(emphasis),
            };
            println!("{}", output);
        }
        Commands::Render {
            query,
            input,
            page,
            teaser,
        } => {
            let builder = make_builder(&teaser)?;
            let hits = read_hits(input.as_deref())?;
            let rendered = teaser_hits(&hits, &query, &builder);
            if page {
                print!("{}", render_page(&query, &rendered));
            } else {
                println!("{}", render_html(&rendered));
            }
        }
        Commands::Show {
            query,
            input,
            teaser,
        } => {
            let builder = make_builder(&teaser)?;
            let hits = read_hits(input.as_deref())?;
            if hits.is_empty() {
                eprintln!("⚠️  No results for '{}'", query);
                return Ok(());
            }
            for (rank, hit) in teaser_hits(&hits, &query, &builder).iter().enumerate() {
                println!("{}", display::hit_box(rank + 1, hit));
            }
        }
    }
    Ok(())
}

fn make_builder(args: &TeaserArgs) -> Result<TeaserBuilder<CliStemmer>> {
    let options = load_options(args)?;
    tracing::debug!(word_count = options.word_count, stemmer = ?args.stemmer, "teaser options");
    Ok(TeaserBuilder::new(CliStemmer::from_kind(args.stemmer)).with_options(options))
}

/// Options file first, then command-line overrides, then validation.
fn load_options(args: &TeaserArgs) -> Result<TeaserOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config JSON in {}", path.display()))?
        }
        None => TeaserOptions::default(),
    };
    if let Some(words) = args.words {
        options.word_count = words;
    }
    options.validate().context("Invalid teaser options")?;
    Ok(options)
}

/// Read a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn read_hits(path: Option<&Path>) -> Result<Vec<SearchHit>> {
    let raw = read_input(path)?;
    let hits: Vec<SearchHit> =
        serde_json::from_str(&raw).context("Search hits must be a JSON array of { ref, doc }")?;
    tracing::debug!(hits = hits.len(), "loaded search hits");
    Ok(hits)
}
