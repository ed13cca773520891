// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the lede CLI.
//!
//! Matches are drawn in bold yellow, titles in cyan, borders in gray. The
//! palette follows the terminal background: `LEDE_THEME` ("dark" or "light")
//! wins if set, then the `COLORFGBG` hint some terminals export, then dark.
//!
//! Colour is dropped entirely under `NO_COLOR` or when stdout is not a TTY, so
//! piping the output gives plain text.

use lede::{RenderedHit, Segment, Teaser};
use std::sync::OnceLock;

/// Inner width of a result box (between the two │ borders).
pub const BOX_WIDTH: usize = 78;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LEDE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8, dark gray) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Roles the CLI colours, resolved per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Match,
    Title,
    Reference,
    Border,
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// OneDark on dark backgrounds, One Light on light ones.
fn palette(role: Role, theme: Theme) -> (u8, u8, u8) {
    match (role, theme) {
        (Role::Match, Theme::Dark) => (229, 192, 123),
        (Role::Match, Theme::Light) => (193, 132, 1),
        (Role::Title, Theme::Dark) => (86, 182, 194),
        (Role::Title, Theme::Light) => (1, 132, 188),
        (Role::Reference, Theme::Dark) => (152, 195, 121),
        (Role::Reference, Theme::Light) => (80, 161, 79),
        (Role::Border, Theme::Dark) => (92, 99, 112),
        (Role::Border, Theme::Light) => (160, 161, 167),
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in the role's colour when colours are on.
pub fn paint(role: Role, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, rgb(palette(role, theme())), text, RESET)
}

/// Visible length in characters, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Teaser with matches coloured; plain `[match]` brackets without colour.
pub fn teaser_ansi(teaser: &Teaser) -> String {
    let colors = use_colors();
    teaser
        .segments()
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.to_string(),
            Segment::Match(text) if colors => paint(Role::Match, true, text),
            Segment::Match(text) => format!("[{}]", text),
        })
        .collect()
}

/// Greedy word wrap of plain text to `width` visible characters.
///
/// Breaks only at spaces, so ANSI sequences (which never contain one) stay
/// intact. A word longer than `width` gets a line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split(' ') {
        let needed = if line.is_empty() { 0 } else { 1 } + visible_len(word);
        if !line.is_empty() && visible_len(&line) + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

fn border(text: &str) -> String {
    paint(Role::Border, false, text)
}

fn row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("{}{}{}{}", border("│ "), content, " ".repeat(pad.saturating_sub(1)), border("│"))
}

/// Draw one hit as a box: numbered title on top, reference, then the teaser.
pub fn hit_box(rank: usize, hit: &RenderedHit) -> String {
    let label = format!("{}. {}", rank, hit.title);
    let label = paint(Role::Title, true, &label);
    let fill = BOX_WIDTH.saturating_sub(visible_len(&label) + 2);

    let mut lines = vec![format!(
        "{}{}{}",
        border("┌─ "),
        label,
        border(&format!(" {}┐", "─".repeat(fill.saturating_sub(1))))
    )];
    lines.push(row(&paint(Role::Reference, false, &hit.reference)));
    for line in wrap(&teaser_ansi(&hit.teaser), BOX_WIDTH - 2) {
        lines.push(row(&line));
    }
    lines.push(border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));

    lines.join("\n")
}
