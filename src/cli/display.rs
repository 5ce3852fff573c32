// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bkspell CLI.
//!
//! OneDark colors for dark terminals, One Light for light ones. Detection tries
//! `BKSPELL_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and turns colors off when stdout is not a TTY.
//!
//! Matches are colored by distance: exact in green, one edit in yellow,
//! anything further in red.

use std::sync::OnceLock;

use bkspell::{LoadReport, SearchResult, VerificationReport};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BKSPELL_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
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

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn distance_color(distance: usize) -> fn() -> String {
    match distance {
        0 => GREEN,
        1 => YELLOW,
        _ => RED,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// One query's matches, already sorted.
pub fn print_results(query: &str, tolerance: usize, results: &[SearchResult]) {
    let header = format!("{} (≤ {} edits)", query, tolerance);
    println!("{}", themed(CYAN, &[BOLD], &header));

    if results.is_empty() {
        println!("  {}", themed(GRAY, &[], "no matches"));
        return;
    }

    let width = results
        .iter()
        .map(|r| r.word.chars().count())
        .max()
        .unwrap_or(0);
    for result in results {
        let padded = format!("{:<width$}", result.word, width = width);
        let distance = format!("{}", result.distance);
        println!(
            "  {}  {}",
            padded,
            themed(distance_color(result.distance), &[], &distance)
        );
    }
}

pub fn print_load_report(report: &LoadReport) {
    println!(
        "{} {} words added, {} duplicates, {} blank lines",
        themed(GREEN, &[BOLD], "✓"),
        report.added,
        report.duplicates,
        report.empty
    );
}

pub fn print_verification(path: &str, report: &VerificationReport) {
    println!("{}", themed(CYAN, &[BOLD], path));
    let rows = [
        ("words", report.node_count),
        ("depth", report.depth),
        ("max fan-out", report.max_fanout),
        ("leaves", report.leaf_count),
    ];
    for (label, value) in rows {
        println!("  {:<12} {}", themed(GRAY, &[], label), value);
    }
    let status = if report.distances_checked {
        themed(GREEN, &[], "distances verified")
    } else {
        themed(YELLOW, &[], "structure only")
    };
    println!("  {:<12} {}", themed(GRAY, &[], "status"), status);
}
