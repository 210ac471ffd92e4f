//! Lexical pools
//!
//! Constant tables shared by the mutator stages: small numbers, the year
//! window, symbol sets, leet maps and default prefixes.

use std::sync::LazyLock;

use chrono::{Datelike, Local};

/// Small numbers commonly appended to passwords
pub const NUMBERS_SIMPLE: &[&str] = &["1", "2", "3", "12", "123", "1234", "0", "007"];

/// Reduced symbol set used by insertions and patterns
pub const SYMBOLS_COMMON: &[&str] = &["!", "@", "#", "$", "%", "*", "?"];

/// Full symbol set used by affixing
pub const SYMBOLS_ALL: &[&str] = &[
    "!", "@", "#", "$", "%", "^", "&", "*", "?", ".", "-", "_", "+", "=",
];

/// One substitute per letter
pub const LEET_MAP_SIMPLE: &[(char, char)] = &[
    ('a', '@'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '$'),
];

/// Every substitute per letter
pub const LEET_MAP_FULL: &[(char, &[char])] = &[
    ('a', &['@', '4']),
    ('b', &['8']),
    ('e', &['3']),
    ('g', &['6', '9']),
    ('i', &['1', '!', '|']),
    ('l', &['1', '|']),
    ('o', &['0']),
    ('s', &['$', '5']),
    ('t', &['7']),
    ('z', &['2']),
];

/// Prefixes seen on service and staging account passwords
pub const DEFAULT_PREFIXES: &[&str] = &[
    "admin_", "test_", "dev_", "backup_", "staging_", "prod_", "pw_", "pass_",
];

/// Years before the current one included in the window
pub const YEARS_BACK: i32 = 5;

/// Years after the current one included in the window
pub const YEARS_AHEAD: i32 = 2;

static STANDARD: LazyLock<LexicalPools> =
    LazyLock::new(|| LexicalPools::for_year(Local::now().year()));

/// Pool tables for one process
///
/// Only the year window depends on the clock; everything else is constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalPools {
    /// Absolute years, oldest first
    years: Vec<String>,
    /// Last two digits of each entry in `years`
    years_short: Vec<String>,
}

impl LexicalPools {
    /// Pools built around the current local year, initialized on first use
    pub fn standard() -> &'static LexicalPools {
        &STANDARD
    }

    /// Pools built around a fixed year
    pub fn for_year(current_year: i32) -> Self {
        let years: Vec<String> = (current_year - YEARS_BACK..=current_year + YEARS_AHEAD)
            .map(|y| format!("{:04}", y))
            .collect();
        let years_short = years
            .iter()
            .map(|y| y[y.len() - 2..].to_string())
            .collect();

        Self { years, years_short }
    }

    /// Small numbers (e.g. "123", "007")
    pub fn numbers(&self) -> &'static [&'static str] {
        NUMBERS_SIMPLE
    }

    /// Reduced symbol set for insertions and patterns
    pub fn symbols_common(&self) -> &'static [&'static str] {
        SYMBOLS_COMMON
    }

    /// Full symbol set for affixing
    pub fn symbols_all(&self) -> &'static [&'static str] {
        SYMBOLS_ALL
    }

    /// Default prefixes such as "admin_"
    pub fn prefixes(&self) -> &'static [&'static str] {
        DEFAULT_PREFIXES
    }

    /// Absolute years (e.g. "2021")
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Two-digit years (e.g. "21")
    pub fn years_short(&self) -> &[String] {
        &self.years_short
    }

    /// Simple substitute for a lowercase letter
    pub fn leet_simple(&self, c: char) -> Option<char> {
        LEET_MAP_SIMPLE
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to)
    }

    /// All substitutes for a lowercase letter
    pub fn leet_full(&self, c: char) -> Option<&'static [char]> {
        LEET_MAP_FULL
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to)
    }
}
