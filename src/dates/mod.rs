//! Birth date decomposition
//!
//! Parses a birth date in one of the accepted numeric formats and breaks it
//! into the string fragments people tend to put in passwords.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tracing::{error, info};

use crate::error::{PassForgeError, Result};

/// Accepted formats, tried in order. The first format that parses wins.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%Y%m%d",
    "%m-%d-%Y", "%m/%d/%Y", "%m%d%Y",
    "%d-%m-%Y", "%d/%m/%Y", "%d%m%Y",
    "%m-%d-%y", "%m/%d/%y", "%m%d%y",
    "%d-%m-%y", "%d/%m/%y", "%d%m%y",
];

/// Named fragment of a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatePart {
    Yyyy,
    Yy,
    Mm,
    M,
    Dd,
    D,
    Mmdd,
    Ddmm,
    Yyyymmdd,
    Mmddyy,
    Ddmmyy,
    Yymmdd,
    MonthName,
    MonthAbbr,
}

impl DatePart {
    /// Every part, in the order they are extracted
    pub const ALL: [DatePart; 14] = [
        DatePart::Yyyy,
        DatePart::Yy,
        DatePart::Mm,
        DatePart::M,
        DatePart::Dd,
        DatePart::D,
        DatePart::Mmdd,
        DatePart::Ddmm,
        DatePart::Yyyymmdd,
        DatePart::Mmddyy,
        DatePart::Ddmmyy,
        DatePart::Yymmdd,
        DatePart::MonthName,
        DatePart::MonthAbbr,
    ];

    /// Part name as used in logs (e.g. "mmdd")
    pub fn key(&self) -> &'static str {
        match self {
            DatePart::Yyyy => "yyyy",
            DatePart::Yy => "yy",
            DatePart::Mm => "mm",
            DatePart::M => "m",
            DatePart::Dd => "dd",
            DatePart::D => "d",
            DatePart::Mmdd => "mmdd",
            DatePart::Ddmm => "ddmm",
            DatePart::Yyyymmdd => "yyyymmdd",
            DatePart::Mmddyy => "mmddyy",
            DatePart::Ddmmyy => "ddmmyy",
            DatePart::Yymmdd => "yymmdd",
            DatePart::MonthName => "month_name",
            DatePart::MonthAbbr => "month_abbr",
        }
    }

    fn render(&self, date: &NaiveDate) -> String {
        let fmt = match self {
            DatePart::Yyyy => "%Y",
            DatePart::Yy => "%y",
            DatePart::Mm => "%m",
            DatePart::M => return date.month().to_string(),
            DatePart::Dd => "%d",
            DatePart::D => return date.day().to_string(),
            DatePart::Mmdd => "%m%d",
            DatePart::Ddmm => "%d%m",
            DatePart::Yyyymmdd => "%Y%m%d",
            DatePart::Mmddyy => "%m%d%y",
            DatePart::Ddmmyy => "%d%m%y",
            DatePart::Yymmdd => "%y%m%d",
            DatePart::MonthName => "%B",
            DatePart::MonthAbbr => "%b",
        };
        date.format(fmt).to_string()
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Matchers for the formats without separators. chrono reads `%m` and `%d`
/// greedily, so "1990514" would fail on month 51. These patterns let month
/// and day shrink to one digit when two do not fit, preferring two.
static COMPACT_FORMATS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    DATE_FORMATS
        .iter()
        .filter(|fmt| !fmt.contains(['-', '/']))
        .map(|fmt| {
            let pattern = format!("^{}$", compact_pattern(fmt));
            let regex = Regex::new(&pattern).expect("compact date pattern is valid");
            (*fmt, regex)
        })
        .collect()
});

fn compact_pattern(fmt: &str) -> String {
    fmt.replace("%Y", "(?P<Y>[0-9]{4})")
        .replace("%y", "(?P<y>[0-9]{2})")
        .replace("%m", "(?P<m>1[0-2]|0[1-9]|[1-9])")
        .replace("%d", "(?P<d>3[01]|[12][0-9]|0[1-9]|[1-9])")
}

/// The first field split that matches decides; an impossible date such as
/// February 30 fails the format rather than trying another split.
fn parse_compact(input: &str, regex: &Regex) -> Option<NaiveDate> {
    let caps = regex.captures(input)?;
    let field = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = match (caps.name("Y"), caps.name("y")) {
        (Some(y), _) => y.as_str().parse::<i32>().ok()?,
        (None, Some(y)) => {
            let short = y.as_str().parse::<i32>().ok()?;
            if short < 69 { 2000 + short } else { 1900 + short }
        }
        (None, None) => return None,
    };
    NaiveDate::from_ymd_opt(year, field("m")?, field("d")?)
}

/// Parse with one format. A `%Y` field must be written with four digits,
/// otherwise "12/25/85" would be read as the year 85 instead of falling
/// through to the two-digit-year formats.
fn parse_with_format(input: &str, fmt: &str) -> Option<NaiveDate> {
    if let Some((_, regex)) = COMPACT_FORMATS.iter().find(|(compact, _)| *compact == fmt) {
        return parse_compact(input, regex);
    }

    let date = NaiveDate::parse_from_str(input, fmt).ok()?;
    if fmt.contains("%Y") && !input.contains(&format!("{:04}", date.year())) {
        return None;
    }
    Some(date)
}

/// Date fragments keyed by part name. Empty when no usable date was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    parts: BTreeMap<DatePart, String>,
}

impl DateParts {
    /// Parse a date string against [`DATE_FORMATS`]
    pub fn parse(input: &str) -> Result<Self> {
        let date = DATE_FORMATS
            .iter()
            .find_map(|fmt| parse_with_format(input, fmt))
            .ok_or_else(|| PassForgeError::InvalidDate(input.to_string()))?;

        Ok(Self::from_date(&date))
    }

    /// Parse a date, logging and returning an empty mapping on failure
    pub fn parse_or_empty(input: &str) -> Self {
        match Self::parse(input) {
            Ok(parts) => {
                info!(
                    "Parsed birth date: {}. Extracted parts: {:?}",
                    input,
                    parts.values().collect::<Vec<_>>()
                );
                parts
            }
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }

    /// Decompose an already-parsed date
    pub fn from_date(date: &NaiveDate) -> Self {
        let parts = DatePart::ALL
            .iter()
            .map(|part| (*part, part.render(date)))
            .collect();
        Self { parts }
    }

    pub fn get(&self, part: DatePart) -> Option<&str> {
        self.parts.get(&part).map(String::as_str)
    }

    /// Fragment values, possibly with repeats (e.g. "05" for both mm and dd)
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.parts.values().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }
}
