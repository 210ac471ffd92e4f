//! Prefix and suffix affixing
//!
//! The affix pool is built once per run from numbers, the full symbol set,
//! birth date fragments and the year window. The stage runs when any of
//! numbers, symbols or dates is enabled; in that case numbers and the full
//! symbol set are always part of the pool. Years follow their own flag and
//! still get affixed when the other three are all disabled.

use std::collections::BTreeSet;

use tracing::debug;

use super::{CandidateSet, Mutator};
use crate::dates::DateParts;
use crate::pipeline::{PipelineConfig, Stage};
use crate::pools::LexicalPools;

/// Attaches every affix to both ends of every word
#[derive(Debug, Clone)]
pub struct AffixMutator {
    affixes: BTreeSet<String>,
    prefixes: Vec<&'static str>,
}

impl AffixMutator {
    /// Build the mutator for a run, or `None` when nothing would be affixed
    pub fn new(config: &PipelineConfig, pools: &LexicalPools, dates: &DateParts) -> Option<Self> {
        let mut affixes = BTreeSet::new();
        let mut prefixes = Vec::new();

        if config.affix_stage_triggered() {
            affixes.extend(pools.numbers().iter().map(|n| n.to_string()));
            affixes.extend(pools.symbols_all().iter().map(|s| s.to_string()));
            if config.dates {
                affixes.extend(dates.values().map(str::to_string));
            }
            prefixes.extend_from_slice(pools.prefixes());
        }

        if config.years {
            affixes.extend(pools.years().iter().cloned());
            affixes.extend(pools.years_short().iter().cloned());
        }

        if affixes.is_empty() && prefixes.is_empty() {
            return None;
        }
        Some(Self { affixes, prefixes })
    }

    pub fn affixes(&self) -> impl Iterator<Item = &str> {
        self.affixes.iter().map(String::as_str)
    }

    pub fn prefixes(&self) -> &[&'static str] {
        &self.prefixes
    }
}

impl Mutator for AffixMutator {
    fn stage(&self) -> Stage {
        Stage::Affix
    }

    /// Each word, both ends per affix, and one form per prefix
    fn estimate(&self, words: &CandidateSet) -> Option<usize> {
        let per_word = self
            .affixes
            .len()
            .saturating_mul(2)
            .saturating_add(self.prefixes.len())
            .saturating_add(1);
        Some(words.len().saturating_mul(per_word))
    }

    fn apply(&self, words: &CandidateSet) -> CandidateSet {
        let mut variations = words.clone();
        for word in words {
            for affix in &self.affixes {
                variations.insert(format!("{}{}", word, affix));
                variations.insert(format!("{}{}", affix, word));
            }
            for prefix in &self.prefixes {
                variations.insert(format!("{}{}", prefix, word));
            }
        }
        debug!("Affix variations generated: {}", variations.len());
        variations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn pools() -> LexicalPools {
        LexicalPools::for_year(2024)
    }

    #[test]
    fn test_default_pool() {
        let dates = DateParts::parse("1990-05-14").unwrap();
        let mutator = AffixMutator::new(&PipelineConfig::default(), &pools(), &dates).unwrap();
        let affixes: Vec<&str> = mutator.affixes().collect();
        for expected in ["007", "^", "=", "1990", "0514", "May", "2024", "24"] {
            assert!(affixes.contains(&expected), "missing {}", expected);
        }
        assert_eq!(mutator.prefixes().len(), 8);
    }

    #[test]
    fn test_apply() {
        let mutator =
            AffixMutator::new(&PipelineConfig::default(), &pools(), &DateParts::default()).unwrap();
        let out = mutator.apply(&set(&["max"]));
        for expected in ["max", "max123", "123max", "max&", "=max", "max2026", "19max", "admin_max", "pass_max"] {
            assert!(out.contains(expected), "missing {}", expected);
        }
        // prefixes are never used as suffixes
        assert!(!out.contains("maxadmin_"));
    }

    #[test]
    fn test_estimate_bounds_output() {
        let mutator =
            AffixMutator::new(&PipelineConfig::default(), &pools(), &DateParts::default()).unwrap();
        let words = set(&["max", "amy"]);
        // 8 numbers, 14 symbols, 16 years, 8 prefixes
        assert_eq!(mutator.estimate(&words), Some(2 * (2 * 38 + 8 + 1)));
        assert!(mutator.apply(&words).len() <= 2 * 85);
    }

    #[test]
    fn test_dates_flag_excludes_date_parts() {
        let dates = DateParts::parse("1990-05-14").unwrap();
        let config = PipelineConfig {
            dates: false,
            ..Default::default()
        };
        let mutator = AffixMutator::new(&config, &pools(), &dates).unwrap();
        assert!(!mutator.affixes().any(|a| a == "0514"));
    }

    #[test]
    fn test_numbers_flag_alone_does_not_shrink_pool() {
        let config = PipelineConfig {
            numbers: false,
            ..Default::default()
        };
        let mutator = AffixMutator::new(&config, &pools(), &DateParts::default()).unwrap();
        assert!(mutator.affixes().any(|a| a == "123"));
    }

    #[test]
    fn test_years_only() {
        let config = PipelineConfig {
            numbers: false,
            symbols: false,
            dates: false,
            ..Default::default()
        };
        let mutator = AffixMutator::new(&config, &pools(), &DateParts::default()).unwrap();
        let affixes: Vec<&str> = mutator.affixes().collect();
        assert_eq!(affixes.len(), 16);
        assert!(affixes.contains(&"2019"));
        assert!(affixes.contains(&"26"));
        assert!(mutator.prefixes().is_empty());

        let out = mutator.apply(&set(&["max"]));
        assert!(out.contains("max2024"));
        assert!(!out.contains("max!"));
        assert!(!out.contains("admin_max"));
    }

    #[test]
    fn test_everything_disabled() {
        let config = PipelineConfig {
            numbers: false,
            symbols: false,
            dates: false,
            years: false,
            ..Default::default()
        };
        assert!(AffixMutator::new(&config, &pools(), &DateParts::default()).is_none());
    }
}
