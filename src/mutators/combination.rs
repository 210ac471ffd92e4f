//! Pairwise combinations of base words, dates and years
//!
//! Unlike the other stages this one works from the original base words, not
//! the accumulation.

use std::collections::BTreeSet;

use tracing::debug;

use super::text::capitalize;
use super::{CandidateSet, Mutator, StageInput};
use crate::dates::DateParts;
use crate::pipeline::{PipelineConfig, Stage};
use crate::pools::LexicalPools;

/// Joins ordered pairs of base words and pairs each base word with dates
/// and years
#[derive(Debug, Clone)]
pub struct CombinationMutator {
    affixes: BTreeSet<String>,
    has_date_parts: bool,
}

impl CombinationMutator {
    pub fn new(config: &PipelineConfig, pools: &LexicalPools, dates: &DateParts) -> Self {
        let mut affixes = BTreeSet::new();
        if config.dates {
            affixes.extend(dates.values().map(str::to_string));
        }
        if config.years {
            affixes.extend(pools.years().iter().cloned());
        }

        Self {
            affixes,
            has_date_parts: !dates.is_empty(),
        }
    }

    /// Needs two words to pair, or one word and a parsed date
    pub fn can_run(&self, words: &CandidateSet) -> bool {
        !words.is_empty() && (words.len() >= 2 || self.has_date_parts)
    }
}

impl Mutator for CombinationMutator {
    fn stage(&self) -> Stage {
        Stage::Combination
    }

    fn input(&self) -> StageInput {
        StageInput::BaseWords
    }

    fn apply(&self, words: &CandidateSet) -> CandidateSet {
        let mut variations = CandidateSet::new();
        if !self.can_run(words) {
            return variations;
        }

        for first in words {
            for second in words.iter().filter(|w| *w != first) {
                variations.insert(format!("{first}{second}"));
                variations.insert(format!("{}{}", capitalize(first), capitalize(second)));
                variations.insert(format!("{first}_{second}"));
                variations.insert(format!("{first}-{second}"));
            }
        }

        for word in words {
            let capitalized = capitalize(word);
            for affix in &self.affixes {
                variations.insert(format!("{word}{affix}"));
                variations.insert(format!("{affix}{word}"));
                variations.insert(format!("{capitalized}{affix}"));
                variations.insert(format!("{affix}{capitalized}"));
                variations.insert(format!("{word}_{affix}"));
                variations.insert(format!("{affix}_{word}"));
            }
        }
        debug!("Combination variations generated: {}", variations.len());
        variations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn no_years() -> PipelineConfig {
        PipelineConfig {
            years: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_pairs_in_both_orders() {
        let pools = LexicalPools::for_year(2024);
        let mutator = CombinationMutator::new(&no_years(), &pools, &DateParts::default());
        let out = mutator.apply(&set(&["amy", "Bob"]));
        assert_eq!(
            out,
            set(&[
                "amyBob", "AmyBob", "amy_Bob", "amy-Bob",
                "Bobamy", "BobAmy", "Bob_amy", "Bob-amy",
            ])
        );
    }

    #[test]
    fn test_single_word_without_dates_does_nothing() {
        let pools = LexicalPools::for_year(2024);
        let mutator = CombinationMutator::new(&PipelineConfig::default(), &pools, &DateParts::default());
        assert!(mutator.apply(&set(&["amy"])).is_empty());
    }

    #[test]
    fn test_single_word_with_dates() {
        let pools = LexicalPools::for_year(2024);
        let dates = DateParts::parse("1990-05-14").unwrap();
        let mutator = CombinationMutator::new(&no_years(), &pools, &dates);
        let out = mutator.apply(&set(&["max"]));
        for expected in ["max1990", "1990max", "Max1990", "1990Max", "max_1990", "1990_max", "maxMay", "May_max"] {
            assert!(out.contains(expected), "missing {}", expected);
        }
        assert!(!out.contains("max2024"));
    }

    #[test]
    fn test_years_use_absolute_form_only() {
        let pools = LexicalPools::for_year(2024);
        let mutator = CombinationMutator::new(&PipelineConfig::default(), &pools, &DateParts::default());
        let out = mutator.apply(&set(&["amy", "bob"]));
        assert!(out.contains("amy2024"));
        assert!(out.contains("2019_bob"));
        assert!(!out.contains("amy24"));
    }

    #[test]
    fn test_date_parts_enable_run_even_when_dates_disabled() {
        // With dates disabled the parsed date still satisfies the run
        // condition; the single word is then paired with years only.
        let pools = LexicalPools::for_year(2024);
        let dates = DateParts::parse("1990-05-14").unwrap();
        let config = PipelineConfig {
            dates: false,
            ..Default::default()
        };
        let mutator = CombinationMutator::new(&config, &pools, &dates);
        let out = mutator.apply(&set(&["max"]));
        assert!(out.contains("max2024"));
        assert!(!out.contains("max1990"));
    }

    #[test]
    fn test_input_is_base_words() {
        let pools = LexicalPools::for_year(2024);
        let mutator = CombinationMutator::new(&PipelineConfig::default(), &pools, &DateParts::default());
        assert_eq!(mutator.input(), StageInput::BaseWords);
    }
}
