//! Structured Word/Number/Symbol patterns

use std::collections::BTreeSet;

use tracing::debug;

use super::{CandidateSet, Mutator};
use crate::dates::DateParts;
use crate::pipeline::{PipelineConfig, Stage};
use crate::pools::LexicalPools;

/// Assembles words with one number and/or one common symbol.
///
/// Templates: `WN WS NW SW WNS WSN SWN NWS`. Only the common symbol set is
/// used since every number is paired with every symbol.
#[derive(Debug, Clone)]
pub struct PatternMutator {
    numbers: BTreeSet<String>,
    symbols: &'static [&'static str],
}

impl PatternMutator {
    pub fn new(config: &PipelineConfig, pools: &LexicalPools, dates: &DateParts) -> Self {
        let mut numbers: BTreeSet<String> = pools.numbers().iter().map(|n| n.to_string()).collect();
        if config.dates {
            numbers.extend(dates.values().map(str::to_string));
        }
        if config.years {
            numbers.extend(pools.years().iter().cloned());
            numbers.extend(pools.years_short().iter().cloned());
        }

        Self {
            numbers,
            symbols: pools.symbols_common(),
        }
    }

    pub fn numbers(&self) -> impl Iterator<Item = &str> {
        self.numbers.iter().map(String::as_str)
    }
}

impl Mutator for PatternMutator {
    fn stage(&self) -> Stage {
        Stage::Pattern
    }

    /// Two forms per number and per symbol, four per number/symbol pair
    fn estimate(&self, words: &CandidateSet) -> Option<usize> {
        let numbers = self.numbers.len();
        let symbols = self.symbols.len();
        let per_word = numbers
            .saturating_add(symbols)
            .saturating_mul(2)
            .saturating_add(numbers.saturating_mul(symbols).saturating_mul(4));
        Some(words.len().saturating_mul(per_word))
    }

    fn apply(&self, words: &CandidateSet) -> CandidateSet {
        let mut variations = CandidateSet::new();
        for word in words {
            for num in &self.numbers {
                variations.insert(format!("{word}{num}"));
                variations.insert(format!("{num}{word}"));
            }
            for sym in self.symbols {
                variations.insert(format!("{word}{sym}"));
                variations.insert(format!("{sym}{word}"));
            }
            for num in &self.numbers {
                for sym in self.symbols {
                    variations.insert(format!("{word}{num}{sym}"));
                    variations.insert(format!("{word}{sym}{num}"));
                    variations.insert(format!("{sym}{word}{num}"));
                    variations.insert(format!("{num}{word}{sym}"));
                }
            }
        }
        debug!("Pattern variations generated: {}", variations.len());
        variations
    }
}
