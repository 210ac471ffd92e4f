//! Single-token insertions at either end of a word

use tracing::debug;

use super::{CandidateSet, Mutator};
use crate::pipeline::Stage;
use crate::pools::LexicalPools;

/// Prepends and appends one common symbol or small number
#[derive(Debug, Clone)]
pub struct InsertionMutator {
    tokens: Vec<&'static str>,
}

impl InsertionMutator {
    pub fn new(pools: &LexicalPools) -> Self {
        let tokens = pools
            .symbols_common()
            .iter()
            .chain(pools.numbers())
            .copied()
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }
}

impl Mutator for InsertionMutator {
    fn stage(&self) -> Stage {
        Stage::Insertion
    }

    /// Each word plus one prefixed and one suffixed form per token
    fn estimate(&self, words: &CandidateSet) -> Option<usize> {
        let per_word = self.tokens.len().saturating_mul(2).saturating_add(1);
        Some(words.len().saturating_mul(per_word))
    }

    fn apply(&self, words: &CandidateSet) -> CandidateSet {
        let mut variations = CandidateSet::with_capacity(words.len() * (self.tokens.len() * 2 + 1));
        variations.extend(words.iter().cloned());
        for word in words {
            for token in &self.tokens {
                variations.insert(format!("{}{}", token, word));
                variations.insert(format!("{}{}", word, token));
            }
        }
        debug!("Insertion variations generated: {}", variations.len());
        variations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tokens() {
        let mutator = InsertionMutator::new(&LexicalPools::for_year(2024));
        assert_eq!(mutator.tokens().len(), 15);
        assert!(mutator.tokens().contains(&"?"));
        assert!(mutator.tokens().contains(&"007"));
        // full symbol set is reserved for affixing
        assert!(!mutator.tokens().contains(&"^"));
    }

    #[test]
    fn test_insertion() {
        let mutator = InsertionMutator::new(&LexicalPools::for_year(2024));
        let out = mutator.apply(&set(&["max"]));
        assert!(out.contains("max"));
        assert!(out.contains("!max"));
        assert!(out.contains("max!"));
        assert!(out.contains("007max"));
        assert!(out.contains("max1234"));
        assert!(!out.contains("!max!"));
        assert_eq!(out.len(), 1 + 15 * 2);
    }

    #[test]
    fn test_estimate_bounds_output() {
        let mutator = InsertionMutator::new(&LexicalPools::for_year(2024));
        let words = set(&["max", "amy"]);
        let estimate = mutator.estimate(&words).unwrap();
        assert_eq!(estimate, 2 * 31);
        assert!(mutator.apply(&words).len() <= estimate);
    }
}
