//! Reversed words

use tracing::debug;

use super::text::{capitalize, char_len};
use super::{CandidateSet, Mutator};
use crate::pipeline::Stage;

/// Adds each word reversed, plain and capitalized
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseMutator;

impl Mutator for ReverseMutator {
    fn stage(&self) -> Stage {
        Stage::Reverse
    }

    fn apply(&self, words: &CandidateSet) -> CandidateSet {
        let mut variations = words.clone();
        for word in words.iter().filter(|w| char_len(w) > 1) {
            let reversed: String = word.chars().rev().collect();
            variations.insert(capitalize(&reversed));
            variations.insert(reversed);
        }
        debug!("Reverse variations generated: {}", variations.len());
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
    fn test_reverse() {
        let out = ReverseMutator.apply(&set(&["Max"]));
        assert_eq!(out, set(&["Max", "xaM", "Xam"]));
    }

    #[test]
    fn test_reverse_skips_short_words() {
        let out = ReverseMutator.apply(&set(&["a", ""]));
        assert_eq!(out, set(&["a", ""]));
    }

    #[test]
    fn test_reverse_palindrome() {
        let out = ReverseMutator.apply(&set(&["anna"]));
        assert_eq!(out, set(&["anna", "Anna"]));
    }

    #[test]
    fn test_reverse_multibyte() {
        let out = ReverseMutator.apply(&set(&["añb"]));
        assert!(out.contains("bña"));
    }
}
