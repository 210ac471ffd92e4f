//! Case variations

use tracing::debug;

use super::text::{capitalize, swap_case};
use super::{CandidateSet, Mutator};
use crate::pipeline::Stage;

/// Emits original, lower, upper, capitalized and swapped-case forms
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseMutator;

impl Mutator for CaseMutator {
    fn stage(&self) -> Stage {
        Stage::Case
    }

    fn apply(&self, words: &CandidateSet) -> CandidateSet {
        let mut variations = CandidateSet::with_capacity(words.len() * 5);
        for word in words {
            variations.insert(word.clone());
            variations.insert(word.to_lowercase());
            variations.insert(word.to_uppercase());
            variations.insert(capitalize(word));
            variations.insert(swap_case(word));
        }
        debug!("Case variations generated: {}", variations.len());
        variations
    }
}
