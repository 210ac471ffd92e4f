//! Mutator stages
//!
//! Each stage expands a candidate set by one transformation rule. Stages are
//! pure: they read their input set and return a freshly built result set
//! which the pipeline unions into its accumulation.

mod affix;
mod case;
mod combination;
mod insertion;
mod leet;
mod pattern;
mod reverse;
pub mod text;

pub use affix::AffixMutator;
pub use case::CaseMutator;
pub use combination::CombinationMutator;
pub use insertion::InsertionMutator;
pub use leet::{for_each_combination, LeetMutator};
pub use pattern::PatternMutator;
pub use reverse::ReverseMutator;

use std::collections::HashSet;

use crate::pipeline::Stage;

/// Working set of candidate passwords
pub type CandidateSet = HashSet<String>;

/// Which set a stage consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageInput {
    /// Everything produced so far
    Accumulation,
    /// The original base words only
    BaseWords,
}

/// One transformation rule of the pipeline
pub trait Mutator {
    /// Stage this mutator implements
    fn stage(&self) -> Stage;

    /// Which set the pipeline should feed to [`Mutator::apply`]
    fn input(&self) -> StageInput {
        StageInput::Accumulation
    }

    /// Upper bound on the size of `apply`'s result, computed without
    /// building it. `None` when the stage is cheap enough to check after it
    /// runs.
    fn estimate(&self, _words: &CandidateSet) -> Option<usize> {
        None
    }

    /// Expand `words`. Never fails; a word that cannot be transformed is
    /// skipped.
    fn apply(&self, words: &CandidateSet) -> CandidateSet;
}
