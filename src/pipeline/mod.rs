//! Generation pipeline
//!
//! Runs the enabled mutator stages in a fixed order over a growing
//! accumulation, then applies the length filter.

mod config;
mod filter;
mod generator;

pub use config::{LeetLevel, PipelineConfig};
pub use filter::LengthFilter;
pub use generator::Generator;

use std::fmt;

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Case,
    Leet,
    Reverse,
    Insertion,
    Affix,
    Pattern,
    Combination,
}

impl Stage {
    /// All stages, in the order the pipeline runs them
    pub const ORDER: [Stage; 7] = [
        Stage::Case,
        Stage::Leet,
        Stage::Reverse,
        Stage::Insertion,
        Stage::Affix,
        Stage::Pattern,
        Stage::Combination,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Case => "Case",
            Stage::Leet => "Leet",
            Stage::Reverse => "Reverse",
            Stage::Insertion => "Insertions",
            Stage::Affix => "Affixes",
            Stage::Pattern => "Patterns",
            Stage::Combination => "Combinations",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
