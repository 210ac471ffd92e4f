//! Leet speak substitution
//!
//! Simple mode rewrites every mappable letter with its single substitute.
//! Full mode enumerates every combination of substitutes across all
//! mappable positions, which is where wordlists explode in size.

use tracing::debug;

use super::text::capitalize;
use super::{CandidateSet, Mutator};
use crate::pipeline::{LeetLevel, Stage};
use crate::pools::LexicalPools;

/// Leet substitution at a fixed level
#[derive(Debug, Clone, Copy)]
pub struct LeetMutator<'a> {
    level: LeetLevel,
    pools: &'a LexicalPools,
}

impl<'a> LeetMutator<'a> {
    pub fn new(level: LeetLevel, pools: &'a LexicalPools) -> Self {
        Self { level, pools }
    }

    pub fn level(&self) -> LeetLevel {
        self.level
    }

    fn apply_simple(&self, words: &CandidateSet, variations: &mut CandidateSet) {
        for word in words {
            let lower = word.to_lowercase();
            let leet: String = lower
                .chars()
                .map(|c| self.pools.leet_simple(c).unwrap_or(c))
                .collect();
            if leet != lower {
                variations.insert(capitalize(&leet));
                variations.insert(leet);
            }
        }
    }

    fn apply_full(&self, words: &CandidateSet, variations: &mut CandidateSet) {
        for word in words {
            let chars: Vec<char> = word.chars().collect();
            let slots = self.substitution_slots(&chars);
            if slots.is_empty() {
                continue;
            }

            let radices: Vec<usize> = slots.iter().map(|(_, options)| options.len()).collect();
            let mut buffer = chars.clone();
            for_each_combination(&radices, |picks| {
                for ((position, options), pick) in slots.iter().zip(picks) {
                    buffer[*position] = options[*pick];
                }
                let leet: String = buffer.iter().collect();
                variations.insert(capitalize(&leet));
                variations.insert(leet);
            });
        }
    }

    /// Positions that have at least one substitute, with their options
    fn substitution_slots(&self, chars: &[char]) -> Vec<(usize, &'static [char])> {
        chars
            .iter()
            .enumerate()
            .filter_map(|(i, c)| {
                self.pools
                    .leet_full(c.to_ascii_lowercase())
                    .map(|options| (i, options))
            })
            .collect()
    }
}

impl Mutator for LeetMutator<'_> {
    fn stage(&self) -> Stage {
        Stage::Leet
    }

    /// Only full mode is worth estimating. Each word contributes itself
    /// plus two strings per combination.
    fn estimate(&self, words: &CandidateSet) -> Option<usize> {
        if self.level != LeetLevel::Full {
            return None;
        }
        let total = words.iter().fold(0usize, |acc, word| {
            let chars: Vec<char> = word.chars().collect();
            let product = self
                .substitution_slots(&chars)
                .iter()
                .fold(1usize, |p, (_, options)| p.saturating_mul(options.len()));
            acc.saturating_add(product.saturating_mul(2).saturating_add(1))
        });
        Some(total)
    }

    fn apply(&self, words: &CandidateSet) -> CandidateSet {
        let mut variations = words.clone();
        match self.level {
            LeetLevel::None => return variations,
            LeetLevel::Simple => {
                debug!("Applying simple leet transformations...");
                self.apply_simple(words, &mut variations);
            }
            LeetLevel::Full => {
                debug!("Applying full leet transformations...");
                self.apply_full(words, &mut variations);
            }
        }
        debug!("Leet variations generated: {}", variations.len());
        variations
    }
}

/// Visit every element of the Cartesian product of `0..radices[i]`.
///
/// The last position varies fastest. Nothing is visited if any radix is
/// zero; a single empty combination is visited if `radices` is empty.
pub fn for_each_combination<F>(radices: &[usize], mut visit: F)
where
    F: FnMut(&[usize]),
{
    if radices.contains(&0) {
        return;
    }

    let mut picks = vec![0usize; radices.len()];
    loop {
        visit(&picks);

        let mut position = picks.len();
        loop {
            if position == 0 {
                return;
            }
            position -= 1;
            picks[position] += 1;
            if picks[position] < radices[position] {
                break;
            }
            picks[position] = 0;
        }
    }
}
