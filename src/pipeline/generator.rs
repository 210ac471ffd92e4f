//! Pipeline orchestration

use tracing::{debug, debug_span, info, warn};

use super::{LeetLevel, PipelineConfig, Stage};
use crate::dates::DateParts;
use crate::error::{PassForgeError, Result};
use crate::input::BaseWords;
use crate::mutators::{
    AffixMutator, CandidateSet, CaseMutator, CombinationMutator, InsertionMutator, LeetMutator,
    Mutator, PatternMutator, ReverseMutator, StageInput,
};
use crate::output;
use crate::pools::LexicalPools;

/// Runs the mutator stages for one configuration
///
/// Stages run in [`Stage::ORDER`]. Each stage except combinations consumes
/// the whole accumulation built so far, so later stages see the output of
/// every earlier one. Combinations always consume the base words.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    config: PipelineConfig,
    pools: &'a LexicalPools,
}

impl<'a> Generator<'a> {
    /// Validate the configuration and create a generator
    pub fn new(config: PipelineConfig, pools: &'a LexicalPools) -> Result<Self> {
        config.validate()?;

        info!(
            "Transformations: Case={}, Leet={}, Reverse={}, Numbers={}, Symbols={}, Dates={}, Years={}, Combinations={}, Insertions={}, Patterns={}",
            config.case,
            config.leet,
            config.reverse,
            config.numbers,
            config.symbols,
            config.dates,
            config.years,
            config.combinations,
            config.insertions,
            config.patterns
        );
        info!(
            "Filters: MinLen={:?}, MaxLen={:?}",
            config.min_len, config.max_len
        );

        Ok(Self { config, pools })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn is_enabled(&self, stage: Stage) -> bool {
        let config = &self.config;
        match stage {
            Stage::Case => config.case,
            Stage::Leet => config.leet != LeetLevel::None,
            Stage::Reverse => config.reverse,
            Stage::Insertion => config.insertions,
            Stage::Affix => config.affix_stage_triggered() || config.years,
            Stage::Pattern => config.patterns,
            Stage::Combination => config.combinations,
        }
    }

    /// Stages that will run, in order
    pub fn enabled_stages(&self) -> Vec<Stage> {
        Stage::ORDER
            .into_iter()
            .filter(|stage| self.is_enabled(*stage))
            .collect()
    }

    fn mutator(&self, stage: Stage, dates: &DateParts) -> Option<Box<dyn Mutator + 'a>> {
        let config = &self.config;
        let pools = self.pools;
        let mutator: Box<dyn Mutator + 'a> = match stage {
            Stage::Case => Box::new(CaseMutator),
            Stage::Leet => Box::new(LeetMutator::new(config.leet, pools)),
            Stage::Reverse => Box::new(ReverseMutator),
            Stage::Insertion => Box::new(InsertionMutator::new(pools)),
            Stage::Affix => Box::new(AffixMutator::new(config, pools, dates)?),
            Stage::Pattern => Box::new(PatternMutator::new(config, pools, dates)),
            Stage::Combination => Box::new(CombinationMutator::new(config, pools, dates)),
        };
        Some(mutator)
    }

    /// Run every enabled stage and return the unfiltered accumulation
    pub fn run(&self, base: &BaseWords, dates: &DateParts) -> Result<CandidateSet> {
        let mut accumulation = base.as_set().clone();

        for stage in self.enabled_stages() {
            let Some(mutator) = self.mutator(stage, dates) else {
                continue;
            };
            let _span = debug_span!("stage", stage = %stage).entered();

            let input = match mutator.input() {
                StageInput::Accumulation => &accumulation,
                StageInput::BaseWords => base.as_set(),
            };
            // The merged accumulation can never exceed what it already
            // holds plus everything the stage may produce.
            if let (Some(limit), Some(estimate)) =
                (self.config.max_candidates, mutator.estimate(input))
            {
                let projected = accumulation.len().saturating_add(estimate);
                self.check_limit(stage, projected, limit)?;
            }

            let produced = mutator.apply(input);
            accumulation.extend(produced);
            debug!("Accumulation after {}: {}", stage, accumulation.len());

            if let Some(limit) = self.config.max_candidates {
                self.check_limit(stage, accumulation.len(), limit)?;
            }
        }

        Ok(accumulation)
    }

    fn check_limit(&self, stage: Stage, count: usize, limit: usize) -> Result<()> {
        if count > limit {
            return Err(PassForgeError::CandidateLimitExceeded {
                stage,
                count,
                limit,
            });
        }
        Ok(())
    }

    /// Run the pipeline, filter by length and return the sorted wordlist
    pub fn generate(&self, base: &BaseWords, dates: &DateParts) -> Result<Vec<String>> {
        if base.is_empty() {
            warn!("No base keywords loaded.");
            return Ok(Vec::new());
        }

        info!("Starting generation with {} base words.", base.len());
        let accumulation = self.run(base, dates)?;
        info!("Total words before filtering: {}", accumulation.len());

        let filtered = self.config.length_filter().apply(accumulation);
        Ok(output::sorted(filtered))
    }
}
