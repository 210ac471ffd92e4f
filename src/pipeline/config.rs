//! Pipeline configuration

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::filter::LengthFilter;
use crate::error::{PassForgeError, Result};
use crate::{DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};

/// Leet substitution level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeetLevel {
    /// No substitution
    #[default]
    None,
    /// One substitute per letter
    Simple,
    /// Every combination of substitutes
    Full,
}

impl LeetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeetLevel::None => "none",
            LeetLevel::Simple => "simple",
            LeetLevel::Full => "full",
        }
    }
}

impl fmt::Display for LeetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeetLevel {
    type Err = PassForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(LeetLevel::None),
            "simple" => Ok(LeetLevel::Simple),
            "full" => Ok(LeetLevel::Full),
            other => Err(PassForgeError::InvalidConfig(format!(
                "unknown leet level '{}' (expected none, simple or full)",
                other
            ))),
        }
    }
}

/// Settings for one generation run
///
/// Every field has a default, so a JSON config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Case variations (default: on)
    pub case: bool,
    /// Leet substitution level (default: none)
    pub leet: LeetLevel,
    /// Reversed words (default: off)
    pub reverse: bool,
    /// Number affixes (default: on)
    pub numbers: bool,
    /// Symbol affixes (default: on)
    pub symbols: bool,
    /// Birth date fragments (default: on)
    pub dates: bool,
    /// Year window affixes (default: on)
    pub years: bool,
    /// Base word and date combinations (default: on)
    pub combinations: bool,
    /// Single symbol/number insertions (default: on)
    pub insertions: bool,
    /// Word/number/symbol patterns (default: on)
    pub patterns: bool,
    /// Shortest candidate kept, inclusive (default: 6)
    pub min_len: Option<usize>,
    /// Longest candidate kept, inclusive (default: 16)
    pub max_len: Option<usize>,
    /// Abort once the accumulation would exceed this many candidates
    /// (default: 20 million, `None` for no limit)
    pub max_candidates: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            case: true,
            leet: LeetLevel::None,
            reverse: false,
            numbers: true,
            symbols: true,
            dates: true,
            years: true,
            combinations: true,
            insertions: true,
            patterns: true,
            min_len: Some(DEFAULT_MIN_LEN),
            max_len: Some(DEFAULT_MAX_LEN),
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
        }
    }
}

impl PipelineConfig {
    /// Load a (possibly partial) configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Reject settings that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_len, self.max_len) {
            if min > max {
                return Err(PassForgeError::InvalidConfig(format!(
                    "min_len ({}) is greater than max_len ({})",
                    min, max
                )));
            }
        }
        if self.max_candidates == Some(0) {
            return Err(PassForgeError::InvalidConfig(
                "max_candidates must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the affix stage runs on its own trigger. Years are handled
    /// separately, see [`crate::mutators::AffixMutator`].
    pub fn affix_stage_triggered(&self) -> bool {
        self.numbers || self.symbols || self.dates
    }

    pub fn length_filter(&self) -> LengthFilter {
        LengthFilter::new(self.min_len, self.max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert!(config.case);
        assert_eq!(config.leet, LeetLevel::None);
        assert!(!config.reverse);
        assert!(config.combinations);
        assert_eq!(config.min_len, Some(6));
        assert_eq!(config.max_len, Some(16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_leet_level_from_str() {
        assert_eq!("none".parse::<LeetLevel>().unwrap(), LeetLevel::None);
        assert_eq!("Simple".parse::<LeetLevel>().unwrap(), LeetLevel::Simple);
        assert_eq!("FULL".parse::<LeetLevel>().unwrap(), LeetLevel::Full);
        assert!("extreme".parse::<LeetLevel>().is_err());
        assert_eq!(LeetLevel::Full.to_string(), "full");
    }

    #[test]
    fn test_partial_json() {
        let config = PipelineConfig::from_json(r#"{"leet": "full", "reverse": true, "max_len": null}"#).unwrap();
        assert_eq!(config.leet, LeetLevel::Full);
        assert!(config.reverse);
        assert_eq!(config.max_len, None);
        // untouched keys keep their defaults
        assert_eq!(config.min_len, Some(6));
        assert!(config.patterns);
    }

    #[test]
    fn test_bad_json() {
        let result = PipelineConfig::from_json(r#"{"leet": "extreme"}"#);
        assert!(matches!(result, Err(PassForgeError::ConfigError(_))));
    }

    #[test]
    fn test_validate() {
        let config = PipelineConfig {
            min_len: Some(10),
            max_len: Some(8),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PassForgeError::InvalidConfig(_))));

        let config = PipelineConfig {
            min_len: Some(10),
            max_len: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = PipelineConfig {
            max_candidates: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_affix_trigger() {
        let mut config = PipelineConfig {
            numbers: false,
            symbols: false,
            ..Default::default()
        };
        assert!(config.affix_stage_triggered());
        config.dates = false;
        assert!(!config.affix_stage_triggered());
    }
}
