//! # PassForge
//!
//! Personalized password wordlist generator for authorized security testing.
//!
//! ## Features
//!
//! - Base words from names, usernames, keywords and keyword files
//! - Birth date decomposition (15 accepted numeric formats)
//! - Case, leet (simple or full Cartesian), reverse, insertion, affix,
//!   pattern and combination stages
//! - Inclusive length filtering and sorted, de-duplicated output
//!
//! ## Example
//!
//! ```
//! use passforge::{BaseWords, DateParts, Generator, LexicalPools, PersonalInfo, PipelineConfig};
//!
//! let info = PersonalInfo {
//!     first_name: Some("Max".to_string()),
//!     ..Default::default()
//! };
//! let base = BaseWords::from_info(&info);
//! let dates = DateParts::parse("1990-05-14").unwrap();
//!
//! // Patterns multiply every candidate by roughly a thousand; leave them out here
//! let config = PipelineConfig {
//!     patterns: false,
//!     ..Default::default()
//! };
//! let generator = Generator::new(config, LexicalPools::standard()).unwrap();
//! let wordlist = generator.generate(&base, &dates).unwrap();
//! assert!(wordlist.contains(&"Max1990".to_string()));
//! ```

pub mod dates;
pub mod error;
pub mod input;
pub mod mutators;
pub mod output;
pub mod pipeline;
pub mod pools;

// Re-export main types
pub use dates::{DatePart, DateParts};
pub use error::{PassForgeError, Result};
pub use input::{BaseWords, PersonalInfo};
pub use mutators::{CandidateSet, Mutator};
pub use output::OutputTarget;
pub use pipeline::{Generator, LeetLevel, LengthFilter, PipelineConfig, Stage};
pub use pools::LexicalPools;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default minimum candidate length
pub const DEFAULT_MIN_LEN: usize = 6;

/// Default maximum candidate length
pub const DEFAULT_MAX_LEN: usize = 16;

/// Default cap on the accumulation size
pub const DEFAULT_MAX_CANDIDATES: usize = 20_000_000;
