//! PassForge CLI - personalized password wordlist generator
//!
//! Collects the target's details from the command line, runs the
//! generation pipeline and writes the sorted wordlist to a file or stdout.
//! Use only against accounts you are authorized to test.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use passforge::{
    output, BaseWords, DateParts, Generator, LeetLevel, LexicalPools, OutputTarget, PersonalInfo,
    PipelineConfig, VERSION,
};

/// PassForge - Personalized Password List Generator. Use Responsibly!
#[derive(Parser, Debug)]
#[command(name = "passforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    // Target information
    /// Target's first name
    #[arg(long, help_heading = "Target Information")]
    first_name: Option<String>,

    /// Target's last name
    #[arg(long, help_heading = "Target Information")]
    last_name: Option<String>,

    /// Target's username
    #[arg(long, help_heading = "Target Information")]
    username: Option<String>,

    /// Target's nickname
    #[arg(long, help_heading = "Target Information")]
    nickname: Option<String>,

    /// Target's birth date (e.g. YYYY-MM-DD, MM/DD/YY, DDMMYYYY)
    #[arg(long, help_heading = "Target Information")]
    birth_date: Option<String>,

    /// Target's partner's name
    #[arg(long, help_heading = "Target Information")]
    partner_name: Option<String>,

    /// Target's pet's name
    #[arg(long, help_heading = "Target Information")]
    pet_name: Option<String>,

    /// Target's company name
    #[arg(long, help_heading = "Target Information")]
    company: Option<String>,

    /// Other relevant keyword (repeatable)
    #[arg(short = 'k', long = "keyword", action = ArgAction::Append, help_heading = "Target Information")]
    keywords: Vec<String>,

    /// File containing additional keywords (one per line, # for comments)
    #[arg(long, help_heading = "Target Information")]
    keyword_file: Option<PathBuf>,

    // Transformation options
    /// JSON file with pipeline settings; flags below override it
    #[arg(long, help_heading = "Transformation Options")]
    config: Option<PathBuf>,

    /// Disable case transformations
    #[arg(long, help_heading = "Transformation Options")]
    no_case: bool,

    /// Level of leet speak substitution [default: none]
    #[arg(long, value_parser = ["none", "simple", "full"], help_heading = "Transformation Options")]
    leet_level: Option<String>,

    /// Include reversed versions of words
    #[arg(long, help_heading = "Transformation Options")]
    reverse: bool,

    /// Disable adding number suffixes/prefixes
    #[arg(long, help_heading = "Transformation Options")]
    no_numbers: bool,

    /// Disable adding symbol suffixes/prefixes
    #[arg(long, help_heading = "Transformation Options")]
    no_symbols: bool,

    /// Disable adding birth date variations as suffixes/prefixes
    #[arg(long, help_heading = "Transformation Options")]
    no_dates: bool,

    /// Disable adding default year suffixes/prefixes
    #[arg(long, help_heading = "Transformation Options")]
    no_years: bool,

    /// Disable combining base words/dates
    #[arg(long, help_heading = "Transformation Options")]
    no_combinations: bool,

    /// Disable inserting chars at start/end
    #[arg(long, help_heading = "Transformation Options")]
    no_insertions: bool,

    /// Disable generating common patterns (Word+Num+Sym etc.)
    #[arg(long, help_heading = "Transformation Options")]
    no_patterns: bool,

    // Output options
    /// File to save the generated wordlist (default: print to stdout)
    #[arg(short, long, help_heading = "Output Options")]
    output_file: Option<PathBuf>,

    /// Minimum length of passwords to include [default: 6]
    #[arg(long, help_heading = "Output Options")]
    min_len: Option<usize>,

    /// Maximum length of passwords to include [default: 16]
    #[arg(long, help_heading = "Output Options")]
    max_len: Option<usize>,

    /// Abort when more candidates than this are generated, 0 for no limit
    /// [default: 20000000]
    #[arg(long, help_heading = "Output Options")]
    max_candidates: Option<usize>,

    // Logging options
    /// Enable verbose (debug) logging
    #[arg(short, long, conflicts_with = "quiet", help_heading = "Logging Options")]
    verbose: bool,

    /// Show warnings and errors only
    #[arg(short, long, help_heading = "Logging Options")]
    quiet: bool,

    /// File to write detailed logs to
    #[arg(long, help_heading = "Logging Options")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    fn personal_info(&self) -> PersonalInfo {
        PersonalInfo {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            nickname: self.nickname.clone(),
            partner_name: self.partner_name.clone(),
            pet_name: self.pet_name.clone(),
            company: self.company.clone(),
            keywords: self.keywords.clone(),
        }
    }

    /// Config file (or defaults) with the command line flags applied on top
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if self.no_case {
            config.case = false;
        }
        if let Some(level) = &self.leet_level {
            config.leet = level.parse::<LeetLevel>()?;
        }
        if self.reverse {
            config.reverse = true;
        }
        if self.no_numbers {
            config.numbers = false;
        }
        if self.no_symbols {
            config.symbols = false;
        }
        if self.no_dates {
            config.dates = false;
        }
        if self.no_years {
            config.years = false;
        }
        if self.no_combinations {
            config.combinations = false;
        }
        if self.no_insertions {
            config.insertions = false;
        }
        if self.no_patterns {
            config.patterns = false;
        }
        if self.min_len.is_some() {
            config.min_len = self.min_len;
        }
        if self.max_len.is_some() {
            config.max_len = self.max_len;
        }
        if let Some(limit) = self.max_candidates {
            config.max_candidates = (limit > 0).then_some(limit);
        }

        Ok(config)
    }
}

/// Console logging on stderr (stdout carries the wordlist), plus an
/// optional plain-text log file. `RUST_LOG` overrides the level.
fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    if let Some(path) = log_file {
        info!("Logging detailed output to: {}", path.display());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    info!("PassForge v{} initialized.", VERSION);

    let info = cli.personal_info();
    if info.is_empty() && cli.keyword_file.is_none() {
        warn!("No personal information or keyword file provided. Wordlist may be very small or empty.");
    }

    let config = cli.pipeline_config()?;
    let generator = Generator::new(config, LexicalPools::standard())?;

    let base = BaseWords::collect(&info, cli.keyword_file.as_deref());
    let dates = cli
        .birth_date
        .as_deref()
        .map(DateParts::parse_or_empty)
        .unwrap_or_default();

    let wordlist = generator
        .generate(&base, &dates)
        .context("Wordlist generation failed")?;

    if wordlist.is_empty() {
        warn!("Generated wordlist is empty.");
        return Ok(());
    }

    let target = OutputTarget::from_path(cli.output_file.clone());
    if let Err(e) = output::emit(&target, &wordlist) {
        // The wordlist was generated; a failed write is reported, not fatal
        error!("{}", e);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level(), cli.log_file.as_deref()) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let result = run(&cli);
    let code = match &result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    };
    info!("PassForge finished.");
    code
}
