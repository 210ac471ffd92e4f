//! Wordlist output
//!
//! Emits the final wordlist, one candidate per line with a trailing newline,
//! to a file or to standard output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PassForgeError, Result};
use crate::mutators::CandidateSet;

/// Where the wordlist goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }
}

/// Consume a candidate set into an ascending list
pub fn sorted(words: CandidateSet) -> Vec<String> {
    let mut list: Vec<String> = words.into_iter().collect();
    list.sort_unstable();
    list
}

/// Write one word per line
pub fn write_wordlist<W: Write>(writer: W, words: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Save the wordlist to a file, replacing any existing content
pub fn save_wordlist(path: &Path, words: &[String]) -> Result<()> {
    info!("Saving wordlist ({} words) to {}", words.len(), path.display());
    let file = File::create(path).map_err(|e| {
        PassForgeError::OutputError(format!("Failed to create {}: {}", path.display(), e))
    })?;
    write_wordlist(file, words).map_err(|e| {
        PassForgeError::OutputError(format!("Failed to write wordlist to {}: {}", path.display(), e))
    })?;
    info!("Wordlist saved successfully.");
    Ok(())
}

/// Emit the wordlist to its target
pub fn emit(target: &OutputTarget, words: &[String]) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            write_wordlist(stdout.lock(), words)?;
            Ok(())
        }
        OutputTarget::File(path) => save_wordlist(path, words),
    }
}
