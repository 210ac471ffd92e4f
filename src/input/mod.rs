//! Base word collection
//!
//! Turns the target's personal details and keyword sources into the initial
//! candidate set the pipeline starts from.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{error, info, warn};

use crate::error::{PassForgeError, Result};

/// Separators used to split multi-token fields ("john_doe", "Mary Ann")
static TOKEN_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_\-]+").expect("separator pattern is valid"));

/// Personal details about the target
#[derive(Debug, Clone, Default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub partner_name: Option<String>,
    pub pet_name: Option<String>,
    pub company: Option<String>,
    /// Extra keywords given directly
    pub keywords: Vec<String>,
}

impl PersonalInfo {
    /// Non-empty field values followed by the keywords
    pub fn words(&self) -> impl Iterator<Item = &str> {
        [
            &self.first_name,
            &self.last_name,
            &self.username,
            &self.nickname,
            &self.partner_name,
            &self.pet_name,
            &self.company,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .chain(self.keywords.iter().map(String::as_str))
        .filter(|word| !word.is_empty())
    }

    /// True when no field or keyword was supplied
    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }
}

/// The words the pipeline starts from. Never modified once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseWords {
    words: HashSet<String>,
}

impl BaseWords {
    /// Build base words from personal info only
    pub fn from_info(info: &PersonalInfo) -> Self {
        let mut base = Self::default();
        for word in info.words() {
            base.add_with_parts(word);
        }
        base
    }

    /// Build base words from personal info and an optional keyword file.
    ///
    /// A missing or unreadable keyword file is logged and skipped.
    pub fn collect(info: &PersonalInfo, keyword_file: Option<&Path>) -> Self {
        info!("Loading base keywords...");
        let mut base = Self::from_info(info);
        info!(
            "Added {} keywords from command line args (unique: {}).",
            info.words().count(),
            base.len()
        );

        if let Some(path) = keyword_file {
            match read_keyword_file(path) {
                Ok(keywords) => {
                    info!(
                        "Added {} keywords from file: {}",
                        keywords.len(),
                        path.display()
                    );
                    base.extend(keywords);
                }
                Err(e) => error!("Error reading keyword file {}: {}", path.display(), e),
            }
        }

        if base.is_empty() {
            warn!("No base keywords loaded. Wordlist may be small or empty.");
        } else {
            info!("Total unique base keywords: {}", base.len());
        }
        base
    }

    /// Add a word and, when it has several tokens, each token on its own
    fn add_with_parts(&mut self, word: &str) {
        self.words.insert(word.to_string());
        let parts: Vec<&str> = TOKEN_SEPARATORS.split(word).collect();
        if parts.len() > 1 {
            self.words
                .extend(parts.into_iter().filter(|p| !p.is_empty()).map(str::to_string));
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_set(&self) -> &HashSet<String> {
        &self.words
    }
}

impl Extend<String> for BaseWords {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl<S: Into<String>> FromIterator<S> for BaseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Read keywords from a file, one per line.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Invalid
/// UTF-8 is replaced rather than rejected.
pub fn read_keyword_file(path: &Path) -> Result<HashSet<String>> {
    if !path.exists() {
        return Err(PassForgeError::KeywordFileNotFound(
            path.to_string_lossy().to_string(),
        ));
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parse_keywords(&content))
}

/// Keyword lines from already-loaded text
pub fn parse_keywords(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
