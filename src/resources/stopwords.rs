//! Stopword set

use std::collections::HashSet;
use std::path::Path;

use super::ResourceError;

/// Built-in stopwords used when no richer list is configured
pub const FALLBACK_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "can", "must", "shall", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "when",
    "where", "why", "how",
];

/// Where the active stopword set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordSource {
    Fallback,
    File,
}

/// Lowercase stopword set
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
    source: StopwordSource,
}

impl Stopwords {
    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            source: StopwordSource::Fallback,
        }
    }

    /// Read a newline-separated word list. Blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> Result<Self, ResourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        Self {
            words,
            source: StopwordSource::File,
        }
    }

    /// Case-sensitive membership test; callers pass lowercased words
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn source(&self) -> StopwordSource {
        self.source
    }
}
