//! Thesaurus capability and a file-backed implementation

use std::collections::HashMap;
use std::path::Path;

use super::ResourceError;

/// One sense group: every lemma that shares a meaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub lemmas: Vec<String>,
}

pub trait Thesaurus: Send + Sync {
    /// All sense groups the word belongs to
    fn synsets(&self, word: &str) -> Result<Vec<Synset>, ResourceError>;
}

/// Synset table loaded from a text file.
///
/// One synset per line, lemmas separated by commas:
///
/// ```text
/// # WordNet export
/// website, web_site, internet_site, site
/// build, construct, make
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileThesaurus {
    synsets: Vec<Synset>,
    /// lowercase lemma -> indices into `synsets`
    index: HashMap<String, Vec<usize>>,
}

impl FileThesaurus {
    pub fn from_file(path: &Path) -> Result<Self, ResourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut thesaurus = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let lemmas: Vec<String> = line
                .split(',')
                .map(str::trim)
                .filter(|lemma| !lemma.is_empty())
                .map(str::to_string)
                .collect();

            if lemmas.is_empty() {
                continue;
            }

            let idx = thesaurus.synsets.len();
            for lemma in &lemmas {
                let entry = thesaurus.index.entry(lemma.to_lowercase()).or_default();
                if !entry.contains(&idx) {
                    entry.push(idx);
                }
            }
            thesaurus.synsets.push(Synset { lemmas });
        }

        thesaurus
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}

impl Thesaurus for FileThesaurus {
    fn synsets(&self, word: &str) -> Result<Vec<Synset>, ResourceError> {
        // Multi-word lookups use the underscore form, as WordNet does
        let key = word.trim().to_lowercase().replace(' ', "_");
        Ok(self
            .index
            .get(&key)
            .map(|ids| ids.iter().map(|&i| self.synsets[i].clone()).collect())
            .unwrap_or_default())
    }
}
