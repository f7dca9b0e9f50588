//! Synonym lookup
//!
//! Alternatives are gathered through a `HashSet` before truncation, so which five
//! survive and their order are not stable across runs. Callers must not depend on it.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::text::char_len;
use crate::resources::{ResourceError, Thesaurus};

/// Most alternatives returned per word
pub const MAX_SYNONYMS: usize = 5;

/// Only this many leading keywords get a lookup
pub const SYNONYM_KEYWORD_LIMIT: usize = 5;

/// Synonyms for `word`, or nothing when the thesaurus is absent or the lookup fails
pub fn get_synonyms(word: &str, thesaurus: Option<&dyn Thesaurus>) -> Vec<String> {
    let Some(thesaurus) = thesaurus else {
        return Vec::new();
    };

    match lookup_synonyms(word, thesaurus) {
        Ok(synonyms) => synonyms,
        Err(e) => {
            debug!("Synonym lookup for '{}' failed: {}", word, e);
            Vec::new()
        }
    }
}

/// Typed lookup: lemma names across all senses, underscores turned into spaces,
/// excluding the word itself and anything of two characters or fewer.
pub fn lookup_synonyms(word: &str, thesaurus: &dyn Thesaurus) -> Result<Vec<String>, ResourceError> {
    let word_lower = word.to_lowercase();
    let mut synonyms = HashSet::new();

    for synset in thesaurus.synsets(word)? {
        for lemma in synset.lemmas {
            let name = lemma.replace('_', " ");
            if name.to_lowercase() != word_lower && char_len(&name) > 2 {
                synonyms.insert(name);
            }
        }
    }

    Ok(synonyms.into_iter().take(MAX_SYNONYMS).collect())
}

/// Synonym map for the first [`SYNONYM_KEYWORD_LIMIT`] keywords.
/// Keywords without alternatives are left out.
pub fn resolve_synonyms(
    keywords: &[String],
    thesaurus: Option<&dyn Thesaurus>,
) -> BTreeMap<String, Vec<String>> {
    keywords
        .iter()
        .take(SYNONYM_KEYWORD_LIMIT)
        .filter_map(|keyword| {
            let synonyms = get_synonyms(keyword, thesaurus);
            (!synonyms.is_empty()).then(|| (keyword.clone(), synonyms))
        })
        .collect()
}
