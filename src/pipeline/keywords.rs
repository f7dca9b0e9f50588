//! Keyword extraction
//!
//! With a tagger installed, keywords are entity spans, then non-stopword nouns, then
//! multi-word noun chunks. Without one (or when tagging yields nothing) the text is
//! tokenized and every non-stopword longer than three characters is kept.
//! Either way the list is deduplicated in extraction order and capped at [`MAX_KEYWORDS`].

use tracing::{debug, warn};

use super::text::{char_len, tokenize};
use crate::resources::{Resources, Stopwords, TaggedDoc};

pub const MAX_KEYWORDS: usize = 10;

pub fn extract_keywords(text: &str, resources: &Resources) -> Vec<String> {
    if let Some(tagger) = resources.tagger() {
        match tagger.analyze(text) {
            Ok(doc) => {
                let keywords = tagged_keywords(&doc, resources.stopwords());
                if !keywords.is_empty() {
                    debug!("Extracted {} keywords with tagger", keywords.len());
                    return keywords;
                }
            }
            Err(e) => warn!("Tagger failed, falling back to basic extraction: {}", e),
        }
    }

    extract_keywords_basic(text, resources.stopwords())
}

fn tagged_keywords(doc: &TaggedDoc, stopwords: &Stopwords) -> Vec<String> {
    let entities = doc
        .entities
        .iter()
        .filter(|ent| char_len(ent) > 2)
        .map(|ent| ent.to_lowercase());

    let nouns = doc
        .tokens
        .iter()
        .filter(|tok| tok.pos.is_noun())
        .map(|tok| tok.text.to_lowercase())
        .filter(|word| !stopwords.contains(word));

    let chunks = doc
        .noun_chunks
        .iter()
        .filter(|chunk| chunk.split_whitespace().count() > 1 && char_len(chunk) > 2)
        .map(|chunk| chunk.to_lowercase());

    deduplicate_keywords(entities.chain(nouns).chain(chunks))
}

/// Regex tokens longer than three characters that are not stopwords
pub fn extract_keywords_basic(text: &str, stopwords: &Stopwords) -> Vec<String> {
    let words = tokenize(text)
        .into_iter()
        .filter(|word| char_len(word) > 3 && !stopwords.contains(word));
    deduplicate_keywords(words)
}

/// First occurrence wins; entries of two characters or fewer are dropped
pub fn deduplicate_keywords<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut unique: Vec<String> = Vec::new();
    for keyword in keywords {
        if char_len(&keyword) > 2 && !unique.contains(&keyword) {
            unique.push(keyword);
            if unique.len() == MAX_KEYWORDS {
                break;
            }
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_extraction_filters_short_and_stopwords() {
        let keywords = extract_keywords_basic(
            "Make a website that looks cool for data science students.",
            &Stopwords::fallback(),
        );
        assert_eq!(
            keywords,
            owned(&["make", "website", "looks", "cool", "data", "science", "students"])
        );
    }

    #[test]
    fn test_deduplicate_keeps_first_occurrence() {
        let keywords = deduplicate_keywords(owned(&["api", "db", "api", "server", "db", "server"]));
        assert_eq!(keywords, owned(&["api", "server"]));
    }

    #[test]
    fn test_deduplicate_caps_at_ten() {
        let words: Vec<String> = (0..25).map(|i| format!("word{}", i)).collect();
        let keywords = deduplicate_keywords(words);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "word0");
        assert_eq!(keywords[9], "word9");
    }

    #[test]
    fn test_basic_extraction_empty_text() {
        assert!(extract_keywords_basic("", &Stopwords::fallback()).is_empty());
        assert!(extract_keywords_basic("a an the", &Stopwords::fallback()).is_empty());
    }
}
