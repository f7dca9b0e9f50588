//! Tokenizing and sentence splitting shared by the stages

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::resources::Tagger;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Lowercased word tokens in document order
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split on runs of `.`, `!`, `?`, trim each fragment and drop empty ones.
/// Terminators are not kept.
pub fn basic_sentence_split(text: &str) -> Vec<String> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sentences from the tagger's segmenter when one is installed, otherwise
/// [`basic_sentence_split`]. A segmenter failure falls back as well.
pub fn split_sentences(text: &str, tagger: Option<&dyn Tagger>) -> Vec<String> {
    if let Some(tagger) = tagger {
        match tagger.sentences(text) {
            Ok(sentences) => return sentences,
            Err(e) => debug!("Sentence segmenter failed, using basic split: {}", e),
        }
    }
    basic_sentence_split(text)
}

/// Whitespace-delimited token count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters (not bytes)
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_punctuation() {
        assert_eq!(
            tokenize("Build an e-commerce site!"),
            vec!["build", "an", "e", "commerce", "site"]
        );
    }

    #[test]
    fn test_basic_sentence_split() {
        assert_eq!(
            basic_sentence_split("First one. Second?! Third...   "),
            vec!["First one", "Second", "Third"]
        );
        assert!(basic_sentence_split("...").is_empty());
        assert!(basic_sentence_split("").is_empty());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Test prompt here"), 3);
        assert_eq!(word_count("  spaced \n\t out  "), 2);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(char_len("café"), 4);
    }
}
