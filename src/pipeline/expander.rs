//! Sentence expansion: short sentences get a clarifying clause

use super::text::{split_sentences, tokenize};
use crate::enhancer::templates::{ELABORATIONS, GENERIC_ELABORATION};
use crate::resources::Tagger;

/// Sentences with fewer word tokens than this are elaborated
pub const SHORT_SENTENCE_WORDS: usize = 8;

pub fn expand(text: &str, tagger: Option<&dyn Tagger>) -> String {
    split_sentences(text, tagger)
        .iter()
        .map(|sentence| {
            let sentence = sentence.trim();
            if tokenize(sentence).len() < SHORT_SENTENCE_WORDS {
                format!("{} {}.", sentence, elaboration_for(sentence))
            } else {
                sentence.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clause for the first trigger verb found anywhere in the sentence.
/// Matching is by substring, so "address" triggers `add`.
pub fn elaboration_for(sentence: &str) -> &'static str {
    let lower = sentence.to_lowercase();
    ELABORATIONS
        .iter()
        .find(|(trigger, _)| lower.contains(trigger))
        .map(|(_, clause)| *clause)
        .unwrap_or(GENERIC_ELABORATION)
}
