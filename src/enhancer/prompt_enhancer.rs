//! Prompt Enhancer - the enhancement façade
//!
//! Runs the pipeline stages in a fixed order and assembles an [`EnhancementResult`].
//! The enhancer only holds read-only resources, so one instance can serve any number
//! of threads without locking.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::pipeline::{self, word_count};
use crate::resources::Resources;

use super::templates::EMPTY_PROMPT_MESSAGE;

/// Process-wide enhancer behind the free [`enhance_prompt`] function.
/// Resources are loaded from the environment on first use and never change afterwards.
static SHARED_ENHANCER: OnceLock<PromptEnhancer> = OnceLock::new();

/// Output of one enhancement call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementResult {
    pub enhanced_prompt: String,
    pub keywords: Vec<String>,
    /// Keyword -> alternatives. Value order is not stable across runs.
    pub synonyms: BTreeMap<String, Vec<String>>,
    /// Requested style, echoed verbatim even when unknown
    pub style: String,
    pub context_boost_applied: bool,
    pub original_length: usize,
    pub enhanced_length: usize,
}

impl EnhancementResult {
    /// Canned result for an empty or whitespace-only prompt
    pub fn empty(style: &str) -> Self {
        Self {
            enhanced_prompt: EMPTY_PROMPT_MESSAGE.to_string(),
            keywords: Vec::new(),
            synonyms: BTreeMap::new(),
            style: style.to_string(),
            context_boost_applied: false,
            original_length: 0,
            enhanced_length: 0,
        }
    }
}

/// Prompt Enhancer
#[derive(Debug, Clone)]
pub struct PromptEnhancer {
    resources: Arc<Resources>,
}

impl Default for PromptEnhancer {
    fn default() -> Self {
        Self::new(Arc::new(Resources::fallback()))
    }
}

impl PromptEnhancer {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }

    /// Create an enhancer with the resources named in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(Resources::load(config)))
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        pipeline::extract_keywords(text, &self.resources)
    }

    pub fn get_synonyms(&self, word: &str) -> Vec<String> {
        pipeline::get_synonyms(word, self.resources.thesaurus())
    }

    pub fn expand(&self, text: &str) -> String {
        pipeline::expand(text, self.resources.tagger())
    }

    pub fn apply_style(&self, text: &str, style: &str) -> String {
        pipeline::apply_style(text, style, self.resources.tagger())
    }

    pub fn add_context_boost(&self, text: &str, include: bool) -> String {
        pipeline::add_context_boost(text, include)
    }

    /// Enhance a prompt
    ///
    /// # Arguments
    /// * `prompt` - The original user input
    /// * `style` - `professional`, `creative`, `detailed` or `simplified`; other names are
    ///   rewritten as `professional` but echoed unchanged in the result
    /// * `context_boost` - Append the audience/requirements block
    ///
    /// Never fails: missing resources and lookup failures only thin out the result.
    pub fn enhance(&self, prompt: &str, style: &str, context_boost: bool) -> EnhancementResult {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            debug!("Empty prompt, returning placeholder");
            return EnhancementResult::empty(style);
        }

        let keywords = self.extract_keywords(prompt);
        let synonyms = pipeline::resolve_synonyms(&keywords, self.resources.thesaurus());
        debug!(
            "Extracted {} keywords, {} with synonyms",
            keywords.len(),
            synonyms.len()
        );

        let expanded = self.expand(prompt);
        let styled = self.apply_style(&expanded, style);
        let boosted = self.add_context_boost(&styled, context_boost);
        let enhanced = pipeline::refine_for_style(&boosted, style);

        let result = EnhancementResult {
            original_length: word_count(prompt),
            enhanced_length: word_count(&enhanced),
            enhanced_prompt: enhanced,
            keywords,
            synonyms,
            style: style.to_string(),
            context_boost_applied: context_boost,
        };

        info!(
            "Enhanced prompt ({} -> {} words, style={})",
            result.original_length, result.enhanced_length, result.style
        );

        result
    }
}

/// Process-wide enhancer, built from environment configuration on first use
pub fn shared_enhancer() -> &'static PromptEnhancer {
    SHARED_ENHANCER.get_or_init(|| PromptEnhancer::from_config(&Config::from_env()))
}

/// Public entry point: enhance `prompt` with the shared enhancer
pub fn enhance_prompt(prompt: &str, style: &str, context_boost: bool) -> EnhancementResult {
    shared_enhancer().enhance(prompt, style, context_boost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_shape() {
        let result = EnhancementResult::empty("creative");
        assert_eq!(result.enhanced_prompt, EMPTY_PROMPT_MESSAGE);
        assert!(result.keywords.is_empty());
        assert!(result.synonyms.is_empty());
        assert_eq!(result.style, "creative");
        assert!(!result.context_boost_applied);
        assert_eq!(result.original_length, 0);
        assert_eq!(result.enhanced_length, 0);
    }

    #[test]
    fn test_whitespace_prompt_short_circuits() {
        let enhancer = PromptEnhancer::default();
        assert_eq!(
            enhancer.enhance(" \n\t ", "detailed", true),
            EnhancementResult::empty("detailed")
        );
    }

    #[test]
    fn test_result_serializes_with_contract_field_names() {
        let result = PromptEnhancer::default().enhance("Test prompt here", "professional", false);
        let json = serde_json::to_value(&result).unwrap();
        for field in [
            "enhanced_prompt",
            "keywords",
            "synonyms",
            "style",
            "context_boost_applied",
            "original_length",
            "enhanced_length",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }
}
