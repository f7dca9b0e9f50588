//! Enhancement pipeline stages
//!
//! Each stage is a pure function over its input text plus read-only [`Resources`](crate::resources::Resources).
//! The façade in [`crate::enhancer`] runs them strictly in order:
//! keywords → synonyms → expansion → style → context boost → refinement.

pub mod context;
pub mod expander;
pub mod keywords;
pub mod style;
pub mod synonyms;
pub mod text;

pub use context::add_context_boost;
pub use expander::{elaboration_for, expand};
pub use keywords::{deduplicate_keywords, extract_keywords, extract_keywords_basic, MAX_KEYWORDS};
pub use style::{apply_style, refine_for_style, strip_weak_starter};
pub use synonyms::{get_synonyms, lookup_synonyms, resolve_synonyms, MAX_SYNONYMS};
pub use text::{basic_sentence_split, split_sentences, tokenize, word_count};
