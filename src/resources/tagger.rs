//! Part-of-speech / entity tagger capability
//!
//! No tagger ships with the crate. Embedders that have one (a model server, an FFI
//! binding) implement [`Tagger`] and install it with `Resources::with_tagger`.

use super::ResourceError;

/// Coarse universal POS tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl PosTag {
    pub fn is_noun(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Analysis of one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedDoc {
    pub tokens: Vec<TaggedToken>,
    /// Named-entity surface strings, in document order
    pub entities: Vec<String>,
    /// Base noun phrases, in document order
    pub noun_chunks: Vec<String>,
}

pub trait Tagger: Send + Sync {
    fn analyze(&self, text: &str) -> Result<TaggedDoc, ResourceError>;

    /// Sentence boundaries as detected by the tagger's segmenter.
    /// Taggers without a segmenter keep the default, and callers fall back to the basic split.
    fn sentences(&self, _text: &str) -> Result<Vec<String>, ResourceError> {
        Err(ResourceError::Unavailable("sentence segmenter"))
    }
}
