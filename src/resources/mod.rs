//! Linguistic resources
//!
//! Three independently optional capabilities feed the pipeline:
//! - a stopword set (always present, falls back to a built-in literal list)
//! - a part-of-speech / entity tagger
//! - a synonym thesaurus
//!
//! They are loaded once at startup into an immutable [`Resources`] bundle and shared
//! read-only across calls. Missing capabilities are never an error.

mod stopwords;
mod tagger;
mod thesaurus;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

pub use stopwords::{StopwordSource, Stopwords, FALLBACK_STOPWORDS};
pub use tagger::{PosTag, TaggedDoc, TaggedToken, Tagger};
pub use thesaurus::{FileThesaurus, Synset, Thesaurus};

/// Failure at a capability boundary
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The capability is not installed for this run
    #[error("{0} capability is not available")]
    Unavailable(&'static str),

    /// A resource file could not be read
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The capability is present but a single lookup failed
    #[error("{capability} lookup failed: {message}")]
    Lookup {
        capability: &'static str,
        message: String,
    },
}

impl ResourceError {
    pub fn lookup(capability: &'static str, message: impl Into<String>) -> Self {
        Self::Lookup {
            capability,
            message: message.into(),
        }
    }
}

/// Immutable bundle of the resources available to this process
#[derive(Clone)]
pub struct Resources {
    stopwords: Stopwords,
    tagger: Option<Arc<dyn Tagger>>,
    thesaurus: Option<Arc<dyn Thesaurus>>,
}

impl std::fmt::Debug for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resources")
            .field("stopwords", &self.stopwords.source())
            .field("tagger", &self.has_tagger())
            .field("thesaurus", &self.has_thesaurus())
            .finish()
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::fallback()
    }
}

impl Resources {
    /// Fallback stopwords only, no tagger, no thesaurus
    pub fn fallback() -> Self {
        Self {
            stopwords: Stopwords::fallback(),
            tagger: None,
            thesaurus: None,
        }
    }

    /// Load every resource the config points at.
    ///
    /// Load failures are logged and the affected capability is left out.
    pub fn load(config: &Config) -> Self {
        let stopwords = match &config.stopwords_path {
            Some(path) => match Stopwords::from_file(path) {
                Ok(words) => words,
                Err(e) => {
                    warn!("{}, using built-in stopwords", e);
                    Stopwords::fallback()
                }
            },
            None => Stopwords::fallback(),
        };

        let thesaurus: Option<Arc<dyn Thesaurus>> = match &config.thesaurus_path {
            Some(path) => match FileThesaurus::from_file(path) {
                Ok(t) => Some(Arc::new(t)),
                Err(e) => {
                    warn!("{}, synonym lookup disabled", e);
                    None
                }
            },
            None => None,
        };

        let resources = Self {
            stopwords,
            tagger: None,
            thesaurus,
        };

        info!(
            "Resources loaded: stopwords={:?} ({} words), tagger={}, thesaurus={}",
            resources.stopwords.source(),
            resources.stopwords.len(),
            resources.has_tagger(),
            resources.has_thesaurus()
        );

        resources
    }

    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn with_thesaurus(mut self, thesaurus: Arc<dyn Thesaurus>) -> Self {
        self.thesaurus = Some(thesaurus);
        self
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub fn tagger(&self) -> Option<&dyn Tagger> {
        self.tagger.as_deref()
    }

    pub fn thesaurus(&self) -> Option<&dyn Thesaurus> {
        self.thesaurus.as_deref()
    }

    pub fn has_tagger(&self) -> bool {
        self.tagger.is_some()
    }

    pub fn has_thesaurus(&self) -> bool {
        self.thesaurus.is_some()
    }
}
