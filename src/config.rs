//! Configuration module - resource locations and defaults

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::enhancer::StyleKey;

/// Environment variable pointing at a newline-separated stopword list
pub const ENV_STOPWORDS: &str = "PROMPT_ENHANCER_STOPWORDS";

/// Environment variable pointing at a synset file
pub const ENV_THESAURUS: &str = "PROMPT_ENHANCER_THESAURUS";

/// Environment variable for the default enhancement style
pub const ENV_STYLE: &str = "PROMPT_ENHANCER_STYLE";

/// Environment variable that hides the MCP tool when set to disabled/false/off/0
pub const ENV_TOOL: &str = "PROMPT_ENHANCER_TOOL";

/// Optional configuration parameters for Config::new()
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub stopwords_path: Option<PathBuf>,
    pub thesaurus_path: Option<PathBuf>,
    pub default_style: Option<String>,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub stopwords_path: Option<PathBuf>,
    pub thesaurus_path: Option<PathBuf>,
    pub default_style: String,
}

impl Config {
    pub fn new(options: ConfigOptions) -> Result<Arc<Self>> {
        let default_style = match options.default_style {
            Some(style) => {
                let style = style.trim().to_string();
                if style.is_empty() {
                    return Err(anyhow!("default style cannot be empty"));
                }
                style
            }
            None => StyleKey::default().as_str().to_string(),
        };

        Ok(Arc::new(Self {
            stopwords_path: normalize_path(options.stopwords_path),
            thesaurus_path: normalize_path(options.thesaurus_path),
            default_style,
        }))
    }

    /// Options read from the environment; CLI flags are layered on top by the caller
    pub fn options_from_env() -> ConfigOptions {
        ConfigOptions {
            stopwords_path: std::env::var_os(ENV_STOPWORDS).map(PathBuf::from),
            thesaurus_path: std::env::var_os(ENV_THESAURUS).map(PathBuf::from),
            default_style: std::env::var(ENV_STYLE).ok().filter(|s| !s.trim().is_empty()),
        }
    }

    /// Config built purely from environment variables.
    /// Never fails: an unusable value falls back to the default.
    pub fn from_env() -> Arc<Self> {
        Self::new(Self::options_from_env()).unwrap_or_else(|e| {
            tracing::warn!("Ignoring environment configuration: {}", e);
            Arc::new(Self::default())
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords_path: None,
            thesaurus_path: None,
            default_style: StyleKey::default().as_str().to_string(),
        }
    }
}

/// Empty or whitespace-only paths mean "unset"
fn normalize_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.and_then(|p| {
        let s = p.to_string_lossy();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    })
}

/// Check if the enhance_prompt MCP tool is enabled.
/// Disabled when the env var is "disabled", "false", "off" or "0"; enabled otherwise.
pub fn is_tool_enabled() -> bool {
    std::env::var(ENV_TOOL)
        .map(|v| {
            let v = v.trim();
            !v.eq_ignore_ascii_case("disabled")
                && !v.eq_ignore_ascii_case("false")
                && !v.eq_ignore_ascii_case("off")
                && v != "0"
        })
        .unwrap_or(true)
}
