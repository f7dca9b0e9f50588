//! prompt-enhancer library - lexical prompt rewriting with keyword and synonym extraction

pub mod config;
pub mod enhancer;
pub mod mcp;
pub mod pipeline;
pub mod resources;
pub mod tools;

// Re-export commonly used types
pub use config::{Config, ConfigOptions};
pub use enhancer::{enhance_prompt, EnhancementResult, PromptEnhancer, StyleKey};
pub use resources::{ResourceError, Resources, Stopwords};
