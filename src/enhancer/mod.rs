//! Prompt Enhancer module
//! Rewrites short prompts into fuller, style-consistent instructions

pub mod prompt_enhancer;
pub mod report;
pub mod templates;

pub use prompt_enhancer::{enhance_prompt, shared_enhancer, EnhancementResult, PromptEnhancer};
pub use report::{render_report, REPORT_FILE_NAME};
pub use templates::{StyleKey, StyleProfile, DEFAULT_STYLE, EMPTY_PROMPT_MESSAGE};
