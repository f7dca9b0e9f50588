//! Tools module

pub mod enhance_prompt;

pub use enhance_prompt::EnhancePromptTool;
