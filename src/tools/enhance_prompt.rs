//! enhance_prompt tool implementation

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::config::Config;
use crate::enhancer::{PromptEnhancer, StyleKey};

/// Tool definition for MCP
pub struct EnhancePromptToolDef {
    pub name: &'static str,
    pub description: &'static str,
}

/// Static tool definition
pub static ENHANCE_PROMPT_TOOL: EnhancePromptToolDef = EnhancePromptToolDef {
    name: "enhance_prompt",
    description: r#"Rewrites a short instruction into a fuller, stylistically consistent prompt for generative-AI systems.

Returns a JSON object with:
- enhanced_prompt: the rewritten prompt
- keywords: up to 10 salient terms from the original
- synonyms: alternative words for the leading keywords (when a thesaurus is configured)
- style, context_boost_applied, original_length, enhanced_length

Styles: professional, creative, detailed, simplified.
Set context_boost to append audience, requirements and format guidance.

English only. Purely lexical: no model is called."#,
};

impl EnhancePromptToolDef {
    pub fn get_input_schema() -> serde_json::Value {
        let styles: Vec<&str> = StyleKey::ALL.iter().map(|s| s.as_str()).collect();
        let style_help = StyleKey::ALL
            .iter()
            .map(|s| format!("{} ({})", s.as_str(), s.description()))
            .collect::<Vec<_>>()
            .join("; ");

        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "The original prompt to enhance"
                },
                "style": {
                    "type": "string",
                    "enum": styles,
                    "description": format!("Enhancement style: {}", style_help)
                },
                "context_boost": {
                    "type": "boolean",
                    "description": "Append target audience, requirements, examples, format and standards guidance"
                }
            },
            "required": ["prompt"]
        })
    }
}

/// Tool arguments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnhancePromptArgs {
    pub prompt: Option<String>,
    pub style: Option<String>,
    pub context_boost: Option<bool>,
}

/// Tool result
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub text: String,
}

/// Enhance prompt tool
pub struct EnhancePromptTool {
    config: Arc<Config>,
    enhancer: Arc<PromptEnhancer>,
}

impl EnhancePromptTool {
    pub fn new(config: Arc<Config>, enhancer: Arc<PromptEnhancer>) -> Self {
        Self { config, enhancer }
    }

    /// Execute the tool
    pub fn execute(&self, args: EnhancePromptArgs) -> ToolResult {
        let prompt = match &args.prompt {
            Some(p) if !p.is_empty() => p.clone(),
            _ => {
                return ToolResult {
                    text: "Error: prompt is required".to_string(),
                };
            }
        };

        let style = args
            .style
            .unwrap_or_else(|| self.config.default_style.clone());
        let context_boost = args.context_boost.unwrap_or(false);

        info!(
            "Executing enhance_prompt (style={}, context_boost={})",
            style, context_boost
        );

        let result = self.enhancer.enhance(&prompt, &style, context_boost);

        match serde_json::to_string_pretty(&result) {
            Ok(text) => ToolResult { text },
            Err(e) => {
                error!("Failed to serialize enhancement result: {}", e);
                ToolResult {
                    text: format!("Error: {}", e),
                }
            }
        }
    }
}
