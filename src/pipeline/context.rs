//! Context boost block

use crate::enhancer::templates::{CONTEXT_BOOST_HEADER, CONTEXT_BOOST_LINES};

/// Append the fixed audience/requirements/format block when `include` is set
pub fn add_context_boost(text: &str, include: bool) -> String {
    if !include {
        return text.to_string();
    }

    let bullets = CONTEXT_BOOST_LINES
        .iter()
        .map(|line| format!("• {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}\n{}", text, CONTEXT_BOOST_HEADER, bullets)
}
