//! Plain-text enhancement report

use std::fmt::Write;

use chrono::Local;

use super::prompt_enhancer::EnhancementResult;

/// Default file name for a saved report
pub const REPORT_FILE_NAME: &str = "prompt_enhancement_report.txt";

/// Render the original prompt, the enhanced prompt and the result metadata
pub fn render_report(original_prompt: &str, result: &EnhancementResult) -> String {
    let mut report = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(report, "PROMPT ENHANCEMENT REPORT");
    let _ = writeln!(report, "=========================");
    let _ = writeln!(
        report,
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(report);
    let _ = writeln!(report, "Original Prompt:\n{}\n", original_prompt);
    let _ = writeln!(report, "Enhanced Prompt:\n{}\n", result.enhanced_prompt);
    let _ = writeln!(report, "Metadata:");
    let _ = writeln!(report, "--------");
    let _ = writeln!(report, "Style: {}", result.style.to_uppercase());
    let _ = writeln!(
        report,
        "Context Boost: {}",
        if result.context_boost_applied { "Yes" } else { "No" }
    );
    let _ = writeln!(report, "Original Length: {} words", result.original_length);
    let _ = writeln!(report, "Enhanced Length: {} words", result.enhanced_length);
    let _ = writeln!(report);
    let _ = writeln!(report, "Keywords:\n{}\n", result.keywords.join(", "));
    let _ = write!(report, "Synonyms:");

    for keyword in &result.keywords {
        if let Some(synonyms) = result.synonyms.get(keyword) {
            let _ = write!(report, "\n{}: {}", keyword, synonyms.join(", "));
        }
    }
    report.push('\n');

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_result() -> EnhancementResult {
        let mut synonyms = BTreeMap::new();
        synonyms.insert("website".to_string(), vec!["web site".to_string()]);
        synonyms.insert("data".to_string(), vec!["information".to_string()]);
        EnhancementResult {
            enhanced_prompt: "Create a website.".to_string(),
            keywords: vec!["website".to_string(), "data".to_string()],
            synonyms,
            style: "creative".to_string(),
            context_boost_applied: true,
            original_length: 2,
            enhanced_length: 3,
        }
    }

    #[test]
    fn test_report_layout() {
        let report = render_report("Make website", &sample_result());
        assert!(report.starts_with("PROMPT ENHANCEMENT REPORT\n=========================\n"));
        assert!(report.contains("Original Prompt:\nMake website\n"));
        assert!(report.contains("Enhanced Prompt:\nCreate a website.\n"));
        assert!(report.contains("Style: CREATIVE\n"));
        assert!(report.contains("Context Boost: Yes\n"));
        assert!(report.contains("Original Length: 2 words\n"));
        assert!(report.contains("Enhanced Length: 3 words\n"));
        assert!(report.contains("Keywords:\nwebsite, data\n"));
    }

    #[test]
    fn test_report_synonyms_follow_keyword_order() {
        let report = render_report("Make website", &sample_result());
        let website = report.find("website: web site").unwrap();
        let data = report.find("data: information").unwrap();
        assert!(website < data);
    }
}
