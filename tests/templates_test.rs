//! Tests for enhancer templates module

use prompt_enhancer::enhancer::templates::{
    StyleKey, CONTEXT_BOOST_LINES, DEFAULT_STYLE, ELABORATIONS, EMPTY_PROMPT_MESSAGE,
    WEAK_STARTERS,
};

// ========================================================================
// StyleKey Tests
// ========================================================================

#[test]
fn test_style_key_names_roundtrip() {
    for key in StyleKey::ALL {
        assert_eq!(StyleKey::from_name(key.as_str()), Some(key));
        assert_eq!(key.to_string(), key.as_str());
    }
}

#[test]
fn test_style_key_match_is_exact() {
    assert_eq!(StyleKey::from_name("Professional"), None);
    assert_eq!(StyleKey::from_name(" creative"), None);
    assert_eq!(StyleKey::from_name(""), None);
}

#[test]
fn test_default_style() {
    assert_eq!(StyleKey::default().as_str(), DEFAULT_STYLE);
}

#[test]
fn test_style_key_serde_lowercase() {
    assert_eq!(
        serde_json::to_string(&StyleKey::Simplified).unwrap(),
        "\"simplified\""
    );
    let key: StyleKey = serde_json::from_str("\"detailed\"").unwrap();
    assert_eq!(key, StyleKey::Detailed);
}

// ========================================================================
// Profile Tests
// ========================================================================

#[test]
fn test_profiles_use_first_entries() {
    assert_eq!(StyleKey::Professional.profile().prefix(), "Create");
    assert_eq!(StyleKey::Creative.profile().prefix(), "Imagine");
    assert_eq!(StyleKey::Detailed.profile().prefix(), "Create a comprehensive");
    assert_eq!(StyleKey::Simplified.profile().prefix(), "Make a simple");
    assert_eq!(
        StyleKey::Professional.profile().addition(),
        "with clear specifications"
    );
}

#[test]
fn test_profiles_keep_full_data() {
    for key in StyleKey::ALL {
        let profile = key.profile();
        assert!(profile.prefixes.len() >= 3);
        assert_eq!(profile.additions.len(), 3);
        assert!(!profile.tone_words.is_empty());
        assert!(!key.description().is_empty());
    }
}

// ========================================================================
// Phrase Table Tests
// ========================================================================

#[test]
fn test_elaboration_table_order() {
    let triggers: Vec<&str> = ELABORATIONS.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        triggers,
        vec!["make", "build", "create", "design", "develop", "improve", "add", "use", "write", "get"]
    );
}

#[test]
fn test_weak_starters_are_capitalized_verbs() {
    assert_eq!(WEAK_STARTERS.len(), 10);
    assert!(WEAK_STARTERS
        .iter()
        .all(|w| w.chars().next().is_some_and(char::is_uppercase)));
}

#[test]
fn test_context_boost_lines() {
    assert_eq!(CONTEXT_BOOST_LINES.len(), 5);
    assert!(CONTEXT_BOOST_LINES[0].starts_with("Target audience"));
}

#[test]
fn test_empty_prompt_message() {
    assert_eq!(EMPTY_PROMPT_MESSAGE, "Please provide a prompt to enhance.");
}
