//! Static phrase tables for the enhancement pipeline
//!
//! Style profiles, elaboration clauses, the context-boost block and the refinement
//! phrases. All of it is read-only for the life of the process.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text returned for an empty or whitespace-only prompt
pub const EMPTY_PROMPT_MESSAGE: &str = "Please provide a prompt to enhance.";

/// Style name used when the caller does not pick one
pub const DEFAULT_STYLE: &str = "professional";

/// Known enhancement styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKey {
    #[default]
    Professional,
    Creative,
    Detailed,
    Simplified,
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StyleKey {
    pub const ALL: [StyleKey; 4] = [
        Self::Professional,
        Self::Creative,
        Self::Detailed,
        Self::Simplified,
    ];

    /// Exact, case-sensitive match on the style name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "professional" => Some(Self::Professional),
            "creative" => Some(Self::Creative),
            "detailed" => Some(Self::Detailed),
            "simplified" => Some(Self::Simplified),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Creative => "creative",
            Self::Detailed => "detailed",
            Self::Simplified => "simplified",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Professional => "Clear, structured, and business-focused",
            Self::Creative => "Innovative, engaging, and imaginative",
            Self::Detailed => "Comprehensive, thorough, and well-specified",
            Self::Simplified => "Easy to understand, straightforward, and minimal",
        }
    }

    pub fn profile(&self) -> &'static StyleProfile {
        match self {
            Self::Professional => &PROFESSIONAL,
            Self::Creative => &CREATIVE,
            Self::Detailed => &DETAILED,
            Self::Simplified => &SIMPLIFIED,
        }
    }
}

/// Phrasing bundle for one style.
///
/// Only the first prefix and the first addition are used by the rewrite; the
/// remaining entries and the tone words are carried as data.
#[derive(Debug, PartialEq, Eq)]
pub struct StyleProfile {
    pub prefixes: &'static [&'static str],
    pub additions: &'static [&'static str],
    pub tone_words: &'static [&'static str],
}

impl StyleProfile {
    /// Lead phrase that replaces the opening verb
    pub fn prefix(&self) -> &'static str {
        self.prefixes[0]
    }

    /// Trailing clause for text without terminal punctuation
    pub fn addition(&self) -> &'static str {
        self.additions[0]
    }
}

pub static PROFESSIONAL: StyleProfile = StyleProfile {
    prefixes: &["Create", "Develop", "Implement", "Design", "Establish"],
    additions: &[
        "with clear specifications",
        "ensuring quality and efficiency",
        "following best practices",
    ],
    tone_words: &["professional", "structured", "efficient", "scalable", "robust"],
};

pub static CREATIVE: StyleProfile = StyleProfile {
    prefixes: &["Imagine", "Create", "Design", "Craft", "Conceptualize"],
    additions: &[
        "with innovative features",
        "that stands out visually",
        "with unique interactive elements",
    ],
    tone_words: &[
        "innovative",
        "visually appealing",
        "creative",
        "engaging",
        "dynamic",
        "modern",
    ],
};

pub static DETAILED: StyleProfile = StyleProfile {
    prefixes: &["Create a comprehensive", "Develop a detailed", "Build an in-depth"],
    additions: &[
        "including all components and specifications",
        "with complete documentation",
        "covering all aspects",
    ],
    tone_words: &[
        "comprehensive",
        "detailed",
        "thorough",
        "complete",
        "well-documented",
    ],
};

pub static SIMPLIFIED: StyleProfile = StyleProfile {
    prefixes: &["Make a simple", "Create an easy", "Build a basic"],
    additions: &[
        "that is easy to use",
        "without complexity",
        "keeping it straightforward",
    ],
    tone_words: &["simple", "clean", "easy to use", "straightforward", "minimal"],
};

/// Trigger verb -> elaboration clause, checked in this order
pub const ELABORATIONS: &[(&str, &str)] = &[
    ("make", "by implementing best practices"),
    ("build", "with proper architecture and design"),
    ("create", "ensuring functionality and user experience"),
    ("design", "with attention to detail and user needs"),
    ("develop", "following structured methodology"),
    ("improve", "through systematic enhancement"),
    ("add", "with appropriate integration"),
    ("use", "for maximum effectiveness"),
    ("write", "with clear structure and organization"),
    ("get", "through effective implementation"),
];

/// Clause for sentences without a trigger verb
pub const GENERIC_ELABORATION: &str = "with comprehensive specifications";

/// Opening verbs stripped from the first sentence, checked in this order
pub const WEAK_STARTERS: &[&str] = &[
    "Make", "Build", "Create", "Design", "Develop", "Add", "Use", "Try", "Write", "Get",
];

pub const CONTEXT_BOOST_HEADER: &str = "Context Boost Applied:";

/// Audience, requirements, examples, format, standards
pub const CONTEXT_BOOST_LINES: &[&str] = &[
    "Target audience: professionals, developers, and stakeholders.",
    "Include clear requirements, specifications, and deliverables.",
    "Add relevant examples and use cases to illustrate the concept.",
    "Structure the output in a clear, organized manner.",
    "Ensure alignment with industry standards and best practices.",
];

pub const PROFESSIONAL_CLAUSE: &str = ", ensuring quality and efficiency.";

pub const CREATIVE_CLOSING: &str = ", creating an engaging and memorable experience.";

pub const DETAILED_CLOSING: &str = " Ensure comprehensive coverage of all aspects and components.";
