//! Skill taxonomy — a fixed category → vocabulary table and the whole-word matcher built from it.
//!
//! Output order is category order, then vocabulary order within a category.
//! A term listed under two categories is reported twice.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// One category of canonical skill names, in reporting order.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

/// Default vocabulary used by the extractor.
pub const DEFAULT_TAXONOMY: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming",
        terms: &["Python", "Java", "JavaScript", "C++", "C#", "HTML", "CSS"],
    },
    SkillCategory {
        name: "Web",
        terms: &["React", "Angular", "Vue", "Node.js", "Django", "Flask"],
    },
    SkillCategory {
        name: "Databases",
        terms: &["SQL", "MySQL", "PostgreSQL", "MongoDB"],
    },
    SkillCategory {
        name: "Cloud",
        terms: &["AWS", "Azure", "Docker", "Kubernetes"],
    },
    SkillCategory {
        name: "Tools",
        terms: &["Git", "GitHub", "JIRA", "Linux"],
    },
];

static DEFAULT_MATCHER: Lazy<SkillMatcher> = Lazy::new(|| {
    SkillMatcher::new(DEFAULT_TAXONOMY).expect("escaped vocabulary terms are valid patterns")
});

/// Compiled `\b<term>\b` patterns, one per vocabulary entry.
pub struct SkillMatcher {
    terms: Vec<(&'static str, Regex)>,
}

impl SkillMatcher {
    pub fn new(taxonomy: &[SkillCategory]) -> Result<Self, regex::Error> {
        for category in taxonomy {
            debug!(
                category = category.name,
                terms = category.terms.len(),
                "Compiling skill category"
            );
        }
        let terms = taxonomy
            .iter()
            .flat_map(|category| category.terms.iter().copied())
            .map(|term| {
                let pattern = format!(r"\b{}\b", regex::escape(&term.to_lowercase()));
                Regex::new(&pattern).map(|re| (term, re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { terms })
    }

    /// Canonical spellings of every term found in `text`, case-insensitively.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();
        self.terms
            .iter()
            .filter(|(_, re)| re.is_match(&text_lower))
            .map(|(term, _)| term.to_string())
            .collect()
    }
}

/// Runs the default vocabulary over `text`.
pub fn detect_skills(text: &str) -> Vec<String> {
    DEFAULT_MATCHER.detect(text)
}
