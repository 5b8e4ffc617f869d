use serde::{Deserialize, Serialize};

/// A line flagged as an education mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// A line flagged as an experience mention, optionally split into title and company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Structured record produced by one parse call. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub emails_all: Vec<String>,
    pub phone: String,
    pub phones_all: Vec<String>,
    pub linkedin: String,
    pub skills: Vec<String>,
    /// At most `MAX_SECTION_ENTRIES` entries.
    pub education: Vec<EducationEntry>,
    /// At most `MAX_SECTION_ENTRIES` entries.
    pub experience: Vec<ExperienceEntry>,
    pub text_preview: String,
    /// Local time, `%Y-%m-%d %H:%M:%S`.
    pub parsed_date: String,
    pub word_count: usize,
}
