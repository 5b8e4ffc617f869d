//! Field Extractor — turns raw resume text into a `ParsedResume`.
//!
//! Single pass, no I/O, no shared mutable state. Any input string is accepted;
//! missing fields come back empty rather than as errors.

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::extraction::lines::{detect_education, detect_experience, detect_name, split_lines};
use crate::extraction::patterns::{find_emails, find_linkedin, find_phones};
use crate::extraction::taxonomy::detect_skills;
use crate::models::resume::ParsedResume;

/// Characters kept in `text_preview` before the ellipsis.
pub const PREVIEW_CHARS: usize = 300;

pub const PARSED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `text`, stamping the record with the local wall-clock time.
pub fn parse_resume(text: &str) -> ParsedResume {
    parse_resume_at(text, Local::now().naive_local())
}

/// Parses `text` with an explicit timestamp. Deterministic.
pub fn parse_resume_at(text: &str, parsed_at: NaiveDateTime) -> ParsedResume {
    let lines = split_lines(text);

    let emails_all = find_emails(text);
    let phones_all = find_phones(text);

    let resume = ParsedResume {
        name: detect_name(&lines),
        email: emails_all.first().cloned().unwrap_or_default(),
        emails_all,
        phone: phones_all.first().cloned().unwrap_or_default(),
        phones_all,
        linkedin: find_linkedin(text).unwrap_or_default(),
        skills: detect_skills(text),
        education: detect_education(&lines),
        experience: detect_experience(&lines),
        text_preview: preview(text, PREVIEW_CHARS),
        parsed_date: parsed_at.format(PARSED_DATE_FORMAT).to_string(),
        word_count: text.split_whitespace().count(),
    };

    debug!(
        words = resume.word_count,
        skills = resume.skills.len(),
        education = resume.education.len(),
        experience = resume.experience.len(),
        "Parsed resume text"
    );

    resume
}

/// First `max_chars` characters of `text`, with `...` appended when anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
