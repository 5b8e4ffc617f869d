//! Heuristic line classification — name, education and experience detectors.
//!
//! Every detector is a pure function over the resume's lines. They are keyword
//! membership tests with no precision guarantee.

use crate::extraction::patterns::find_year;
use crate::models::resume::{EducationEntry, ExperienceEntry};

/// Upper bound on education and experience entries kept per resume.
pub const MAX_SECTION_ENTRIES: usize = 3;

/// How many leading lines are considered when guessing the name.
const NAME_SCAN_LINES: usize = 5;

const NAME_EXCLUDED_MARKERS: &[&str] = &["@", "http", "linkedin", "github"];

const EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "bachelor",
    "master",
    "phd",
    "mba",
    "degree",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work",
    "employment",
    "internship",
    "developer",
    "engineer",
    "manager",
];

/// Title/company delimiters in priority order. Matched case-sensitively.
const COMPANY_DELIMITERS: &[&str] = &[" at ", "|", "-", "–"];

/// Splits the trimmed text on `\n`. Empty text yields a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.trim().split('\n').collect()
}

/// Best-guess personal name.
///
/// Picks the first of the leading lines that has 2-4 words and no contact
/// markers. Falls back to the first line verbatim (trimmed) when none qualifies.
pub fn detect_name(lines: &[&str]) -> String {
    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .map(|line| line.trim())
        .find(|line| is_name_candidate(line))
        .or_else(|| lines.first().map(|line| line.trim()))
        .unwrap_or_default()
        .to_string()
}

fn is_name_candidate(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    let line_lower = line.to_lowercase();
    if NAME_EXCLUDED_MARKERS
        .iter()
        .any(|marker| line_lower.contains(marker))
    {
        return false;
    }
    (2..=4).contains(&line.split_whitespace().count())
}

/// Lines mentioning a school or degree, with the first 19xx/20xx year if any.
pub fn detect_education(lines: &[&str]) -> Vec<EducationEntry> {
    lines
        .iter()
        .filter(|line| contains_keyword(line, EDUCATION_KEYWORDS))
        .take(MAX_SECTION_ENTRIES)
        .map(|line| EducationEntry {
            text: line.trim().to_string(),
            year: find_year(line),
        })
        .collect()
}

/// Lines mentioning work history, split into title and company when a delimiter is present.
pub fn detect_experience(lines: &[&str]) -> Vec<ExperienceEntry> {
    lines
        .iter()
        .filter(|line| contains_keyword(line, EXPERIENCE_KEYWORDS))
        .take(MAX_SECTION_ENTRIES)
        .map(|line| {
            let (title, company) = match split_title_company(line) {
                Some((title, company)) => (Some(title), Some(company)),
                None => (None, None),
            };
            ExperienceEntry {
                text: line.trim().to_string(),
                title,
                company,
            }
        })
        .collect()
}

/// Splits on the first delimiter present in `line`.
///
/// The company is the segment between the first and second occurrence of that
/// delimiter, so `"Engineer - Acme - 2020"` yields `("Engineer", "Acme")`.
pub fn split_title_company(line: &str) -> Option<(String, String)> {
    let delimiter = COMPANY_DELIMITERS.iter().find(|d| line.contains(**d))?;
    let mut parts = line.split(*delimiter);
    let title = parts.next()?.trim().to_string();
    let company = parts.next()?.trim().to_string();
    Some((title, company))
}

fn contains_keyword(line: &str, keywords: &[&str]) -> bool {
    let line_lower = line.to_lowercase();
    keywords.iter().any(|keyword| line_lower.contains(keyword))
}
