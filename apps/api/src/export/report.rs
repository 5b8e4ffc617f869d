use chrono::NaiveDateTime;

use crate::export::FILENAME_TIMESTAMP_FORMAT;
use crate::models::resume::ParsedResume;

const REPORT_HEADER: &str = "RESUME PARSING REPORT\n======================\n";

/// Fixed-layout plain-text report. No trailing newline after the word count.
pub fn render_report(resume: &ParsedResume) -> String {
    let mut out = String::from(REPORT_HEADER);

    out.push_str(&format!(
        "\nName: {}\nEmail: {}\nPhone: {}\nLinkedIn: {}\n",
        resume.name, resume.email, resume.phone, resume.linkedin
    ));

    out.push_str(&format!(
        "\nSKILLS ({} found):\n{}\n",
        resume.skills.len(),
        resume.skills.join(", ")
    ));

    out.push_str("\nEDUCATION:\n");
    for entry in &resume.education {
        out.push_str(&format!("- {}\n", entry.text));
    }

    out.push_str("\nEXPERIENCE:\n");
    for entry in &resume.experience {
        out.push_str(&format!("- {}\n", entry.text));
    }

    out.push_str(&format!(
        "\nParsed on: {}\nWord count: {}",
        resume.parsed_date, resume.word_count
    ));
    out
}

pub fn report_filename(exported_at: NaiveDateTime) -> String {
    format!(
        "resume_report_{}.txt",
        exported_at.format(FILENAME_TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry};
    use chrono::NaiveDate;

    fn sample() -> ParsedResume {
        ParsedResume {
            name: "Mike Williams".to_string(),
            email: "mike.w@pm.com".to_string(),
            emails_all: vec!["mike.w@pm.com".to_string()],
            phone: "(512) 555-4567".to_string(),
            phones_all: vec!["(512) 555-4567".to_string()],
            linkedin: String::new(),
            skills: vec!["JIRA".to_string(), "Linux".to_string()],
            education: vec![EducationEntry {
                text: "Stanford - MBA (2018)".to_string(),
                year: Some("2018".to_string()),
            }],
            experience: vec![
                ExperienceEntry {
                    text: "Product Manager".to_string(),
                    title: None,
                    company: None,
                },
                ExperienceEntry {
                    text: "Manager at Digital Co.".to_string(),
                    title: Some("Manager".to_string()),
                    company: Some("Digital Co.".to_string()),
                },
            ],
            text_preview: "Mike Williams".to_string(),
            parsed_date: "2024-05-06 07:08:09".to_string(),
            word_count: 42,
        }
    }

    #[test]
    fn test_report_matches_template() {
        let expected = "RESUME PARSING REPORT\n\
                        ======================\n\
                        \n\
                        Name: Mike Williams\n\
                        Email: mike.w@pm.com\n\
                        Phone: (512) 555-4567\n\
                        LinkedIn: \n\
                        \n\
                        SKILLS (2 found):\n\
                        JIRA, Linux\n\
                        \n\
                        EDUCATION:\n\
                        - Stanford - MBA (2018)\n\
                        \n\
                        EXPERIENCE:\n\
                        - Product Manager\n\
                        - Manager at Digital Co.\n\
                        \n\
                        Parsed on: 2024-05-06 07:08:09\n\
                        Word count: 42";
        assert_eq!(render_report(&sample()), expected);
    }

    #[test]
    fn test_report_for_empty_record_keeps_sections() {
        let report = render_report(&ParsedResume::default());
        assert!(report.contains("SKILLS (0 found):\n\n\nEDUCATION:\n\nEXPERIENCE:\n\nParsed on: "));
        assert!(report.ends_with("Word count: 0"));
    }

    #[test]
    fn test_filename_is_timestamped() {
        let at = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 58)
            .unwrap();
        assert_eq!(report_filename(at), "resume_report_20241231_235958.txt");
    }
}
