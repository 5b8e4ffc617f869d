use chrono::NaiveDateTime;

use crate::export::FILENAME_TIMESTAMP_FORMAT;
use crate::models::resume::ParsedResume;

/// Pretty-printed JSON (two-space indent). Non-ASCII text is written as-is.
pub fn render_json(resume: &ParsedResume) -> serde_json::Result<String> {
    serde_json::to_string_pretty(resume)
}

pub fn json_filename(exported_at: NaiveDateTime) -> String {
    format!(
        "resume_data_{}.json",
        exported_at.format(FILENAME_TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::parse_resume_at;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_round_trip_is_field_for_field_equal() {
        let text = "Sarah Johnson\nData Scientist\nsarah.j@data.com\n(212) 555-9876\n\
                    SKILLS: Python, SQL\nDataCorp - Data Engineer (2021-2023)\n\
                    Harvard - Data Science Degree (2019)";
        let resume = parse_resume_at(text, at());
        let json = render_json(&resume).unwrap();
        let back: ParsedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
    }

    #[test]
    fn test_pretty_printed_with_two_space_indent() {
        let json = render_json(&ParsedResume::default()).unwrap();
        assert!(json.starts_with("{\n  \"name\": \"\","));
    }

    #[test]
    fn test_non_ascii_preserved() {
        let resume = ParsedResume {
            name: "Zoë Müller".to_string(),
            ..Default::default()
        };
        let json = render_json(&resume).unwrap();
        assert!(json.contains("Zoë Müller"));
    }

    #[test]
    fn test_filename_is_timestamped() {
        assert_eq!(json_filename(at()), "resume_data_20240102_030405.json");
    }
}
