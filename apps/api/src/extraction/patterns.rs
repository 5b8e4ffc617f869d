//! Contact-field patterns. Compiled once per process and shared read-only.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
// Permissive: also picks ten-digit windows out of longer digit runs.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});
static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)linkedin\.com/\S+").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// All email addresses in order of appearance.
pub fn find_emails(text: &str) -> Vec<String> {
    find_all(&EMAIL_RE, text)
}

/// All phone-like substrings in order of appearance.
pub fn find_phones(text: &str) -> Vec<String> {
    find_all(&PHONE_RE, text)
}

/// The first `linkedin.com/...` fragment, case-insensitive, including the host.
pub fn find_linkedin(text: &str) -> Option<String> {
    LINKEDIN_RE.find(text).map(|m| m.as_str().to_string())
}

/// The first four-digit year starting with 19 or 20.
pub fn find_year(line: &str) -> Option<String> {
    YEAR_RE.find(line).map(|m| m.as_str().to_string())
}

fn find_all(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emails_in_order_of_appearance() {
        let text = "primary: jane.doe@email.com, backup jdoe+cv@mail.example.org";
        assert_eq!(
            find_emails(text),
            vec!["jane.doe@email.com", "jdoe+cv@mail.example.org"]
        );
    }

    #[test]
    fn test_email_requires_two_letter_tld() {
        assert!(find_emails("someone@host.c").is_empty());
        assert!(find_emails("no address here").is_empty());
    }

    #[test]
    fn test_phone_with_area_code_parentheses() {
        assert_eq!(find_phones("Call (123) 456-7890 today"), vec!["(123) 456-7890"]);
    }

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(find_phones("+1 415.555.1234"), vec!["+1 415.555.1234"]);
    }

    #[test]
    fn test_phone_matches_inside_longer_digit_runs() {
        let phones = find_phones("order id 123456789012345");
        assert_eq!(phones.len(), 1);
        assert!("123456789012345".contains(phones[0].as_str()));
    }

    #[test]
    fn test_multiple_phones_collected() {
        let phones = find_phones("home 212-555-9876\nwork 512.555.4567");
        assert_eq!(phones, vec!["212-555-9876", "512.555.4567"]);
    }

    #[test]
    fn test_linkedin_case_insensitive_with_host() {
        let text = "Profile: LinkedIn.com/in/jane-doe  GitHub: github.com/jane";
        assert_eq!(find_linkedin(text).as_deref(), Some("LinkedIn.com/in/jane-doe"));
    }

    #[test]
    fn test_linkedin_absent() {
        assert!(find_linkedin("linkedin profile available on request").is_none());
    }

    #[test]
    fn test_year_only_19xx_or_20xx() {
        assert_eq!(find_year("MIT - Computer Science (2018)").as_deref(), Some("2018"));
        assert_eq!(find_year("Class of 1999").as_deref(), Some("1999"));
        assert!(find_year("Room 2150 or 1850").is_none());
        assert!(find_year("ID 120189").is_none());
    }
}
