//! Education extraction: degree phrases and institution names.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// At most this many education fragments are kept per resume.
pub const MAX_EDUCATION: usize = 5;

static EDUCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "Bachelor of Science in ...", "M.S. in ...", "PhD in ..."
        r"(?i)(bachelor|b\.?s\.?|b\.?a\.?|master|m\.?s\.?|m\.?a\.?|phd|ph\.?d\.?|doctorate)\s+(of|in)?\s+([a-zA-Z\s]+)",
        r"(?i)(undergraduate|graduate)\s+degree\s+in\s+([a-zA-Z\s]+)",
        // "University of X" or "X College"
        r"(?i)(university|college|institute)\s+of\s+([a-zA-Z\s]+)|([a-zA-Z\s]+)\s+(university|college|institute)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid education pattern"))
    .collect()
});

/// Extracts degree and institution fragments, distinct in first-seen order.
pub fn extract_education(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut education = Vec::new();

    for pattern in EDUCATION_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let fragment = m.as_str().trim();
            if !fragment.is_empty() && seen.insert(fragment.to_string()) {
                education.push(fragment.to_string());
            }
        }
    }

    education.truncate(MAX_EDUCATION);
    education
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_with_field() {
        let edu = extract_education("Bachelor of Science in Computer Science, 2019");
        assert_eq!(edu[0], "Bachelor of Science in Computer Science");
    }

    #[test]
    fn test_graduate_degree_phrase() {
        let edu = extract_education("Holds a graduate degree in Economics");
        assert!(edu.iter().any(|e| e.starts_with("graduate degree in Economics")));
    }

    #[test]
    fn test_institution_names() {
        let edu = extract_education("Alumni, University of Toronto");
        assert!(edu.iter().any(|e| e == "University of Toronto"), "{edu:?}");
    }

    #[test]
    fn test_no_education() {
        assert!(extract_education("Shipped 12 releases; on-call lead").is_empty());
    }

    #[test]
    fn test_capped_and_distinct() {
        let text = "Bachelor of Arts\n\nMaster of Science\n\nPhD in Physics\n\n\
                    University of Oslo\n\nCollege of Marin\n\nInstitute of Art\n\n\
                    Bachelor of Arts";
        let edu = extract_education(text);
        assert!(edu.len() <= MAX_EDUCATION);
        let unique: HashSet<&String> = edu.iter().collect();
        assert_eq!(unique.len(), edu.len());
    }
}
