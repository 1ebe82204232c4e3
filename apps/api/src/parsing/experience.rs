//! Experience extraction: claimed years and recognizable job titles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::analysis::Experience;

/// At most this many distinct positions are kept per resume.
pub const MAX_POSITIONS: usize = 10;

static YEARS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\+?\s*years?\s*(of)?\s*experience",
        r"(?i)experience\s*[:\-]?\s*(\d+)\+?\s*years?",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid years pattern"))
    .collect()
});

const JOB_TITLES: &[&str] = &[
    "software engineer", "developer", "data scientist", "analyst", "manager", "architect",
    "consultant", "designer", "administrator", "specialist", "lead", "senior", "junior",
    "intern", "director", "coordinator",
];

static TITLE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    JOB_TITLES
        .iter()
        .map(|title| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(title)))
                .expect("escaped title is a valid pattern");
            (*title, re)
        })
        .collect()
});

/// Largest "N years experience" / "experience: N years" figure in the text.
pub fn extract_years(text: &str) -> u32 {
    YEARS_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// Known job titles mentioned in the text, in table order.
pub fn extract_positions(text: &str) -> Vec<String> {
    TITLE_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(title, _)| title.to_string())
        .take(MAX_POSITIONS)
        .collect()
}

pub fn extract_experience(text: &str) -> Experience {
    Experience {
        years: extract_years(text),
        positions: extract_positions(text),
    }
}
