//! Weighted compatibility score and its experience/education components.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::analysis::ResumeProfile;
use crate::text::mentions;

pub const SIMILARITY_WEIGHT: f64 = 0.40;
pub const SKILL_WEIGHT: f64 = 0.35;
pub const EXPERIENCE_WEIGHT: f64 = 0.15;
pub const EDUCATION_WEIGHT: f64 = 0.10;

static REQUIRED_YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+?\s*year").expect("valid required-years pattern"));

const DOCTORATE_MARKERS: &[&str] = &["phd", "doctorate"];
const MASTER_MARKERS: &[&str] = &["master", "msc", "ms", "mba"];
const BACHELOR_MARKERS: &[&str] = &["bachelor", "bsc", "bs", "be", "btech"];
const RELEVANT_FIELDS: &[&str] = &[
    "computer science", "software", "engineering", "information technology", "cs",
];

/// Degree markers of five characters or fewer are abbreviations and must
/// stand alone; longer ones match anywhere.
fn has_marker(text_lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| {
        if m.len() <= 5 {
            mentions(text_lower, m)
        } else {
            text_lower.contains(m)
        }
    })
}

/// Text standing in for the resume on the similarity side: skills,
/// education and positions joined by spaces.
pub fn resume_text(profile: &ResumeProfile) -> String {
    [
        profile.skills.join(" "),
        profile.education.join(" "),
        profile.experience.positions.join(" "),
    ]
    .join(" ")
}

/// Largest `<N> year` figure in the job text, if any.
pub fn required_years(job_lower: &str) -> Option<u32> {
    REQUIRED_YEARS_RE
        .captures_iter(job_lower)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
}

/// Experience component in [0, 100].
pub fn experience_score(years: u32, job_description: &str) -> f64 {
    if years == 0 {
        return 0.0;
    }
    let job_lower = job_description.to_lowercase();
    let by_years = (years as f64 * 20.0).min(100.0);

    if !(job_lower.contains("years") || job_lower.contains("experience")) {
        return by_years;
    }
    match required_years(&job_lower) {
        Some(0) => 50.0,
        Some(required) => (years as f64 / required as f64 * 100.0).min(100.0),
        None => by_years,
    }
}

/// Education component in [0, 100]: degree level plus a bonus for a
/// computing field.
pub fn education_score(education: &[String]) -> f64 {
    if education.is_empty() {
        return 0.0;
    }
    let text = education.join(" ").to_lowercase();

    let level: f64 = if has_marker(&text, DOCTORATE_MARKERS) {
        100.0
    } else if has_marker(&text, MASTER_MARKERS) {
        85.0
    } else if has_marker(&text, BACHELOR_MARKERS) {
        70.0
    } else {
        0.0
    };

    if has_marker(&text, RELEVANT_FIELDS) {
        (level + 15.0).min(100.0)
    } else {
        level
    }
}

/// `sim×100×0.40 + skill×0.35 + exp×0.15 + edu×0.10`, clamped to [0, 100].
pub fn weighted_score(similarity: f64, skill_match: f64, experience: f64, education: f64) -> f64 {
    let score = similarity * 100.0 * SIMILARITY_WEIGHT
        + skill_match * SKILL_WEIGHT
        + experience * EXPERIENCE_WEIGHT
        + education * EDUCATION_WEIGHT;
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edu(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_experience_zero_years() {
        assert_eq!(experience_score(0, "5+ years of experience"), 0.0);
    }

    #[test]
    fn test_experience_against_requirement() {
        assert_eq!(experience_score(5, "Requires 3+ years of experience"), 100.0);
        assert!((experience_score(2, "4 years experience, 2 year minimum") - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_experience_without_requirement() {
        assert_eq!(experience_score(3, "Backend role, Rust and Go"), 60.0);
        assert_eq!(experience_score(9, "Backend role"), 100.0);
        assert_eq!(experience_score(2, "Relevant experience preferred"), 40.0);
    }

    #[test]
    fn test_experience_zero_requirement() {
        assert_eq!(experience_score(4, "0 years of experience required"), 50.0);
    }

    #[test]
    fn test_education_levels() {
        assert_eq!(education_score(&[]), 0.0);
        assert_eq!(education_score(&edu(&["PhD in Physics"])), 100.0);
        assert_eq!(education_score(&edu(&["Master of Arts in History"])), 85.0);
        assert_eq!(education_score(&edu(&["Bachelor of Arts"])), 70.0);
        assert_eq!(education_score(&edu(&["Bachelor of Science in Computer Science"])), 85.0);
        assert_eq!(education_score(&edu(&["MS in CS"])), 100.0);
        assert_eq!(education_score(&edu(&["Doctorate, Software Engineering"])), 100.0);
    }

    #[test]
    fn test_education_abbreviations_stand_alone() {
        // "ms" inside "systems" is not a master's degree.
        assert_eq!(education_score(&edu(&["Studied systems at Acme College"])), 0.0);
    }

    #[test]
    fn test_weighted_score() {
        let score = weighted_score(0.5, 50.0, 100.0, 70.0);
        assert!((score - (20.0 + 17.5 + 15.0 + 7.0)).abs() < 1e-9);
        assert_eq!(weighted_score(1.0, 100.0, 100.0, 100.0), 100.0);
        assert_eq!(weighted_score(0.0, 0.0, 0.0, 0.0), 0.0);
    }
}
