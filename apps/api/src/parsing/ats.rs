//! Applicant-tracking-system compatibility heuristics.
//!
//! The report starts at 100, loses points for each missing signal a parser
//! would look for and gains a few for strong ones. Issues and
//! recommendations are recorded pairwise in check order.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::analysis::Experience;

/// Issues and recommendations kept in a report.
pub const MAX_FINDINGS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtsRating {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl AtsRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => AtsRating::Excellent,
            70..=84 => AtsRating::Good,
            50..=69 => AtsRating::Fair,
            _ => AtsRating::NeedsImprovement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub rating: AtsRating,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Static tables
// ────────────────────────────────────────────────────────────────────────────

static SKILLS_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:technical\s+)?skills?\s*:").expect("valid skills header"));

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(19|20)\d{2}\b|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec")
        .expect("valid date pattern")
});

static METRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+[%+]|\$\d+|\d+x").expect("valid metric pattern"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid phone pattern")
});

const DEGREE_MARKERS: &[&str] = &["bachelor", "master", "phd", "degree", "university"];

const ACTION_VERBS: &[&str] = &[
    "achieved", "improved", "developed", "implemented", "designed", "managed", "led",
    "created", "built", "increased", "reduced", "optimized", "established", "launched",
    "delivered", "architected", "engineered",
];

const SUMMARY_MARKERS: &[&str] = &["summary", "objective", "profile", "about"];

const SECTION_HEADERS: &[&str] = &["experience", "education", "skills", "projects", "certifications"];

// ────────────────────────────────────────────────────────────────────────────
// Checker
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Audit {
    score: i32,
    issues: Vec<String>,
    recommendations: Vec<String>,
}

impl Audit {
    fn flag(&mut self, penalty: i32, issue: impl Into<String>, recommendation: &str) {
        self.score -= penalty;
        self.issues.push(issue.into());
        self.recommendations.push(recommendation.to_string());
    }

    fn into_report(mut self) -> AtsReport {
        let score = self.score.clamp(0, 100) as u32;
        self.issues.truncate(MAX_FINDINGS);
        self.recommendations.truncate(MAX_FINDINGS);
        AtsReport {
            score,
            rating: AtsRating::from_score(score),
            issues: self.issues,
            recommendations: self.recommendations,
        }
    }
}

/// Scores how well a parsed resume would survive an ATS import.
pub fn check_ats_compatibility(
    text: &str,
    skills: &[String],
    education: &[String],
    experience: &Experience,
) -> AtsReport {
    let mut audit = Audit {
        score: 100,
        ..Audit::default()
    };
    let text_lower = text.to_lowercase();
    let text_length = text.chars().count();

    // Length
    if text_length < 400 {
        audit.flag(
            25,
            "Resume is too brief - needs more detail",
            "Expand your resume with detailed descriptions of your experience and achievements",
        );
    } else if text_length > 5000 {
        audit.flag(
            10,
            "Resume is too lengthy",
            "Condense to 1-2 pages focusing on most relevant experience",
        );
    }

    // Skills section
    let has_skills_section = SKILLS_HEADER_RE.is_match(&text_lower);
    match skills.len() {
        0 if !has_skills_section => audit.flag(
            25,
            "No technical skills section detected",
            "Add a dedicated Skills section with specific technologies and tools",
        ),
        0 => audit.flag(
            10,
            "Skills section found but couldn't parse specific technologies",
            "Use standard technology names (e.g., Python, JavaScript, AWS)",
        ),
        1..=2 => audit.flag(
            15,
            "Limited technical skills detected - add more relevant technologies",
            "List 8-12 technical skills including languages, frameworks, and tools",
        ),
        3..=5 => audit.flag(
            5,
            "Good start on skills, but could list more",
            "Expand skills section with additional relevant technologies",
        ),
        6..=7 => {}
        _ => audit.score += 5,
    }

    // Education
    if education.is_empty() {
        audit.flag(
            15,
            "No education section found",
            "Include degree, major, university, and graduation year",
        );
    } else {
        let education_text = education.join(" ").to_lowercase();
        if DEGREE_MARKERS.iter().any(|m| education_text.contains(m)) {
            audit.score += 5;
        }
    }

    // Experience with dates
    if experience.positions.is_empty() {
        audit.flag(
            20,
            "No work experience details detected",
            "Add work history with company names, roles, dates, and responsibilities",
        );
    } else if DATE_RE.find_iter(text).count() < 2 {
        audit.flag(
            10,
            "Missing dates in experience section",
            "Include start and end dates for each position (MM/YYYY format)",
        );
    }

    // Action verbs
    let verb_count = ACTION_VERBS.iter().filter(|v| text_lower.contains(*v)).count();
    if verb_count < 3 {
        audit.flag(
            15,
            "Limited use of strong action verbs",
            "Start bullet points with action verbs like 'developed', 'led', 'improved'",
        );
    } else if verb_count >= 8 {
        audit.score += 5;
    }

    // Quantified achievements
    if METRIC_RE.find_iter(text).count() < 2 {
        audit.flag(
            10,
            "Few quantifiable achievements",
            "Add metrics and numbers to demonstrate impact (e.g., 'improved performance by 40%')",
        );
    }

    // Contact details
    if !(text.contains('@') && text.contains('.')) {
        audit.flag(
            15,
            "No email address found",
            "Add professional email address at the top of resume",
        );
    }
    if !PHONE_RE.is_match(text) {
        audit.flag(
            5,
            "No phone number detected",
            "Include phone number in contact section",
        );
    }

    // Summary
    let has_summary = SUMMARY_MARKERS.iter().any(|m| text_lower.contains(m));
    if !has_summary && text_length > 500 {
        audit.flag(
            5,
            "No professional summary section",
            "Consider adding a brief professional summary at the top",
        );
    }

    // Vocabulary diversity, only on substantial text
    let words: Vec<&str> = text_lower.split_whitespace().collect();
    if words.len() > 100 {
        let unique: HashSet<&str> = words.iter().copied().collect();
        if (unique.len() as f64) / (words.len() as f64) < 0.3 {
            audit.flag(
                10,
                "Content appears repetitive",
                "Diversify vocabulary and avoid excessive repetition",
            );
        }
    }

    // Section headers
    let headers_found = SECTION_HEADERS.iter().filter(|h| text_lower.contains(*h)).count();
    if headers_found < 3 {
        audit.flag(
            10,
            "Missing standard section headers",
            "Use clear section headers: Experience, Education, Skills, etc.",
        );
    }

    audit.into_report()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_resume() -> String {
        let mut text = String::from(
            "Jane Doe | jane.doe@example.com | (555) 123-4567\n\
             Summary: Backend engineer.\n\
             Experience\n\
             Senior Software Engineer, Acme, Jan 2019 - Dec 2023\n\
             - Developed and launched a billing service, reduced latency by 40%\n\
             - Led a team of 6, improved throughput 3x, built CI pipelines\n\
             - Designed, implemented and optimized search; delivered 20+ features\n\
             - Architected and engineered data pipelines; achieved $200 savings, \
             increased uptime, created dashboards, managed releases, established on-call\n\
             Education\n\
             Bachelor of Science in Computer Science, University of Toronto, 2018\n\
             Skills: Python, Rust, Go, Docker, Kubernetes, AWS, PostgreSQL, Redis\n\
             Projects\n",
        );
        for i in 0..20 {
            text.push_str(&format!("Project number {i} shipped distinct component variant{i}. "));
        }
        text
    }

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill{i}")).collect()
    }

    #[test]
    fn test_strong_resume_is_excellent() {
        let experience = Experience {
            years: 5,
            positions: vec!["software engineer".into(), "senior".into()],
        };
        let education = vec!["Bachelor of Science in Computer Science".to_string()];
        let report = check_ats_compatibility(&strong_resume(), &skills(8), &education, &experience);
        assert_eq!(report.score, 100, "issues: {:?}", report.issues);
        assert_eq!(report.rating, AtsRating::Excellent);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_empty_resume_clamps_to_zero() {
        let report = check_ats_compatibility("", &[], &[], &Experience::default());
        assert_eq!(report.score, 0);
        assert_eq!(report.rating, AtsRating::NeedsImprovement);
        assert_eq!(report.issues.len(), MAX_FINDINGS);
        assert_eq!(report.recommendations.len(), MAX_FINDINGS);
        assert_eq!(report.issues[0], "Resume is too brief - needs more detail");
    }

    #[test]
    fn test_skills_section_without_parsed_skills() {
        let report = check_ats_compatibility("Skills: ", &[], &[], &Experience::default());
        assert!(report
            .issues
            .iter()
            .any(|i| i.starts_with("Skills section found")));
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(AtsRating::from_score(85), AtsRating::Excellent);
        assert_eq!(AtsRating::from_score(84), AtsRating::Good);
        assert_eq!(AtsRating::from_score(70), AtsRating::Good);
        assert_eq!(AtsRating::from_score(50), AtsRating::Fair);
        assert_eq!(AtsRating::from_score(49), AtsRating::NeedsImprovement);
    }

    #[test]
    fn test_rating_serializes_with_space() {
        let json = serde_json::to_string(&AtsRating::NeedsImprovement).unwrap();
        assert_eq!(json, "\"Needs Improvement\"");
    }
}
