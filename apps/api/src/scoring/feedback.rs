//! Human-readable feedback built from a finished score.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::analysis::ResumeProfile;
use crate::parsing::skills::is_valid_skill;
use crate::scoring::skill_match::SkillMatch;
use crate::text::mentions;

pub const MAX_MISSING_KEYWORDS: usize = 8;
pub const MAX_MATCHED_SKILLS: usize = 15;
/// Only the leading job keywords are compared against the resume's skills.
pub const JOB_KEYWORD_WINDOW: usize = 20;

/// Technical terms worth reporting as missing when a job mentions them.
pub const TECH_WHITELIST: &[&str] = &[
    // languages
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust", "php",
    "swift", "kotlin", "scala", "r", "matlab", "perl", "c", "objective-c",
    // frameworks
    "react", "angular", "vue", "django", "flask", "spring", "express", "nextjs", "node.js",
    "nodejs", "node", "fastapi", "laravel", "rails", ".net", "asp.net",
    // cloud and devops
    "aws", "azure", "gcp", "docker", "kubernetes", "k8s", "terraform", "ansible", "jenkins",
    "gitlab", "github", "circleci", "cloudformation", "lambda", "ec2", "s3",
    // databases
    "sql", "mysql", "postgresql", "postgres", "mongodb", "redis", "dynamodb", "cassandra",
    "elasticsearch", "oracle", "sqlite", "mariadb",
    // ml and data
    "tensorflow", "pytorch", "keras", "pandas", "numpy", "spark", "hadoop", "scikit-learn",
    "scikit", "machine learning", "ml", "deep learning", "ai",
    // testing
    "junit", "pytest", "jest", "mocha", "selenium", "cypress", "testng",
    // other
    "graphql", "rest", "restful", "api", "microservices", "git", "linux", "unix", "bash",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub overall_score: f64,
    pub skill_match_percentage: f64,
    pub matched_skills_count: usize,
    pub total_resume_skills: usize,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_skills: Vec<String>,
    pub resume_skills: Vec<String>,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Valid resume skills that equal, contain, or sit inside one of the
/// leading job keywords. Uncapped; the report truncates.
pub fn matched_skills(skills: &[String], job_keywords: &[String]) -> Vec<String> {
    let keywords: HashSet<String> = job_keywords
        .iter()
        .take(JOB_KEYWORD_WINDOW)
        .map(|k| k.to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|s| is_valid_skill(s))
        .filter(|s| seen.insert(s.to_lowercase()))
        .filter(|s| {
            let lower = s.to_lowercase();
            keywords.contains(&lower)
                || keywords
                    .iter()
                    .any(|k| lower.contains(k.as_str()) || k.contains(lower.as_str()))
        })
        .cloned()
        .collect()
}

/// Whitelisted terms the job mentions that the resume does not list,
/// most specific (longest) first.
pub fn missing_keywords(skills: &[String], job_description: &str) -> Vec<String> {
    let job_lower = job_description.to_lowercase();
    let have: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut missing: Vec<&str> = TECH_WHITELIST
        .iter()
        .copied()
        .filter(|term| mentions(&job_lower, term) && !have.contains(*term))
        .collect();
    missing.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    missing.dedup();
    missing
        .into_iter()
        .take(MAX_MISSING_KEYWORDS)
        .map(str::to_string)
        .collect()
}

fn strengths(score: f64, skill_match: f64, matched: usize, years: u32) -> Vec<String> {
    let mut out = Vec::new();

    if score >= 75.0 {
        out.push("Excellent match - Strong alignment with job requirements".to_string());
    } else if score >= 60.0 {
        out.push("Good match with job requirements".to_string());
    }

    if skill_match >= 70.0 {
        out.push("Excellent skill set alignment".to_string());
    } else if skill_match >= 50.0 {
        out.push("Good technical skills coverage".to_string());
    }

    if matched > 8 {
        out.push(format!("{matched} highly relevant skills identified"));
    } else if matched > 4 {
        out.push(format!("{matched} relevant skills matched"));
    }

    if years >= 5 {
        out.push(format!("Strong experience background ({years}+ years)"));
    } else if years >= 2 {
        out.push(format!("Good experience level ({years}+ years)"));
    }

    out
}

fn improvements(
    score: f64,
    skill_match: f64,
    matched: usize,
    years: u32,
    has_education: bool,
) -> Vec<String> {
    let mut out = Vec::new();
    if score < 60.0 {
        out.push("Tailor your resume to emphasize skills mentioned in the job description".to_string());
    }
    if skill_match < 50.0 {
        out.push("Add or highlight more technical skills from the job requirements".to_string());
    }
    if matched < 5 {
        out.push("Showcase more skills that directly align with the position".to_string());
    }
    if years < 2 {
        out.push("Highlight relevant projects and internships to demonstrate experience".to_string());
    }
    if !has_education {
        out.push("Include your educational background and relevant coursework".to_string());
    }
    out
}

/// Assembles the report. Strength and improvement thresholds look at the
/// full matched-skill list; the stored list is capped afterwards.
pub fn generate_feedback(
    score: f64,
    skills: &SkillMatch,
    profile: &ResumeProfile,
    job_keywords: &[String],
    job_description: &str,
) -> FeedbackReport {
    let mut matched = matched_skills(&profile.skills, job_keywords);
    let years = profile.experience.years;

    let strengths = strengths(score, skills.percentage, matched.len(), years);
    let improvements = improvements(
        score,
        skills.percentage,
        matched.len(),
        years,
        !profile.education.is_empty(),
    );
    matched.truncate(MAX_MATCHED_SKILLS);

    FeedbackReport {
        overall_score: round2(score),
        skill_match_percentage: round2(skills.percentage),
        matched_skills_count: skills.matched,
        total_resume_skills: skills.total,
        strengths,
        improvements,
        missing_keywords: missing_keywords(&profile.skills, job_description),
        matched_skills: matched,
        resume_skills: profile.skills.clone(),
    }
}
