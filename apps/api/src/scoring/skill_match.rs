//! Candidate skills vs. job text.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::parsing::skills::is_valid_skill;
use crate::text::tokenizer::tokenize;

/// Canonical skill → accepted surface forms (the canonical name included).
pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("python", &["python", "py", "python3"]),
    ("javascript", &["javascript", "js", "nodejs", "node.js", "node"]),
    ("java", &["java", "jvm"]),
    ("react", &["react", "reactjs", "react.js"]),
    ("angular", &["angular", "angularjs"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("docker", &["docker", "containerization", "containers"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("aws", &["aws", "amazon web services", "ec2", "s3", "lambda"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud", "google cloud platform"]),
    ("sql", &["sql", "mysql", "postgresql", "postgres", "database"]),
    ("nosql", &["nosql", "mongodb", "cassandra", "dynamodb"]),
    ("api", &["api", "rest", "restful", "graphql"]),
    ("ci/cd", &["ci/cd", "cicd", "jenkins", "github actions", "gitlab"]),
    ("machine learning", &["machine learning", "ml", "ai", "artificial intelligence"]),
    ("android", &["android", "android sdk"]),
    ("ios", &["ios", "swift", "objective-c"]),
    ("kotlin", &["kotlin", "kt"]),
];

/// Share of multi-word skill tokens that must appear in the job text.
const PARTIAL_OVERLAP: f64 = 0.7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// `matched / total × 100`.
    pub percentage: f64,
    pub matched: usize,
    pub total: usize,
}

/// Matches candidate skills against a job description.
///
/// A skill counts when, in order: it is a substring of the job text; any
/// variant from a synonym group containing it is; all of its words are job
/// tokens; or, for multi-word skills, at least 70% of its words are.
pub fn match_skills(skills: &[String], job_description: &str) -> SkillMatch {
    let candidates: Vec<String> = skills
        .iter()
        .filter(|s| is_valid_skill(s))
        .map(|s| s.trim().to_lowercase())
        .collect();
    if candidates.is_empty() {
        return SkillMatch::default();
    }

    let job_lower = job_description.to_lowercase();
    let job_tokens = tokenize(job_description);
    let job_tokens = job_tokens.to_set();

    let matched = candidates
        .iter()
        .filter(|skill| skill_matches(skill, &job_lower, &job_tokens))
        .count();
    let total = candidates.len();

    SkillMatch {
        percentage: matched as f64 / total as f64 * 100.0,
        matched,
        total,
    }
}

fn skill_matches(skill: &str, job_lower: &str, job_tokens: &HashSet<&str>) -> bool {
    if job_lower.contains(skill) {
        return true;
    }

    let via_synonym = SYNONYM_GROUPS
        .iter()
        .filter(|(_, variants)| variants.contains(&skill))
        .any(|(_, variants)| variants.iter().any(|v| job_lower.contains(v)));
    if via_synonym {
        return true;
    }

    let words: HashSet<&str> = skill.split_whitespace().collect();
    let present = words.iter().filter(|w| job_tokens.contains(*w)).count();
    if present == words.len() {
        return true;
    }
    words.len() > 1 && present as f64 / words.len() as f64 >= PARTIAL_OVERLAP
}
