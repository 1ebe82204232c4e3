//! Skill extraction: five independent passes over the resume text, each
//! filtered through `is_valid_skill`, then merged, deduplicated and ranked.
//!
//! Passes:
//! 1. domain vocabulary (whole-word, lowercased text)
//! 2. labeled sections ("Skills:", "Technologies Used", ...), see `sections`
//! 3. mixed-case compound names (verbatim)
//! 4. upper-case acronyms from a whitelist
//! 5. `name.js` dotted framework names

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::parsing::sections::labeled_section_skills;
use crate::parsing::vocabulary::{
    skills_for, COMPOUND_TECH_NAMES, INVALID_SKILLS, TECH_ACRONYMS,
};
use crate::text::domain::{detect_domain, Domain};

/// Upper bound on skills kept per resume.
pub const MAX_SKILLS: usize = 50;

/// Longest `name.js` token accepted by the dotted-name pass.
const MAX_DOTTED_NAME_LEN: usize = 12;

static VOCABULARY_PATTERNS: Lazy<HashMap<Domain, Vec<(&'static str, Regex)>>> =
    Lazy::new(|| {
        Domain::ALL
            .into_iter()
            .map(|domain| {
                let patterns = skills_for(domain)
                    .iter()
                    .map(|skill| {
                        let re = Regex::new(&format!(r"\b{}\b", regex::escape(skill)))
                            .expect("escaped vocabulary term is a valid pattern");
                        (*skill, re)
                    })
                    .collect();
                (domain, patterns)
            })
            .collect()
    });

static ACRONYM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z]{2,6}(?:/[A-Z]{2,6})?)\b").expect("valid acronym pattern")
});

static DOTTED_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([a-z]+\.js)\b").expect("valid dotted-name pattern"));

static INVALID: Lazy<HashSet<&'static str>> = Lazy::new(|| INVALID_SKILLS.iter().copied().collect());

const TECH_GERUNDS: &[&str] = &[
    "testing", "programming", "debugging", "logging", "caching", "parsing", "rendering",
    "scaling", "monitoring", "computing", "processing", "engineering", "modeling", "training",
];
const TECH_TION_WORDS: &[&str] = &[
    "authentication", "authorization", "implementation", "configuration", "automation",
    "virtualization", "integration", "migration",
];
const TECH_MENT_WORDS: &[&str] = &["development", "deployment", "environment", "management"];
const TECH_ANCE_WORDS: &[&str] = &["performance", "intelligence", "compliance"];
const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ive", "able", "ible", "ous", "ent", "ant"];
const FILLER_WORDS: &[&str] = &[
    "clinical", "others", "matters", "details", "various", "multiple", "several", "strong",
    "excellent", "great", "issues", "needs", "results", "benefits", "values", "people", "teams",
    "ways",
];

const TECH_PARTS: &[&str] = &[
    "script", "base", "flow", "ware", "sys", "sql", "data", "web", "net", "cloud", "micro",
    "api", "dev", "ops", "bot", "app", "mobile", "server", "client", "proto", "graph",
];
const LANGUAGE_PARTS: &[&str] = &[
    "python", "java", "ruby", "rust", "swift", "kotlin", "scala", "perl", "php", "bash",
    "shell", "react", "angular", "vue", "node", "django", "flask", "spring", "docker",
    "kubernetes",
];

fn ends_with_any(s: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| s.ends_with(suffix))
}

fn contains_any(s: &str, parts: &[&str]) -> bool {
    parts.iter().any(|part| s.contains(part))
}

/// Technical-shape heuristic: the veto that rescues a term flagged by the
/// soft-skill morphology rules.
pub fn looks_like_tech_skill(skill: &str) -> bool {
    let lower = skill.trim().to_lowercase();
    let len = lower.chars().count();

    if lower.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    if lower.contains('.') && len <= 15 {
        return true;
    }
    if lower.contains('-') && len >= 5 {
        return true;
    }
    if lower.contains('+') || lower.contains('#') {
        return true;
    }

    let raw_len = skill.chars().count();
    if (2..=5).contains(&raw_len) && skill.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
    {
        return true;
    }

    contains_any(&lower, TECH_PARTS) || contains_any(&lower, LANGUAGE_PARTS)
}

/// Soft-skill morphology: gerunds, abstract nouns and adjectives that are
/// usually not skills. Each rule carries its own technical exceptions.
fn has_soft_skill_shape(lower: &str) -> bool {
    if lower.ends_with("ing") && !contains_any(lower, TECH_GERUNDS) {
        return true;
    }
    if ends_with_any(lower, &["ness", "ship", "hood", "dom"]) && !lower.contains("relationship") {
        return true;
    }
    if ends_with_any(lower, &["tion", "sion"]) && !contains_any(lower, TECH_TION_WORDS) {
        return true;
    }
    if lower.ends_with("ment") && !contains_any(lower, TECH_MENT_WORDS) {
        return true;
    }
    if ends_with_any(lower, &["ance", "ence"]) && !contains_any(lower, TECH_ANCE_WORDS) {
        return true;
    }
    if ends_with_any(lower, ADJECTIVE_SUFFIXES) {
        return true;
    }
    FILLER_WORDS.contains(&lower)
}

/// Returns true if a candidate string is plausibly a skill.
///
/// Morphology is checked first; a soft-skill hit only survives when the
/// technical-shape heuristic also fires.
pub fn is_valid_skill(skill: &str) -> bool {
    let lower = skill.trim().to_lowercase();

    if INVALID.contains(lower.as_str()) || lower.chars().count() < 2 {
        return false;
    }
    if !skill.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    if has_soft_skill_shape(&lower) && !looks_like_tech_skill(skill) {
        return false;
    }

    true
}

/// Pass 1: whole-word matches of the domain vocabulary.
pub fn vocabulary_skills(text_lower: &str, domain: Domain) -> Vec<String> {
    VOCABULARY_PATTERNS
        .get(&domain)
        .map(|patterns| {
            patterns
                .iter()
                .filter(|(_, re)| re.is_match(text_lower))
                .map(|(skill, _)| skill.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Pass 3: mixed-case technology names found verbatim.
pub fn compound_name_skills(text: &str) -> Vec<String> {
    COMPOUND_TECH_NAMES
        .iter()
        .filter(|name| text.contains(*name))
        .map(|name| name.to_string())
        .collect()
}

/// Pass 4: whitelisted upper-case acronyms, optionally slash-joined ("CI/CD").
pub fn acronym_skills(text: &str) -> Vec<String> {
    ACRONYM_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|acronym| TECH_ACRONYMS.contains(acronym))
        .map(str::to_string)
        .collect()
}

/// Pass 5: lowercase `name.js` tokens.
pub fn dotted_name_skills(text_lower: &str) -> Vec<String> {
    DOTTED_NAME_RE
        .find_iter(text_lower)
        .map(|m| m.as_str())
        .filter(|name| name.chars().count() <= MAX_DOTTED_NAME_LEN)
        .map(str::to_string)
        .collect()
}

/// Merges candidate lists in order, keeping the first casing seen for each
/// case-insensitive skill.
pub fn dedup_case_insensitive<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|skill| seen.insert(skill.trim().to_lowercase()))
        .collect()
}

/// Longest first, then case-insensitive alphabetical; capped at `MAX_SKILLS`.
pub fn rank_skills(mut skills: Vec<String>) -> Vec<String> {
    skills.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
    });
    skills.truncate(MAX_SKILLS);
    skills
}

/// Extracts a ranked, deduplicated skill list from resume text.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let domain = detect_domain(text);

    let passes = [
        vocabulary_skills(&text_lower, domain),
        labeled_section_skills(text),
        compound_name_skills(text),
        acronym_skills(text),
        dotted_name_skills(&text_lower),
    ];

    let valid = passes.into_iter().flatten().filter_map(|skill| {
        let trimmed = skill.trim();
        (trimmed.chars().count() >= 2 && is_valid_skill(trimmed)).then(|| trimmed.to_string())
    });

    let skills = rank_skills(dedup_case_insensitive(valid));
    debug!(domain = domain.as_str(), count = skills.len(), "Extracted skills");
    skills
}
