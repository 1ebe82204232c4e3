//! Template cover letter assembled from a parsed resume and a job text.

use serde::{Deserialize, Serialize};

use crate::models::analysis::ResumeProfile;
use crate::text::mentions;

/// Skills considered when looking for ones the job names.
const SKILL_WINDOW: usize = 15;
const TOP_SKILLS: usize = 5;

/// Technical areas, the words that signal them, and the capability phrase
/// used when the job touches them. Order decides which two are quoted.
const TECH_AREAS: &[(&str, &[&str], &str)] = &[
    (
        "backend",
        &["backend", "server", "api", "database", "sql", "python", "java", "node"],
        "building robust server-side applications",
    ),
    (
        "frontend",
        &["frontend", "react", "angular", "vue", "javascript", "ui", "ux"],
        "creating engaging user interfaces",
    ),
    (
        "cloud",
        &["aws", "azure", "gcp", "cloud", "serverless", "lambda", "docker", "kubernetes"],
        "designing scalable cloud architectures",
    ),
    (
        "mobile",
        &["android", "ios", "mobile", "swift", "kotlin", "react native"],
        "developing mobile applications",
    ),
    (
        "data",
        &["data", "analytics", "machine learning", "ml", "ai", "tensorflow", "spark"],
        "implementing data-driven solutions",
    ),
    (
        "devops",
        &["devops", "ci/cd", "jenkins", "gitlab", "terraform", "ansible"],
        "automating deployment pipelines",
    ),
];

const SCALE_MARKERS: &[&str] = &["scale", "scalable", "performance", "optimize"];
const TEAM_MARKERS: &[&str] = &["agile", "scrum", "team", "collaboration"];
const DEGREE_MARKERS: &[&str] = &["bachelor", "master", "phd", "degree"];
const COMPUTING_FIELDS: &[&str] = &["computer science", "software", "engineering", "cs"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetter {
    pub opening: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub closing: String,
    pub full_text: String,
}

/// Areas the job description touches, in table order.
pub fn relevant_areas(job_lower: &str) -> Vec<&'static str> {
    TECH_AREAS
        .iter()
        .filter(|(_, keywords, _)| keywords.iter().any(|k| mentions(job_lower, k)))
        .map(|(area, _, _)| *area)
        .collect()
}

fn area_phrase(area: &str) -> Option<&'static str> {
    TECH_AREAS
        .iter()
        .find(|(name, _, _)| *name == area)
        .map(|(_, _, phrase)| *phrase)
}

/// Skills to quote: the ones the job names if there are at least five of
/// them, otherwise simply the resume's leading skills.
fn top_skills<'a>(skills: &'a [String], job_lower: &str) -> Vec<&'a str> {
    let named: Vec<&str> = skills
        .iter()
        .take(SKILL_WINDOW)
        .filter(|s| job_lower.contains(&s.to_lowercase()))
        .map(String::as_str)
        .collect();
    if named.len() >= TOP_SKILLS {
        named.into_iter().take(TOP_SKILLS).collect()
    } else {
        skills.iter().take(TOP_SKILLS).map(String::as_str).collect()
    }
}

fn opening_paragraph(years: u32) -> String {
    let mut p = String::from("I am writing to express my strong interest in this position. ");
    if years >= 3 {
        p.push_str(&format!(
            "With over {years} years of professional experience in software development, "
        ));
    } else if years >= 1 {
        p.push_str(&format!(
            "With {years}+ years of hands-on experience in software engineering, "
        ));
    } else {
        p.push_str("As a passionate software developer with a strong technical foundation, ");
    }
    p.push_str(
        "I am excited about the opportunity to contribute to your team and help drive innovative solutions.",
    );
    p
}

fn skills_paragraph(top: &[&str], areas: &[&str]) -> String {
    let mut p = String::from("My technical expertise aligns well with your requirements. ");
    if top.is_empty() {
        p.push_str(
            "I have developed a comprehensive skill set that directly addresses your technical needs.",
        );
        return p;
    }

    let mut list = top.iter().take(3).copied().collect::<Vec<_>>().join(", ");
    if let Some(fourth) = top.get(3) {
        list.push_str(&format!(", and {fourth}"));
    }
    p.push_str(&format!("I have strong proficiency in {list}, "));

    let capabilities: Vec<&str> = areas.iter().take(2).filter_map(|a| area_phrase(a)).collect();
    if capabilities.is_empty() {
        p.push_str("which I have successfully applied in various challenging projects.");
    } else {
        p.push_str(&format!(
            "which I have successfully applied in {}.",
            capabilities.join(" and ")
        ));
    }
    p
}

fn experience_paragraph(years: u32, positions: &[String], job_lower: &str) -> String {
    if years >= 2 {
        let mut p = String::from(
            "Throughout my professional journey, I have consistently delivered high-quality solutions \
             and collaborated effectively with cross-functional teams. ",
        );
        if !positions.is_empty() {
            let roles = positions.iter().take(2).cloned().collect::<Vec<_>>().join(", ");
            p.push_str(&format!("My experience includes working on {roles}, "));
        }
        p.push_str("where I focused on writing clean, maintainable code and following best practices. ");
        if SCALE_MARKERS.iter().any(|m| job_lower.contains(m)) {
            p.push_str(
                "I have a proven track record of optimizing application performance and building scalable systems. ",
            );
        }
        if TEAM_MARKERS.iter().any(|m| job_lower.contains(m)) {
            p.push_str(
                "I thrive in agile environments and excel at collaborating with diverse teams to achieve project goals.",
            );
        }
        p
    } else if years >= 1 {
        "In my professional experience, I have gained hands-on expertise in software development \
         and contributed to meaningful projects. I am eager to bring my technical skills and \
         enthusiasm to your team while continuing to grow as a developer."
            .to_string()
    } else {
        "Through academic projects and practical applications, I have developed strong \
         problem-solving abilities and a solid understanding of software development principles. \
         I am eager to apply my knowledge and contribute to real-world challenges at your organization."
            .to_string()
    }
}

fn education_paragraph(education: &[String]) -> String {
    let text = education.join(" ").to_lowercase();
    if !DEGREE_MARKERS.iter().any(|m| text.contains(m)) {
        return String::new();
    }
    let field = if COMPUTING_FIELDS.iter().any(|f| mentions(&text, f)) {
        "Computer Science and Software Engineering "
    } else {
        "technology "
    };
    format!(
        "My educational background in {field}has provided me with a strong theoretical foundation, \
         which I complement with practical, hands-on experience. "
    )
}

const CLOSING: &str = "I am excited about the prospect of joining your team and contributing to \
    your innovative projects. I am confident that my technical skills, problem-solving abilities, \
    and passion for creating quality software make me a strong fit for this role. I would welcome \
    the opportunity to discuss how I can contribute to your team's success.";

pub fn generate_cover_letter(profile: &ResumeProfile, job_description: &str) -> CoverLetter {
    let job_lower = job_description.to_lowercase();
    let years = profile.experience.years;

    let areas = relevant_areas(&job_lower);
    let top = top_skills(&profile.skills, &job_lower);

    let opening = opening_paragraph(years);
    let skills = skills_paragraph(&top, &areas);
    let experience = experience_paragraph(years, &profile.experience.positions, &job_lower);
    let education = education_paragraph(&profile.education);
    let closing = CLOSING.to_string();

    let full_text = [&opening, &skills, &experience, &education, &closing]
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    CoverLetter {
        opening,
        skills,
        experience,
        education,
        closing,
        full_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Experience;
    use crate::parsing::ats::{AtsRating, AtsReport};

    fn profile(skills: &[&str], years: u32, positions: &[&str], education: &[&str]) -> ResumeProfile {
        let strings = |l: &[&str]| l.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        ResumeProfile {
            skills: strings(skills),
            education: strings(education),
            experience: Experience {
                years,
                positions: strings(positions),
            },
            ats_score: AtsReport {
                score: 70,
                rating: AtsRating::Good,
                issues: vec![],
                recommendations: vec![],
            },
            raw_text_length: 0,
        }
    }

    #[test]
    fn test_tone_follows_years() {
        let senior = generate_cover_letter(&profile(&[], 6, &[], &[]), "");
        assert!(senior.opening.contains("With over 6 years of professional experience"));
        let mid = generate_cover_letter(&profile(&[], 1, &[], &[]), "");
        assert!(mid.opening.contains("With 1+ years of hands-on experience"));
        let junior = generate_cover_letter(&profile(&[], 0, &[], &[]), "");
        assert!(junior.opening.contains("As a passionate software developer"));
        assert!(junior.experience.starts_with("Through academic projects"));
    }

    #[test]
    fn test_skills_paragraph_lists_four() {
        let p = profile(&["Python", "Docker", "AWS", "Rust", "Go", "Kafka"], 3, &[], &[]);
        let letter = generate_cover_letter(&p, "Backend role on AWS with Docker");
        assert!(letter
            .skills
            .contains("I have strong proficiency in Python, Docker, AWS, and Rust, "));
        assert!(letter.skills.contains(
            "building robust server-side applications and designing scalable cloud architectures."
        ));
    }

    #[test]
    fn test_skills_paragraph_without_skills() {
        let letter = generate_cover_letter(&profile(&[], 0, &[], &[]), "Painter wanted");
        assert!(letter.skills.ends_with("directly addresses your technical needs."));
    }

    #[test]
    fn test_experience_paragraph_sentences() {
        let p = profile(&["Rust"], 4, &["software engineer", "lead", "senior"], &[]);
        let letter = generate_cover_letter(&p, "Scalable services, agile team");
        assert!(letter
            .experience
            .contains("My experience includes working on software engineer, lead, "));
        assert!(letter.experience.contains("optimizing application performance"));
        assert!(letter.experience.contains("I thrive in agile environments"));
    }

    #[test]
    fn test_education_paragraph_only_with_degree() {
        let none = generate_cover_letter(&profile(&[], 2, &[], &["University of Oslo"]), "");
        assert!(none.education.is_empty());
        assert!(!none.full_text.contains("\n\n\n"));
        assert_eq!(none.full_text.split("\n\n").count(), 4);

        let cs = generate_cover_letter(
            &profile(&[], 2, &[], &["Bachelor of Science in Computer Science"]),
            "",
        );
        assert!(cs.education.contains("Computer Science and Software Engineering"));
        assert_eq!(cs.full_text.split("\n\n").count(), 5);
    }

    #[test]
    fn test_areas_in_table_order() {
        let areas = relevant_areas("kubernetes, react native and sql");
        assert_eq!(areas, vec!["backend", "frontend", "cloud", "mobile"]);
        assert!(relevant_areas("a quiet build").is_empty());
    }
}
