//! Resume parsing: plain text in, [`ResumeProfile`] out.

pub mod ats;
pub mod education;
pub mod experience;
pub mod sections;
pub mod skills;
pub mod vocabulary;

use tracing::debug;

use crate::models::analysis::ResumeProfile;

/// Runs every extractor over the resume text. Total over any input.
pub fn parse(text: &str) -> ResumeProfile {
    let skills = skills::extract_skills(text);
    let education = education::extract_education(text);
    let experience = experience::extract_experience(text);
    let ats_score = ats::check_ats_compatibility(text, &skills, &education, &experience);

    debug!(
        skills = skills.len(),
        education = education.len(),
        years = experience.years,
        ats = ats_score.score,
        "parsed resume"
    );

    ResumeProfile {
        skills,
        education,
        experience,
        ats_score,
        raw_text_length: text.chars().count(),
    }
}
