//! Resume vs. job description scoring.
//!
//! `score` is the whole pipeline: similarity, skill match, the experience and
//! education components, the weighted composite and the feedback report.
//! Everything here is synchronous and pure.

pub mod compare;
pub mod composite;
pub mod cover_letter;
pub mod feedback;
pub mod similarity;
pub mod skill_match;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::analysis::ResumeProfile;
use crate::text::technical::extract_keywords;

use self::feedback::{generate_feedback, FeedbackReport};
use self::skill_match::match_skills;

/// Job keywords extracted for the matched-skill comparison.
pub const JOB_KEYWORDS: usize = 20;

/// Component values behind a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// TF-IDF similarity with technical boost, in [0, 1].
    pub similarity: f64,
    pub skill_match: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub final_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub feedback: FeedbackReport,
    pub breakdown: ScoreBreakdown,
}

/// Wire shape of a scoring result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResults {
    pub compatibility_score: f64,
    pub skill_match: f64,
    pub feedback: FeedbackReport,
    pub breakdown: ScoreBreakdown,
}

impl From<Scored> for ScoreResults {
    fn from(scored: Scored) -> Self {
        ScoreResults {
            compatibility_score: scored.feedback.overall_score,
            skill_match: scored.feedback.skill_match_percentage,
            feedback: scored.feedback,
            breakdown: scored.breakdown,
        }
    }
}

/// Scores a parsed resume against a job description.
pub fn score(profile: &ResumeProfile, job_description: &str) -> Scored {
    let resume_text = composite::resume_text(profile);
    let similarity = similarity::enhanced_similarity(&resume_text, job_description);
    let skills = match_skills(&profile.skills, job_description);
    let experience_score = composite::experience_score(profile.experience.years, job_description);
    let education_score = composite::education_score(&profile.education);

    let final_score = composite::weighted_score(
        similarity,
        skills.percentage,
        experience_score,
        education_score,
    );

    let job_keywords = extract_keywords(job_description, JOB_KEYWORDS);
    let feedback = generate_feedback(final_score, &skills, profile, &job_keywords, job_description);

    debug!(
        similarity,
        skill_match = skills.percentage,
        experience_score,
        education_score,
        final_score,
        "scored resume"
    );

    Scored {
        feedback,
        breakdown: ScoreBreakdown {
            similarity,
            skill_match: skills.percentage,
            experience_score,
            education_score,
            final_score,
        },
    }
}
