//! One resume scored against several job postings.

use std::cmp::Ordering;

use crate::models::analysis::{JobComparison, JobPosting, ResumeProfile};
use crate::scoring::score;

pub const UNTITLED_JOB: &str = "Untitled Job";

/// Scores the profile against every posting with a non-blank description,
/// best match first.
pub fn compare_many(profile: &ResumeProfile, jobs: &[JobPosting]) -> Vec<JobComparison> {
    let mut results: Vec<JobComparison> = jobs
        .iter()
        .filter(|job| !job.description.trim().is_empty())
        .map(|job| {
            let scored = score(profile, &job.description);
            let feedback = scored.feedback;
            JobComparison {
                title: job
                    .title
                    .clone()
                    .unwrap_or_else(|| UNTITLED_JOB.to_string()),
                score: feedback.overall_score,
                skill_match: feedback.skill_match_percentage,
                matched_skills: feedback.matched_skills_count,
                missing_skills: feedback.missing_keywords.len(),
                strengths: feedback.strengths,
                improvements: feedback.improvements,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results
}
