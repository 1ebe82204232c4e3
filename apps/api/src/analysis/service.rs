//! Store-facing analysis pipeline.
//!
//! Handlers resolve the resume text (S3 + extraction) and hand it here; every
//! function below only needs a [`RecordStore`], which keeps the pipeline
//! testable against the in-memory store.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::documents::file_name;
use crate::errors::AppError;
use crate::models::analysis::{
    AnalysisRecord, AnalysisStatus, JobComparison, JobPosting, ScoreUpdate,
};
use crate::parsing::parse;
use crate::scoring::compare::compare_many;
use crate::scoring::cover_letter::{generate_cover_letter, CoverLetter};
use crate::scoring::{score, ScoreResults};
use crate::store::RecordStore;

/// Characters of the job description kept on a scored record.
pub const STORED_JOB_DESCRIPTION_CHARS: usize = 500;

/// `<file name>_<YYYYmmddHHMMSS>`.
pub fn analysis_id(resume_key: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}", file_name(resume_key), now.format("%Y%m%d%H%M%S"))
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Parses resume text off the executor and stores the resulting record.
pub async fn parse_and_store(
    store: &dyn RecordStore,
    resume_key: &str,
    text: String,
) -> Result<AnalysisRecord, AppError> {
    let profile = tokio::task::spawn_blocking(move || parse(&text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in parsing: {e}")))?;

    let now = Utc::now();
    let record = AnalysisRecord {
        analysis_id: analysis_id(resume_key, now),
        resume_key: resume_key.to_string(),
        profile,
        parsed_at: now,
        status: AnalysisStatus::Parsed,
        score: None,
        feedback: None,
        job_description: None,
        scored_at: None,
    };
    store.put(&record).await?;

    info!(
        "Parsed {} ({} skills, ATS {})",
        record.analysis_id,
        record.profile.skills.len(),
        record.profile.ats_score.score
    );
    Ok(record)
}

/// Scores a stored record and merges the result back into it.
pub async fn score_and_store(
    store: &dyn RecordStore,
    analysis_id: &str,
    job_description: &str,
) -> Result<ScoreResults, AppError> {
    let record = store.get(analysis_id).await?;
    let scored = score(&record.profile, job_description);

    let update = ScoreUpdate {
        score: scored.feedback.overall_score,
        feedback: scored.feedback.clone(),
        job_description: truncate_chars(job_description, STORED_JOB_DESCRIPTION_CHARS),
        scored_at: Utc::now(),
        status: AnalysisStatus::Completed,
    };
    let fields = serde_json::to_value(&update).map_err(|e| AppError::Internal(e.into()))?;
    store.update(analysis_id, fields).await?;

    info!(
        "Scored {analysis_id}: {:.2} (skill match {:.2})",
        scored.feedback.overall_score, scored.feedback.skill_match_percentage
    );
    Ok(scored.into())
}

/// Parse + score in one go, as `/analyze` does.
pub async fn analyze(
    store: &dyn RecordStore,
    resume_key: &str,
    text: String,
    job_description: &str,
) -> Result<(AnalysisRecord, ScoreResults), AppError> {
    let record = parse_and_store(store, resume_key, text).await?;
    let results = score_and_store(store, &record.analysis_id, job_description).await?;
    Ok((record, results))
}

/// Parses once, then ranks the resume against every posting.
pub async fn batch_compare(
    store: &dyn RecordStore,
    resume_key: &str,
    text: String,
    jobs: &[JobPosting],
) -> Result<Vec<JobComparison>, AppError> {
    let record = parse_and_store(store, resume_key, text).await?;
    let results = compare_many(&record.profile, jobs);
    info!(
        "Compared {} against {} job(s)",
        record.analysis_id,
        results.len()
    );
    Ok(results)
}

pub async fn cover_letter(
    store: &dyn RecordStore,
    resume_key: &str,
    text: String,
    job_description: &str,
) -> Result<(AnalysisRecord, CoverLetter), AppError> {
    let record = parse_and_store(store, resume_key, text).await?;
    let letter = generate_cover_letter(&record.profile, job_description);
    Ok((record, letter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    const RESUME: &str = "Senior Software Engineer with 6 years of experience.\n\
                          Skills: Python, Docker, AWS, PostgreSQL\n\
                          Master of Science in Computer Science";

    #[test]
    fn test_analysis_id_format() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 8, 7).unwrap();
        assert_eq!(
            analysis_id("resumes/2024/05/01/abc_cv.pdf", now),
            "abc_cv.pdf_20240501090807"
        );
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[tokio::test]
    async fn test_parse_then_score_updates_record() {
        let store = MemoryStore::new();
        let record = parse_and_store(&store, "resumes/cv.txt", RESUME.to_string())
            .await
            .unwrap();
        assert_eq!(record.status, AnalysisStatus::Parsed);

        let job = "Python backend engineer, 5+ years experience with AWS. ".repeat(20);
        let results = score_and_store(&store, &record.analysis_id, &job).await.unwrap();

        let stored = store.get(&record.analysis_id).await.unwrap();
        assert_eq!(stored.status, AnalysisStatus::Completed);
        assert_eq!(stored.score, Some(results.compatibility_score));
        assert_eq!(
            stored.job_description.as_deref().map(|j| j.chars().count()),
            Some(STORED_JOB_DESCRIPTION_CHARS)
        );
        assert!(stored.scored_at.is_some());
        assert_eq!(stored.feedback, Some(results.feedback));
    }

    #[tokio::test]
    async fn test_score_unknown_analysis() {
        let store = MemoryStore::new();
        let err = score_and_store(&store, "missing", "Python").await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_batch_compare_orders_results() {
        let store = MemoryStore::new();
        let jobs = vec![
            JobPosting {
                title: Some("Barista".into()),
                description: "Espresso, latte art, customer service".into(),
            },
            JobPosting {
                title: Some("Platform".into()),
                description: "Python, Docker and AWS; PostgreSQL a plus".into(),
            },
        ];
        let results = batch_compare(&store, "cv.txt", RESUME.to_string(), &jobs)
            .await
            .unwrap();
        assert_eq!(results[0].title, "Platform");
    }

    #[tokio::test]
    async fn test_cover_letter_uses_parsed_profile() {
        let store = MemoryStore::new();
        let (record, letter) = cover_letter(&store, "cv.txt", RESUME.to_string(), "Python on AWS")
            .await
            .unwrap();
        assert!(letter.opening.contains("With over 6 years"));
        assert!(store.get(&record.analysis_id).await.is_ok());
    }
}
