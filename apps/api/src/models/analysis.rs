use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parsing::ats::AtsReport;
use crate::scoring::feedback::FeedbackReport;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub years: u32,
    pub positions: Vec<String>,
}

/// Everything the parser derives from a resume's plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Experience,
    pub ats_score: AtsReport,
    pub raw_text_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Parsed,
    Completed,
}

/// Stored analysis. Score-stage fields stay empty until the resume is
/// scored against a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: String,
    pub resume_key: String,
    #[serde(flatten)]
    pub profile: ResumeProfile,
    pub parsed_at: DateTime<Utc>,
    pub status: AnalysisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scored_at: Option<DateTime<Utc>>,
}

/// Fields merged into a record once it has been scored.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreUpdate {
    pub score: f64,
    pub feedback: FeedbackReport,
    pub job_description: String,
    pub scored_at: DateTime<Utc>,
    pub status: AnalysisStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobComparison {
    pub title: String,
    pub score: f64,
    pub skill_match: f64,
    pub matched_skills: usize,
    pub missing_skills: usize,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}
