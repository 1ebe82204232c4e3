use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::service;
use crate::documents::{self, UploadTicket};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRecord, JobComparison, JobPosting};
use crate::parsing::ats::AtsReport;
use crate::scoring::cover_letter::CoverLetter;
use crate::scoring::ScoreResults;
use crate::state::AppState;

/// Minimum number of postings for a batch comparison.
pub const MIN_BATCH_JOBS: usize = 2;

#[derive(Debug, Default, Deserialize)]
pub struct UploadRequest {
    pub filename: Option<String>,
    #[serde(alias = "fileType")]
    pub file_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub resume_key: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_key: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub analysis_id: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchCompareRequest {
    #[serde(default)]
    pub resume_key: String,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: String,
    pub results: ScoreResults,
    pub ats_score: AtsReport,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub analysis_id: String,
    pub results: ScoreResults,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub analysis: AnalysisRecord,
}

#[derive(Serialize)]
pub struct BatchCompareResponse {
    pub results: Vec<JobComparison>,
}

#[derive(Serialize)]
pub struct CoverLetterResponse {
    pub analysis_id: String,
    pub cover_letter: CoverLetter,
}

fn require(fields: &[(&str, &str)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(" and ")
        )))
    }
}

async fn resume_text(state: &AppState, resume_key: &str) -> Result<String, AppError> {
    documents::load_resume_text(&state.s3, &state.config.s3_bucket, resume_key).await
}

/// POST /api/v1/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<UploadTicket>, AppError> {
    let ticket = documents::presign_upload(
        &state.s3,
        &state.config.s3_bucket,
        req.filename.as_deref(),
        req.file_type.as_deref(),
        state.config.upload_url_ttl,
    )
    .await?;
    Ok(Json(ticket))
}

/// POST /api/v1/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<AnalysisRecord>, AppError> {
    require(&[("resume_key", req.resume_key.as_str())])?;
    let text = resume_text(&state, &req.resume_key).await?;
    let record = service::parse_and_store(state.store.as_ref(), &req.resume_key, text).await?;
    Ok(Json(record))
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    require(&[
        ("resume_key", req.resume_key.as_str()),
        ("job_description", req.job_description.as_str()),
    ])?;
    let text = resume_text(&state, &req.resume_key).await?;
    let (record, results) =
        service::analyze(state.store.as_ref(), &req.resume_key, text, &req.job_description)
            .await?;
    Ok(Json(AnalyzeResponse {
        analysis_id: record.analysis_id,
        results,
        ats_score: record.profile.ats_score,
    }))
}

/// POST /api/v1/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    require(&[
        ("analysis_id", req.analysis_id.as_str()),
        ("job_description", req.job_description.as_str()),
    ])?;
    let results =
        service::score_and_store(state.store.as_ref(), &req.analysis_id, &req.job_description)
            .await?;
    Ok(Json(ScoreResponse {
        analysis_id: req.analysis_id,
        results,
    }))
}

/// GET /api/v1/results/:analysis_id
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(analysis_id): Path<String>,
) -> Result<Json<ResultsResponse>, AppError> {
    let analysis = state.store.get(&analysis_id).await?;
    Ok(Json(ResultsResponse { analysis }))
}

/// POST /api/v1/batch-compare
pub async fn handle_batch_compare(
    State(state): State<AppState>,
    Json(req): Json<BatchCompareRequest>,
) -> Result<Json<BatchCompareResponse>, AppError> {
    require(&[("resume_key", req.resume_key.as_str())])?;
    if req.jobs.len() < MIN_BATCH_JOBS {
        return Err(AppError::Validation(format!(
            "At least {MIN_BATCH_JOBS} jobs are required"
        )));
    }
    let text = resume_text(&state, &req.resume_key).await?;
    let results =
        service::batch_compare(state.store.as_ref(), &req.resume_key, text, &req.jobs).await?;
    Ok(Json(BatchCompareResponse { results }))
}

/// POST /api/v1/generate-cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    require(&[
        ("resume_key", req.resume_key.as_str()),
        ("job_description", req.job_description.as_str()),
    ])?;
    let text = resume_text(&state, &req.resume_key).await?;
    let (record, cover_letter) =
        service::cover_letter(state.store.as_ref(), &req.resume_key, text, &req.job_description)
            .await?;
    Ok(Json(CoverLetterResponse {
        analysis_id: record.analysis_id,
        cover_letter,
    }))
}
