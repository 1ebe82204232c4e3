//! Resume document intake: presigned uploads, object fetch and text
//! extraction.

use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;

pub const DEFAULT_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, Serialize)]
pub struct UploadTicket {
    pub upload_url: String,
    pub key: String,
    pub bucket: String,
}

/// `resumes/YYYY/MM/DD/<uuid>_<filename>`.
pub fn upload_key(filename: &str, now: DateTime<Utc>) -> String {
    format!(
        "resumes/{}/{}_{}",
        now.format("%Y/%m/%d"),
        Uuid::new_v4(),
        filename
    )
}

/// Last path segment of an object key.
pub fn file_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Issues a presigned PUT URL the client uploads the resume to.
pub async fn presign_upload(
    s3: &S3Client,
    bucket: &str,
    filename: Option<&str>,
    content_type: Option<&str>,
    ttl: Duration,
) -> Result<UploadTicket, AppError> {
    let filename = match filename.map(str::trim).filter(|f| !f.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("resume_{}.pdf", Uuid::new_v4()),
    };
    let key = upload_key(&filename, Utc::now());

    let presigning = PresigningConfig::expires_in(ttl)
        .map_err(|e| AppError::Storage(format!("invalid presign expiry: {e}")))?;
    let request = s3
        .put_object()
        .bucket(bucket)
        .key(&key)
        .content_type(content_type.unwrap_or(DEFAULT_CONTENT_TYPE))
        .presigned(presigning)
        .await
        .map_err(|e| AppError::Storage(format!("presign failed: {e}")))?;

    info!("Issued upload URL for s3://{bucket}/{key}");
    Ok(UploadTicket {
        upload_url: request.uri().to_string(),
        key,
        bucket: bucket.to_string(),
    })
}

/// Downloads an object. A missing key is `NotFound`.
pub async fn fetch_object(s3: &S3Client, bucket: &str, key: &str) -> Result<Bytes, AppError> {
    let output = s3
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let e = e.into_service_error();
            if e.is_no_such_key() {
                AppError::NotFound(format!("Resume '{key}' not found"))
            } else {
                AppError::Storage(format!("S3 download failed: {e}"))
            }
        })?;

    let data = output
        .body
        .collect()
        .await
        .map_err(|e| AppError::Storage(format!("S3 body read failed: {e}")))?;
    Ok(data.into_bytes())
}

/// Text of a PDF, or `None` if the bytes cannot be read as one or hold no text.
pub fn extract_text(bytes: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            warn!("PDF extraction error: {e}");
            None
        }
    }
}

/// Plain text of an uploaded document. PDFs go through `extract_text`;
/// anything else, or a PDF that yields nothing, is decoded as lossy UTF-8.
pub fn document_text(key: &str, bytes: &[u8]) -> String {
    if key.to_lowercase().ends_with(".pdf") {
        if let Some(text) = extract_text(bytes) {
            return text;
        }
        warn!("No text extracted from {key}; falling back to lossy UTF-8");
    }
    String::from_utf8_lossy(bytes).into_owned()
}

/// Fetches a resume and extracts its text off the async executor.
pub async fn load_resume_text(s3: &S3Client, bucket: &str, key: &str) -> Result<String, AppError> {
    let bytes = fetch_object(s3, bucket, key).await?;
    let key_owned = key.to_string();
    let text = tokio::task::spawn_blocking(move || document_text(&key_owned, &bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text extraction: {e}")))?;

    info!("Extracted {} characters from {key}", text.chars().count());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_upload_key_layout() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let key = upload_key("cv.pdf", now);
        assert!(key.starts_with("resumes/2024/03/09/"));
        assert!(key.ends_with("_cv.pdf"));
        assert_eq!(file_name(&key).len(), 36 + "_cv.pdf".len());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("resumes/2024/01/01/x_cv.pdf"), "x_cv.pdf");
        assert_eq!(file_name("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_non_pdf_is_decoded_lossily() {
        let bytes = b"Skills: Rust\xff";
        let text = document_text("resumes/cv.txt", bytes);
        assert!(text.starts_with("Skills: Rust"));
        assert!(text.ends_with('\u{FFFD}'));
    }

    #[test]
    fn test_broken_pdf_falls_back_to_bytes() {
        assert_eq!(extract_text(b"not a pdf"), None);
        assert_eq!(document_text("cv.PDF", b"not a pdf"), "not a pdf");
    }
}
