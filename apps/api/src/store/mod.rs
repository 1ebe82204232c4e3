//! Persistence seam for analysis records.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;

pub use memory::MemoryStore;
pub use postgres::PgRecordStore;

/// Key-value store of analysis records keyed by analysis id.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fails with `AppError::NotFound` for an unknown id.
    async fn get(&self, analysis_id: &str) -> Result<AnalysisRecord, AppError>;

    /// Inserts or replaces the record under its own `analysis_id`.
    async fn put(&self, record: &AnalysisRecord) -> Result<(), AppError>;

    /// Merges the top-level keys of `fields` (a JSON object) into the stored
    /// record. Fails with `AppError::NotFound` for an unknown id.
    async fn update(&self, analysis_id: &str, fields: Value) -> Result<(), AppError>;
}

pub(crate) fn not_found(analysis_id: &str) -> AppError {
    AppError::NotFound(format!("Resume analysis '{analysis_id}' not found"))
}
