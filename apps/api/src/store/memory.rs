use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::store::{not_found, RecordStore};

/// In-process store. Records are kept as JSON so `update` merges exactly
/// like the JSONB `||` of the Postgres store.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, analysis_id: &str) -> Result<AnalysisRecord, AppError> {
        let records = self.records.read().await;
        let value = records.get(analysis_id).ok_or_else(|| not_found(analysis_id))?;
        serde_json::from_value(value.clone()).map_err(|e| AppError::Internal(e.into()))
    }

    async fn put(&self, record: &AnalysisRecord) -> Result<(), AppError> {
        let value = serde_json::to_value(record).map_err(|e| AppError::Internal(e.into()))?;
        self.records
            .write()
            .await
            .insert(record.analysis_id.clone(), value);
        Ok(())
    }

    async fn update(&self, analysis_id: &str, fields: Value) -> Result<(), AppError> {
        let Value::Object(fields) = fields else {
            return Err(AppError::Validation(
                "update fields must be a JSON object".to_string(),
            ));
        };
        let mut records = self.records.write().await;
        let stored = records
            .get_mut(analysis_id)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| not_found(analysis_id))?;
        stored.extend(fields);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::AnalysisStatus;
    use crate::parsing::parse;
    use chrono::Utc;
    use serde_json::json;

    fn record(id: &str) -> AnalysisRecord {
        AnalysisRecord {
            analysis_id: id.to_string(),
            resume_key: "uploads/cv.pdf".to_string(),
            profile: parse("Skills: Rust, Go\n3 years of experience as a developer"),
            parsed_at: Utc::now(),
            status: AnalysisStatus::Parsed,
            score: None,
            feedback: None,
            job_description: None,
            scored_at: None,
        }
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let store = MemoryStore::new();
        let original = record("cv_20240101000000");
        store.put(&original).await.unwrap();

        let loaded = store.get("cv_20240101000000").await.unwrap();
        assert_eq!(loaded.profile, original.profile);
        assert_eq!(loaded.status, AnalysisStatus::Parsed);
        assert_eq!(loaded.parsed_at, original.parsed_at);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.get("nope").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = MemoryStore::new();
        store.put(&record("a")).await.unwrap();
        store
            .update("a", json!({"score": 71.5, "status": "completed"}))
            .await
            .unwrap();

        let loaded = store.get("a").await.unwrap();
        assert_eq!(loaded.score, Some(71.5));
        assert_eq!(loaded.status, AnalysisStatus::Completed);
        assert_eq!(loaded.resume_key, "uploads/cv.pdf");
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let store = MemoryStore::new();
        let err = store.update("missing", json!({"score": 1.0})).await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }
}
