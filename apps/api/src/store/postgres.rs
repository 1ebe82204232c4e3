use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::store::{not_found, RecordStore};

/// Records live in `resume_analyses` as one JSONB document per analysis.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn get(&self, analysis_id: &str) -> Result<AnalysisRecord, AppError> {
        let record: Option<Json<AnalysisRecord>> =
            sqlx::query_scalar("SELECT record FROM resume_analyses WHERE analysis_id = $1")
                .bind(analysis_id)
                .fetch_optional(&self.pool)
                .await?;

        record.map(|Json(r)| r).ok_or_else(|| not_found(analysis_id))
    }

    async fn put(&self, record: &AnalysisRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO resume_analyses (analysis_id, record)
            VALUES ($1, $2)
            ON CONFLICT (analysis_id)
            DO UPDATE SET record = EXCLUDED.record, updated_at = NOW()
            "#,
        )
        .bind(&record.analysis_id)
        .bind(Json(record))
        .execute(&self.pool)
        .await?;

        info!("Stored analysis {}", record.analysis_id);
        Ok(())
    }

    async fn update(&self, analysis_id: &str, fields: Value) -> Result<(), AppError> {
        if !fields.is_object() {
            return Err(AppError::Validation(
                "update fields must be a JSON object".to_string(),
            ));
        }

        let result = sqlx::query(
            r#"
            UPDATE resume_analyses
            SET record = record || $2, updated_at = NOW()
            WHERE analysis_id = $1
            "#,
        )
        .bind(analysis_id)
        .bind(fields)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(analysis_id));
        }
        info!("Updated analysis {analysis_id}");
        Ok(())
    }
}
