use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use crate::config::Config;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Analysis records. Postgres in production, in-memory in tests.
    pub store: Arc<dyn RecordStore>,
    pub s3: S3Client,
    pub config: Config,
}
