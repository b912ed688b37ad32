use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::careers::advisor::CareerAdvisor;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub llm: LlmClient,
    pub config: Config,
    /// AI career advisor. Consulted only when `config.ai_suggestions_enabled` is set.
    pub career_advisor: Arc<dyn CareerAdvisor>,
}
