use anyhow::Result;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::ResumeAnalysisRow;
use crate::resume::analysis::ResumeAnalysis;
use crate::resume::extract::ResumeFormat;

/// Object key for an uploaded resume.
pub fn resume_key(user_id: Uuid, analysis_id: Uuid, format: ResumeFormat) -> String {
    format!("resumes/{}/{}.{}", user_id, analysis_id, format.extension())
}

/// Uploads the original file so the analysis can point back at it.
pub async fn upload_resume(
    s3: &S3Client,
    bucket: &str,
    key: &str,
    format: ResumeFormat,
    body: Bytes,
) -> Result<()> {
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body))
        .content_type(format.content_type())
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

    info!("Uploaded resume to s3://{bucket}/{key}");
    Ok(())
}

pub async fn save_analysis(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    file_name: &str,
    s3_key: &str,
    analysis: &ResumeAnalysis,
) -> Result<ResumeAnalysisRow> {
    Ok(sqlx::query_as::<_, ResumeAnalysisRow>(
        r#"
        INSERT INTO resume_analyses
            (id, user_id, file_name, s3_key, ats_score, overall_rating,
             strengths, weaknesses, missing_keywords, suggestions)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(file_name)
    .bind(s3_key)
    .bind(analysis.ats_score)
    .bind(analysis.overall_rating)
    .bind(&analysis.strengths)
    .bind(&analysis.weaknesses)
    .bind(&analysis.missing_keywords)
    .bind(&analysis.suggestions)
    .fetch_one(pool)
    .await?)
}

/// Most recent analysis for a user, if any.
pub async fn latest_analysis(pool: &PgPool, user_id: Uuid) -> Result<Option<ResumeAnalysisRow>> {
    Ok(sqlx::query_as::<_, ResumeAnalysisRow>(
        "SELECT * FROM resume_analyses WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}
