//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeAnalysisRow;
use crate::resume::analysis::analyze_resume;
use crate::resume::extract::{detect_format, extract_text, ExtractError, ResumeFormat};
use crate::resume::store::{latest_analysis, resume_key, save_analysis, upload_resume};
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// Fields collected from the multipart upload form.
#[derive(Debug, Default)]
struct UploadForm {
    user_id: Option<Uuid>,
    target_role: Option<String>,
    file_name: Option<String>,
    file: Option<Bytes>,
}

/// POST /api/v1/resumes/analyze
///
/// Multipart form: `user_id`, `file`, optional `target_role`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisRow>, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read multipart field: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "user_id" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read user_id: {e}")))?;
                form.user_id = Some(
                    Uuid::parse_str(raw.trim())
                        .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?,
                );
            }
            "target_role" => {
                form.target_role = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read target_role: {e}"))
                })?);
            }
            "file" => {
                form.file_name = Some(field.file_name().unwrap_or("resume").to_string());
                form.file = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let user_id = form
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;
    let file = form
        .file
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    let file_name = form.file_name.unwrap_or_else(|| "resume".to_string());

    check_size(file.len(), state.config.max_resume_bytes)?;

    let (format, text) = extract_in_background(file_name.clone(), file.clone()).await?;
    info!(
        "Extracted {} chars from {file_name} for user {user_id}",
        text.chars().count()
    );

    let analysis = analyze_resume(&state.llm, &text, form.target_role.as_deref()).await?;

    let analysis_id = Uuid::new_v4();
    let s3_key = resume_key(user_id, analysis_id, format);
    upload_resume(&state.s3, &state.config.s3_bucket, &s3_key, format, file)
        .await
        .map_err(|e| AppError::S3(e.to_string()))?;

    let row = save_analysis(&state.db, analysis_id, user_id, &file_name, &s3_key, &analysis).await?;
    info!(
        "Stored resume analysis {analysis_id} for user {user_id} (ats {:.1})",
        row.ats_score
    );

    Ok(Json(row))
}

/// GET /api/v1/resumes/latest
pub async fn handle_latest(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeAnalysisRow>, AppError> {
    let row = latest_analysis(&state.db, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No resume analysis for user {}", params.user_id))
        })?;
    Ok(Json(row))
}

fn check_size(len: usize, max: usize) -> Result<(), AppError> {
    if len == 0 {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if len > max {
        return Err(AppError::Validation(format!(
            "File is {len} bytes; the limit is {max} bytes"
        )));
    }
    Ok(())
}

/// PDF parsing is CPU-bound and can panic on malformed input, so it runs off the async runtime.
async fn extract_in_background(
    file_name: String,
    bytes: Bytes,
) -> Result<(ResumeFormat, String), AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let format = detect_format(&file_name, &bytes)?;
        let text = extract_text(format, &bytes)?;
        Ok::<_, ExtractError>((format, text))
    })
    .await;

    match result {
        Ok(Ok(extracted)) => Ok(extracted),
        Ok(Err(e)) => Err(AppError::UnprocessableEntity(e.to_string())),
        Err(_) => Err(AppError::UnprocessableEntity(
            "Could not read the uploaded file".to_string(),
        )),
    }
}
