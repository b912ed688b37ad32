use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::CareerProfileRow;
use crate::profile::store::{get_profile, upsert_profile};
use crate::profile::validation::UpsertProfileRequest;
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CareerProfileRow>, AppError> {
    let profile = get_profile(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", params.user_id)))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<CareerProfileRow>, AppError> {
    let req = req
        .normalized()
        .map_err(|problems| AppError::Validation(problems.join("; ")))?;

    let profile = upsert_profile(&state.db, &req).await?;
    info!("Saved career profile for user {}", req.user_id);
    Ok(Json(profile))
}
