//! Axum route handlers for the Careers API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::careers::advisor::suggest_careers;
use crate::careers::matcher::{score_careers_from_text, ProfileSignal, ScoredCareer};
use crate::careers::models::{CareerSuggestion, SuggestionSource};
use crate::careers::store::{latest_suggestions, save_suggestions};
use crate::errors::AppError;
use crate::profile::store::get_profile;
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub id: Uuid,
    pub source: SuggestionSource,
    pub suggestions: Vec<CareerSuggestion>,
    pub created_at: DateTime<Utc>,
}

/// POST /api/v1/careers/suggest
///
/// AI suggestions for the stored profile, falling back to the keyword matcher.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let profile = get_profile(&state.db, req.user_id).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "Profile for user {} not found. Complete your profile first.",
            req.user_id
        ))
    })?;
    let signal = ProfileSignal::from(&profile);

    let advisor = state
        .config
        .ai_suggestions_enabled
        .then(|| state.career_advisor.as_ref());
    let outcome = suggest_careers(advisor, &signal).await;

    let row = save_suggestions(&state.db, req.user_id, outcome.source, &outcome.suggestions).await?;

    Ok(Json(SuggestResponse {
        id: row.id,
        source: outcome.source,
        suggestions: outcome.suggestions,
        created_at: row.created_at,
    }))
}

/// POST /api/v1/careers/match
///
/// Keyword matcher only: no LLM call and nothing persisted.
pub async fn handle_match(Json(signal): Json<ProfileSignal>) -> Json<Vec<ScoredCareer>> {
    Json(score_careers_from_text(&signal))
}

/// GET /api/v1/careers
pub async fn handle_latest(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SuggestResponse>, AppError> {
    let row = latest_suggestions(&state.db, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No career suggestions for user {}", params.user_id))
        })?;

    let source = match row.source.as_str() {
        "ai" => SuggestionSource::Ai,
        _ => SuggestionSource::Keyword,
    };
    let suggestions: Vec<CareerSuggestion> = serde_json::from_value(row.suggestions)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Corrupt suggestion payload: {e}")))?;

    Ok(Json(SuggestResponse {
        id: row.id,
        source,
        suggestions,
        created_at: row.created_at,
    }))
}
