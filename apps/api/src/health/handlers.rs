use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::health::score::{compute_health_score, HealthScore};
use crate::health::store::{load_inputs, save_score};
use crate::health::suggestions::generate_suggestions;
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ComponentTotals {
    pub career_alignment: f64,
    pub growth_engagement: f64,
    pub resume_readiness: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthScoreResponse {
    #[serde(flatten)]
    pub health: HealthScore,
    pub components: ComponentTotals,
    pub suggestions: Vec<String>,
}

/// GET /api/v1/health-score
///
/// Recomputes the score from current data and stores it as the user's latest value.
pub async fn handle_health_score(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<HealthScoreResponse>, AppError> {
    let inputs = load_inputs(&state.db, params.user_id, Utc::now().date_naive()).await?;
    let health = compute_health_score(&inputs);
    let suggestions = generate_suggestions(&inputs, &health);

    save_score(&state.db, params.user_id, &health).await?;
    info!(
        "Career health score for user {}: {} ({})",
        params.user_id,
        health.score,
        health.status.label()
    );

    let components = ComponentTotals {
        career_alignment: health.breakdown.career_alignment(),
        growth_engagement: health.breakdown.growth_engagement(),
        resume_readiness: health.breakdown.resume_readiness(),
    };

    Ok(Json(HealthScoreResponse {
        health,
        components,
        suggestions,
    }))
}
