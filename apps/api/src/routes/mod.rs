pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::careers::handlers as careers;
use crate::health::handlers as health_score;
use crate::learning::handlers as learning;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the resume size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// `?user_id=` query string shared by the read endpoints.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_resume_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_upsert_profile),
        )
        // Careers
        .route("/api/v1/careers", get(careers::handle_latest))
        .route("/api/v1/careers/suggest", post(careers::handle_suggest))
        .route("/api/v1/careers/match", post(careers::handle_match))
        // Resumes
        .route(
            "/api/v1/resumes/analyze",
            post(resume::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resumes/latest", get(resume::handle_latest))
        // Learning
        .route(
            "/api/v1/learning/quiz/generate",
            post(learning::handle_generate_quiz),
        )
        .route(
            "/api/v1/learning/quiz/submit",
            post(learning::handle_submit_quiz),
        )
        .route(
            "/api/v1/learning/roadmap/complete",
            post(learning::handle_complete_step),
        )
        .route("/api/v1/learning/stats", get(learning::handle_stats))
        // Career health
        .route("/api/v1/health-score", get(health_score::handle_health_score))
        .with_state(state)
}
