use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerProfileRow {
    pub user_id: Uuid,
    pub skills: String,
    pub interests: String,
    pub short_term_goals: String,
    pub long_term_goals: String,
    pub field_of_study: String,
    pub education_level: String,
    /// Top career match percentage from the last persisted suggestion set.
    pub career_health_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
