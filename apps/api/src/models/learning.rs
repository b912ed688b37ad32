use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningStatsRow {
    pub user_id: Uuid,
    pub total_attempts: i64,
    pub correct_answers: i64,
    pub streak_count: i64,
    pub longest_streak: i64,
    pub xp_total: i64,
    pub last_activity_on: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

/// A generated quiz. Answers stay server-side until it is submitted once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic: String,
    pub difficulty: String,
    pub questions: Value,
    pub created_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
}
