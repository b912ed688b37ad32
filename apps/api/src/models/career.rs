use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerSuggestionsRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// "ai" | "keyword"
    pub source: String,
    pub suggestions: Value,
    pub created_at: DateTime<Utc>,
}
