use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::careers::models::{CareerSuggestion, SuggestionSource};
use crate::models::career::CareerSuggestionsRow;

/// Persists a suggestion set and records the top match as the profile's career score.
pub async fn save_suggestions(
    pool: &PgPool,
    user_id: Uuid,
    source: SuggestionSource,
    suggestions: &[CareerSuggestion],
) -> Result<CareerSuggestionsRow> {
    let payload = serde_json::to_value(suggestions)?;
    let top_match = suggestions
        .iter()
        .map(|s| s.match_percentage)
        .max()
        .map(|pct| f64::from(pct.clamp(0, 100)));

    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, CareerSuggestionsRow>(
        r#"
        INSERT INTO career_suggestions (id, user_id, source, suggestions)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(source.as_str())
    .bind(&payload)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE career_profiles SET career_health_score = $1, updated_at = NOW() WHERE user_id = $2",
    )
    .bind(top_match)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Stored {} {} career suggestions for user {user_id}",
        suggestions.len(),
        source.as_str()
    );
    Ok(row)
}

/// Returns the most recent suggestion set for a user, if any.
pub async fn latest_suggestions(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<CareerSuggestionsRow>> {
    Ok(sqlx::query_as::<_, CareerSuggestionsRow>(
        "SELECT * FROM career_suggestions WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}
