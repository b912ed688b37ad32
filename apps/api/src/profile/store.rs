use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::CareerProfileRow;
use crate::profile::validation::UpsertProfileRequest;

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<CareerProfileRow>> {
    Ok(
        sqlx::query_as::<_, CareerProfileRow>("SELECT * FROM career_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Inserts or replaces the editable profile fields. The stored career score is kept.
pub async fn upsert_profile(pool: &PgPool, req: &UpsertProfileRequest) -> Result<CareerProfileRow> {
    Ok(sqlx::query_as::<_, CareerProfileRow>(
        r#"
        INSERT INTO career_profiles
            (user_id, skills, interests, short_term_goals, long_term_goals,
             field_of_study, education_level)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id) DO UPDATE SET
            skills = EXCLUDED.skills,
            interests = EXCLUDED.interests,
            short_term_goals = EXCLUDED.short_term_goals,
            long_term_goals = EXCLUDED.long_term_goals,
            field_of_study = EXCLUDED.field_of_study,
            education_level = EXCLUDED.education_level,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(req.user_id)
    .bind(&req.skills)
    .bind(&req.interests)
    .bind(&req.short_term_goals)
    .bind(&req.long_term_goals)
    .bind(&req.field_of_study)
    .bind(&req.education_level)
    .fetch_one(pool)
    .await?)
}
