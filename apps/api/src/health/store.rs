use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::health::score::{
    HealthScore, HealthScoreInputs, LearningSnapshot, ProfileSnapshot, ResumeSnapshot,
};
use crate::learning::store::get_stats;
use crate::learning::streak::{effective_streak, StreakState};
use crate::models::learning::LearningStatsRow;
use crate::models::profile::CareerProfileRow;
use crate::models::resume::ResumeAnalysisRow;
use crate::profile::store::get_profile;
use crate::resume::store::latest_analysis;

impl From<CareerProfileRow> for ProfileSnapshot {
    fn from(row: CareerProfileRow) -> Self {
        Self {
            skills: row.skills,
            interests: row.interests,
            short_term_goals: row.short_term_goals,
            long_term_goals: row.long_term_goals,
            field_of_study: row.field_of_study,
            education_level: row.education_level,
            career_health_score: row.career_health_score,
        }
    }
}

impl LearningSnapshot {
    /// Counters as of `today`; a broken streak counts as 0.
    pub fn from_row(row: &LearningStatsRow, today: NaiveDate) -> Self {
        Self {
            total_attempts: row.total_attempts,
            correct_answers: row.correct_answers,
            streak_count: effective_streak(&StreakState::from(row), today),
            xp_total: row.xp_total,
        }
    }
}

impl From<ResumeAnalysisRow> for ResumeSnapshot {
    fn from(row: ResumeAnalysisRow) -> Self {
        Self {
            ats_score: row.ats_score,
            overall_rating: row.overall_rating,
        }
    }
}

/// Reads the three snapshots the aggregator needs. Missing rows become `None`.
pub async fn load_inputs(
    pool: &PgPool,
    user_id: Uuid,
    today: NaiveDate,
) -> Result<HealthScoreInputs> {
    let profile = get_profile(pool, user_id).await?;
    let learning = get_stats(pool, user_id).await?;
    let resume = latest_analysis(pool, user_id).await?;

    Ok(HealthScoreInputs {
        profile: profile.map(ProfileSnapshot::from),
        learning: learning.map(|row| LearningSnapshot::from_row(&row, today)),
        resume: resume.map(ResumeSnapshot::from),
    })
}

/// Overwrites the user's last computed score. No history is kept.
pub async fn save_score(pool: &PgPool, user_id: Uuid, health: &HealthScore) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO career_health_scores (user_id, score, status, computed_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (user_id) DO UPDATE SET
            score = EXCLUDED.score,
            status = EXCLUDED.status,
            computed_at = EXCLUDED.computed_at
        "#,
    )
    .bind(user_id)
    .bind(health.score as i32)
    .bind(health.status.label())
    .execute(pool)
    .await?;
    Ok(())
}
