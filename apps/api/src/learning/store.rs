use anyhow::Result;
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::{PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::learning::rewards::Badge;
use crate::learning::streak::{record_activity, StreakChange, StreakState};
use crate::models::learning::{LearningStatsRow, QuizRow};

/// Counter increments produced by one learning activity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityDelta {
    pub attempts: i64,
    pub correct: i64,
    pub xp: i64,
}

pub async fn get_stats(pool: &PgPool, user_id: Uuid) -> Result<Option<LearningStatsRow>> {
    Ok(
        sqlx::query_as::<_, LearningStatsRow>("SELECT * FROM learning_stats WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Adds the delta to the user's counters and advances the streak.
/// Locks the stats row; run it inside the caller's transaction.
pub async fn apply_activity(
    conn: &mut PgConnection,
    user_id: Uuid,
    delta: ActivityDelta,
    today: NaiveDate,
) -> Result<(LearningStatsRow, StreakChange)> {
    let existing = sqlx::query_as::<_, LearningStatsRow>(
        "SELECT * FROM learning_stats WHERE user_id = $1 FOR UPDATE",
    )
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await?;

    let streak = existing
        .as_ref()
        .map(StreakState::from)
        .unwrap_or_default();
    let (streak, change) = record_activity(streak, today);

    let (attempts, correct, xp) = existing
        .as_ref()
        .map(|row| (row.total_attempts, row.correct_answers, row.xp_total))
        .unwrap_or_default();

    let row = sqlx::query_as::<_, LearningStatsRow>(
        r#"
        INSERT INTO learning_stats
            (user_id, total_attempts, correct_answers, streak_count, longest_streak,
             xp_total, last_activity_on, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
        ON CONFLICT (user_id) DO UPDATE SET
            total_attempts = EXCLUDED.total_attempts,
            correct_answers = EXCLUDED.correct_answers,
            streak_count = EXCLUDED.streak_count,
            longest_streak = EXCLUDED.longest_streak,
            xp_total = EXCLUDED.xp_total,
            last_activity_on = EXCLUDED.last_activity_on,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(attempts.max(0) + delta.attempts)
    .bind(correct.max(0) + delta.correct)
    .bind(streak.current)
    .bind(streak.longest)
    .bind(xp.max(0) + delta.xp)
    .bind(streak.last_activity_on)
    .fetch_one(&mut *conn)
    .await?;

    Ok((row, change))
}

/// Stores a generated quiz together with its answer key.
pub async fn save_quiz(
    pool: &PgPool,
    user_id: Uuid,
    topic: &str,
    difficulty: &str,
    questions: &Value,
) -> Result<QuizRow> {
    Ok(sqlx::query_as::<_, QuizRow>(
        r#"
        INSERT INTO quizzes (id, user_id, topic, difficulty, questions)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(topic)
    .bind(difficulty)
    .bind(questions)
    .fetch_one(pool)
    .await?)
}

/// Loads a user's quiz and locks it until the transaction ends.
pub async fn lock_quiz(
    conn: &mut PgConnection,
    quiz_id: Uuid,
    user_id: Uuid,
) -> Result<Option<QuizRow>> {
    Ok(sqlx::query_as::<_, QuizRow>(
        "SELECT * FROM quizzes WHERE id = $1 AND user_id = $2 FOR UPDATE",
    )
    .bind(quiz_id)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await?)
}

pub async fn mark_quiz_submitted(conn: &mut PgConnection, quiz_id: Uuid) -> Result<()> {
    sqlx::query("UPDATE quizzes SET submitted_at = NOW() WHERE id = $1")
        .bind(quiz_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

pub async fn record_quiz_attempt(
    conn: &mut PgConnection,
    quiz: &QuizRow,
    total_questions: i32,
    correct_answers: i32,
    xp_awarded: i64,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO quiz_attempts
            (id, quiz_id, user_id, topic, total_questions, correct_answers, xp_awarded)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(quiz.id)
    .bind(quiz.user_id)
    .bind(&quiz.topic)
    .bind(total_questions)
    .bind(correct_answers)
    .bind(xp_awarded)
    .execute(&mut *conn)
    .await?;
    Ok(id)
}

pub async fn count_quizzes(conn: &mut PgConnection, user_id: Uuid) -> Result<i64> {
    Ok(
        sqlx::query_scalar("SELECT COUNT(*) FROM quiz_attempts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await?,
    )
}

/// Marks a roadmap step complete. Returns false when it was already complete.
pub async fn complete_roadmap_step(
    conn: &mut PgConnection,
    user_id: Uuid,
    career_title: &str,
    step_index: i32,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO roadmap_progress (user_id, career_title, step_index)
        VALUES ($1, $2, $3)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(career_title)
    .bind(step_index)
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn count_roadmap_steps(conn: &mut PgConnection, user_id: Uuid) -> Result<i64> {
    Ok(
        sqlx::query_scalar("SELECT COUNT(*) FROM roadmap_progress WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await?,
    )
}

/// Persists badges, returning only the ones the user did not have yet.
pub async fn award_badges(
    conn: &mut PgConnection,
    user_id: Uuid,
    badges: &[Badge],
) -> Result<Vec<Badge>> {
    let mut newly_awarded = Vec::new();
    for badge in badges {
        let result = sqlx::query(
            "INSERT INTO user_badges (user_id, badge) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(badge.as_str())
        .execute(&mut *conn)
        .await?;
        if result.rows_affected() == 1 {
            info!("Awarded badge {} to user {user_id}", badge.as_str());
            newly_awarded.push(*badge);
        }
    }
    Ok(newly_awarded)
}

pub async fn list_badges(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>> {
    Ok(sqlx::query_scalar(
        "SELECT badge FROM user_badges WHERE user_id = $1 ORDER BY awarded_at ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}
