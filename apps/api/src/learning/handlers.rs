//! Axum route handlers for the Learning API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgConnection;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::health::score::LearningSnapshot;
use crate::learning::quiz::{
    generate_quiz, grade_quiz, Difficulty, QuizGrade, QuizQuestion, QuizQuestionView,
};
use crate::learning::rewards::{
    earned_badges, level_for_xp, quiz_xp, Badge, BadgeAward, BadgeProgress, ROADMAP_STEP_XP,
};
use crate::learning::store::{
    apply_activity, award_badges, complete_roadmap_step, count_quizzes, count_roadmap_steps,
    get_stats, list_badges, lock_quiz, mark_quiz_submitted, record_quiz_attempt, save_quiz,
    ActivityDelta,
};
use crate::learning::streak::StreakChange;
use crate::models::learning::LearningStatsRow;
use crate::routes::UserIdQuery;
use crate::state::AppState;

const MAX_ROADMAP_STEP: i32 = 20;
const MAX_TOPIC_CHARS: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub user_id: Uuid,
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub quiz_id: Uuid,
    pub topic: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuizQuestionView>,
}

/// One chosen option index per question, in question order.
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub answers: Vec<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteStepRequest {
    pub user_id: Uuid,
    pub career_title: String,
    pub step_index: i32,
}

#[derive(Debug, Serialize)]
pub struct LearningStats {
    pub total_attempts: i64,
    pub correct_answers: i64,
    pub accuracy: f64,
    pub streak_count: i64,
    pub longest_streak: i64,
    pub xp_total: i64,
    pub level: i64,
    pub last_activity_on: Option<NaiveDate>,
}

impl LearningStats {
    /// Stats as of `today`: a streak broken since the last activity shows as 0.
    pub fn from_row(row: &LearningStatsRow, today: NaiveDate) -> Self {
        let snapshot = LearningSnapshot::from_row(row, today);
        Self {
            total_attempts: snapshot.total_attempts.max(0),
            correct_answers: row.correct_answers.max(0),
            accuracy: snapshot.accuracy(),
            streak_count: snapshot.streak_count,
            longest_streak: row.longest_streak.max(0),
            xp_total: row.xp_total.max(0),
            level: level_for_xp(row.xp_total),
            last_activity_on: row.last_activity_on,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub xp_awarded: i64,
    pub streak_change: Option<StreakChange>,
    pub new_badges: Vec<BadgeAward>,
    pub stats: LearningStats,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    #[serde(flatten)]
    pub activity: ActivityResponse,
    pub grade: QuizGrade,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: LearningStats,
    pub badges: Vec<BadgeAward>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/learning/quiz/generate
///
/// The answer key is stored with the quiz and only revealed on submission.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    Json(req): Json<GenerateQuizRequest>,
) -> Result<Json<GenerateQuizResponse>, AppError> {
    let topic = validate_text("topic", &req.topic, MAX_TOPIC_CHARS)?;
    let questions = generate_quiz(&state.llm, &topic, req.difficulty).await?;

    let payload = serde_json::to_value(&questions).map_err(anyhow::Error::from)?;
    let quiz = save_quiz(
        &state.db,
        req.user_id,
        &topic,
        req.difficulty.as_str(),
        &payload,
    )
    .await?;
    info!(
        "Generated quiz {} on '{topic}' for user {}",
        quiz.id, req.user_id
    );

    Ok(Json(GenerateQuizResponse {
        quiz_id: quiz.id,
        topic,
        difficulty: req.difficulty,
        questions: questions.iter().map(QuizQuestionView::from).collect(),
    }))
}

/// POST /api/v1/learning/quiz/submit
///
/// Grades the answers against the stored key, then records the attempt, XP, streak
/// and badges in one transaction. A quiz can be submitted once.
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<Json<SubmitQuizResponse>, AppError> {
    let mut tx = state.db.begin().await?;

    let quiz = lock_quiz(&mut *tx, req.quiz_id, req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {} not found", req.quiz_id)))?;
    if quiz.submitted_at.is_some() {
        return Err(AppError::Conflict(format!(
            "Quiz {} was already submitted",
            quiz.id
        )));
    }

    let questions: Vec<QuizQuestion> = serde_json::from_value(quiz.questions.clone())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Corrupt quiz payload: {e}")))?;
    let grade = grade_quiz(&questions, &req.answers).ok_or_else(|| {
        AppError::Validation(format!(
            "Expected {} answers, got {}",
            questions.len(),
            req.answers.len()
        ))
    })?;

    let xp = quiz_xp(grade.correct, grade.total);
    let (row, change) = apply_activity(
        &mut *tx,
        req.user_id,
        ActivityDelta {
            attempts: grade.total,
            correct: grade.correct,
            xp,
        },
        today(),
    )
    .await?;
    record_quiz_attempt(
        &mut *tx,
        &quiz,
        grade.total as i32,
        grade.correct as i32,
        xp,
    )
    .await?;
    mark_quiz_submitted(&mut *tx, quiz.id).await?;

    let new_badges = award_progress_badges(&mut *tx, &row, grade.correct == grade.total).await?;
    tx.commit().await?;

    info!(
        "Quiz '{}' by user {}: {}/{}, +{xp} XP",
        quiz.topic, req.user_id, grade.correct, grade.total
    );

    Ok(Json(SubmitQuizResponse {
        activity: ActivityResponse {
            xp_awarded: xp,
            streak_change: Some(change),
            new_badges,
            stats: LearningStats::from_row(&row, today()),
        },
        grade,
    }))
}

/// POST /api/v1/learning/roadmap/complete
///
/// XP is only granted the first time a step is completed. The step, XP and
/// badges commit together.
pub async fn handle_complete_step(
    State(state): State<AppState>,
    Json(req): Json<CompleteStepRequest>,
) -> Result<Json<ActivityResponse>, AppError> {
    let career_title = validate_text("career_title", &req.career_title, MAX_TOPIC_CHARS)?;
    if !(0..MAX_ROADMAP_STEP).contains(&req.step_index) {
        return Err(AppError::Validation(format!(
            "step_index must be between 0 and {}",
            MAX_ROADMAP_STEP - 1
        )));
    }

    let mut tx = state.db.begin().await?;

    let newly_completed =
        complete_roadmap_step(&mut *tx, req.user_id, &career_title, req.step_index).await?;

    if !newly_completed {
        tx.rollback().await?;
        let stats = match get_stats(&state.db, req.user_id).await? {
            Some(row) => LearningStats::from_row(&row, today()),
            None => empty_stats(),
        };
        return Ok(Json(ActivityResponse {
            xp_awarded: 0,
            streak_change: None,
            new_badges: vec![],
            stats,
        }));
    }

    let (row, change) = apply_activity(
        &mut *tx,
        req.user_id,
        ActivityDelta {
            xp: ROADMAP_STEP_XP,
            ..Default::default()
        },
        today(),
    )
    .await?;

    let new_badges = award_progress_badges(&mut *tx, &row, false).await?;
    tx.commit().await?;

    info!(
        "User {} completed step {} of '{career_title}'",
        req.user_id, req.step_index
    );

    Ok(Json(ActivityResponse {
        xp_awarded: ROADMAP_STEP_XP,
        streak_change: Some(change),
        new_badges,
        stats: LearningStats::from_row(&row, today()),
    }))
}

/// GET /api/v1/learning/stats
pub async fn handle_stats(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = match get_stats(&state.db, params.user_id).await? {
        Some(row) => LearningStats::from_row(&row, today()),
        None => empty_stats(),
    };
    let badges = list_badges(&state.db, params.user_id)
        .await?
        .iter()
        .filter_map(|key| Badge::from_key(key))
        .map(BadgeAward::from)
        .collect();
    Ok(Json(StatsResponse { stats, badges }))
}

/// Judges badges on the counters just written and persists the new ones.
async fn award_progress_badges(
    conn: &mut PgConnection,
    row: &LearningStatsRow,
    perfect_quiz: bool,
) -> Result<Vec<BadgeAward>, AppError> {
    let progress = BadgeProgress {
        quizzes_taken: count_quizzes(&mut *conn, row.user_id).await?,
        perfect_quiz,
        streak: row.streak_count,
        xp_total: row.xp_total,
        roadmap_steps_completed: count_roadmap_steps(&mut *conn, row.user_id).await?,
    };
    let awarded = award_badges(&mut *conn, row.user_id, &earned_badges(&progress)).await?;
    Ok(awarded.into_iter().map(BadgeAward::from).collect())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn empty_stats() -> LearningStats {
    LearningStats {
        total_attempts: 0,
        correct_answers: 0,
        accuracy: 0.0,
        streak_count: 0,
        longest_streak: 0,
        xp_total: 0,
        level: level_for_xp(0),
        last_activity_on: None,
    }
}

fn validate_text(field: &str, value: &str, max_chars: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn stats_row(streak: i64, last_activity_on: Option<NaiveDate>) -> LearningStatsRow {
        LearningStatsRow {
            user_id: Uuid::new_v4(),
            total_attempts: 4,
            correct_answers: 9,
            streak_count: streak,
            longest_streak: 5,
            xp_total: 1200,
            last_activity_on,
            updated_at: Utc::now(),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn test_validate_text_trims() {
        assert_eq!(validate_text("topic", "  Rust traits ", 50).unwrap(), "Rust traits");
    }

    #[test]
    fn test_validate_text_rejects_empty_and_long() {
        assert!(matches!(
            validate_text("topic", "   ", 50),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_text("topic", &"a".repeat(51), 50),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_stats_from_corrupted_row() {
        let stats = LearningStats::from_row(&stats_row(-2, Some(day())), day());
        assert_eq!(stats.accuracy, 1.0);
        assert_eq!(stats.streak_count, 0);
        assert_eq!(stats.level, 3);
    }

    #[test]
    fn test_stats_hide_broken_streak() {
        let stale = stats_row(12, day().checked_sub_days(Days::new(3)));
        let stats = LearningStats::from_row(&stale, day());
        assert_eq!(stats.streak_count, 0);
        assert_eq!(stats.longest_streak, 5);

        let live = stats_row(12, day().pred_opt());
        assert_eq!(LearningStats::from_row(&live, day()).streak_count, 12);
    }

    #[test]
    fn test_empty_stats_start_at_level_one() {
        let stats = empty_stats();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.accuracy, 0.0);
    }
}
