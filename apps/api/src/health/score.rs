//! Career health score: one 0-100 number from profile, learning and resume signals.
//!
//! | Component                | Max | Sub-scores                                   |
//! |--------------------------|-----|----------------------------------------------|
//! | Career guidance alignment| 30  | profile completeness 15, match quality 15    |
//! | Growth-path engagement   | 35  | quiz accuracy 15, streak 10, XP 10           |
//! | Resume readiness         | 35  | ATS 20, overall rating 15                    |
//!
//! Raw inputs are clamped to non-negative and every sub-score is capped before summing.

use serde::{Deserialize, Serialize};

pub const PROFILE_FIELD_COUNT: usize = 6;

const PROFILE_COMPLETENESS_MAX: f64 = 15.0;
const MATCH_QUALITY_MAX: f64 = 15.0;
const QUIZ_ACCURACY_MAX: f64 = 15.0;
const STREAK_MAX: f64 = 10.0;
const XP_MAX: f64 = 10.0;
const ATS_MAX: f64 = 20.0;
const RATING_MAX: f64 = 15.0;

/// Profile fields plus the career match score stored by the last suggestion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub skills: String,
    pub interests: String,
    pub short_term_goals: String,
    pub long_term_goals: String,
    pub field_of_study: String,
    pub education_level: String,
    pub career_health_score: Option<f64>,
}

impl ProfileSnapshot {
    fn fields(&self) -> [(&'static str, &str); PROFILE_FIELD_COUNT] {
        [
            ("skills", self.skills.as_str()),
            ("interests", self.interests.as_str()),
            ("short-term goals", self.short_term_goals.as_str()),
            ("long-term goals", self.long_term_goals.as_str()),
            ("field of study", self.field_of_study.as_str()),
            ("education level", self.education_level.as_str()),
        ]
    }

    pub fn filled_fields(&self) -> usize {
        self.fields()
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .count()
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Quiz, streak and XP counters. Signed so corrupted rows can be sanitised, not rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningSnapshot {
    pub total_attempts: i64,
    pub correct_answers: i64,
    pub streak_count: i64,
    pub xp_total: i64,
}

impl LearningSnapshot {
    /// Fraction of correct answers in [0, 1]; 0 when nothing was attempted.
    pub fn accuracy(&self) -> f64 {
        let attempts = self.total_attempts.max(0);
        if attempts == 0 {
            return 0.0;
        }
        self.correct_answers.clamp(0, attempts) as f64 / attempts as f64
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeSnapshot {
    /// 0–100
    pub ats_score: f64,
    /// 0–10
    pub overall_rating: f64,
}

/// Everything the aggregator reads. Any snapshot may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthScoreInputs {
    pub profile: Option<ProfileSnapshot>,
    pub learning: Option<LearningSnapshot>,
    pub resume: Option<ResumeSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl HealthStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => HealthStatus::Excellent,
            s if s >= 70 => HealthStatus::Good,
            s if s >= 50 => HealthStatus::Fair,
            _ => HealthStatus::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Capped points per sub-score, for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub profile_completeness: f64,
    pub match_quality: f64,
    pub quiz_accuracy: f64,
    pub streak: f64,
    pub xp: f64,
    pub ats: f64,
    pub rating: f64,
}

impl ScoreBreakdown {
    pub fn career_alignment(&self) -> f64 {
        self.profile_completeness + self.match_quality
    }

    pub fn growth_engagement(&self) -> f64 {
        self.quiz_accuracy + self.streak + self.xp
    }

    pub fn resume_readiness(&self) -> f64 {
        self.ats + self.rating
    }

    fn total(&self) -> f64 {
        self.career_alignment() + self.growth_engagement() + self.resume_readiness()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: u32,
    pub status: HealthStatus,
    pub breakdown: ScoreBreakdown,
}

/// Computes the aggregated score. Never panics; missing snapshots count as zero.
pub fn compute_health_score(inputs: &HealthScoreInputs) -> HealthScore {
    let mut breakdown = ScoreBreakdown::default();

    if let Some(profile) = &inputs.profile {
        breakdown.profile_completeness = profile.filled_fields() as f64
            / PROFILE_FIELD_COUNT as f64
            * PROFILE_COMPLETENESS_MAX;
        breakdown.match_quality = capped(
            profile.career_health_score.unwrap_or(0.0) * 0.15,
            MATCH_QUALITY_MAX,
        );
    }

    if let Some(learning) = &inputs.learning {
        breakdown.quiz_accuracy = learning.accuracy() * QUIZ_ACCURACY_MAX;
        breakdown.streak = capped(learning.streak_count.max(0) as f64 / 3.0, STREAK_MAX);
        breakdown.xp = capped(learning.xp_total.max(0) as f64 / 100.0, XP_MAX);
    }

    if let Some(resume) = &inputs.resume {
        breakdown.ats = capped(resume.ats_score / 100.0 * ATS_MAX, ATS_MAX);
        breakdown.rating = capped(resume.overall_rating / 10.0 * RATING_MAX, RATING_MAX);
    }

    let score = (breakdown.total().round() as u32).min(100);

    HealthScore {
        score,
        status: HealthStatus::from_score(score),
        breakdown,
    }
}

/// Clamps into [0, cap]; NaN becomes 0.
fn capped(value: f64, cap: f64) -> f64 {
    value.max(0.0).min(cap)
}
