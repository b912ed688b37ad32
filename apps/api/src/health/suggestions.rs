//! Improvement tips derived from the same inputs as the health score.
//! Rules run in a fixed order (profile, engagement, resume, general) and the first five win.

use crate::health::score::{HealthScore, HealthScoreInputs, HealthStatus};

pub const MAX_SUGGESTIONS: usize = 5;

const MIN_QUIZ_ACCURACY: f64 = 0.6;
const MIN_STREAK_DAYS: i64 = 3;
const MIN_XP: i64 = 200;
const MIN_ATS_SCORE: f64 = 70.0;
const MIN_RESUME_RATING: f64 = 7.0;

pub fn generate_suggestions(inputs: &HealthScoreInputs, score: &HealthScore) -> Vec<String> {
    let mut tips = Vec::new();

    match &inputs.profile {
        None => tips.push(
            "Complete your career profile (skills, interests, goals and education) to unlock personalised recommendations"
                .to_string(),
        ),
        Some(profile) => {
            let missing = profile.missing_fields();
            if !missing.is_empty() {
                tips.push(format!(
                    "Complete your profile by adding your {}",
                    missing.join(", ")
                ));
            }
            if profile.career_health_score.unwrap_or(0.0) <= 0.0 {
                tips.push(
                    "Generate career recommendations to see how well your profile aligns with a career path"
                        .to_string(),
                );
            }
        }
    }

    match &inputs.learning {
        Some(learning) if learning.total_attempts > 0 => {
            let accuracy = learning.accuracy();
            if accuracy < MIN_QUIZ_ACCURACY {
                tips.push(format!(
                    "Review your roadmap material: quiz accuracy is {:.0}%, aim for at least 60%",
                    accuracy * 100.0
                ));
            }
            if learning.streak_count < MIN_STREAK_DAYS {
                tips.push(
                    "Build a learning streak by practising at least 3 days in a row".to_string(),
                );
            }
            if learning.xp_total < MIN_XP {
                tips.push("Complete more roadmap steps and quizzes to earn XP".to_string());
            }
        }
        _ => tips.push("Take your first skill quiz to start tracking your learning progress".to_string()),
    }

    match &inputs.resume {
        None => tips.push(
            "Upload your resume to get an ATS compatibility analysis".to_string(),
        ),
        Some(resume) => {
            if resume.ats_score < MIN_ATS_SCORE {
                tips.push(format!(
                    "Raise your ATS score ({:.0}/100) with role-specific keywords and simple formatting",
                    resume.ats_score.max(0.0)
                ));
            }
            if resume.overall_rating < MIN_RESUME_RATING {
                tips.push(
                    "Strengthen your resume with quantified achievements and clear section headings"
                        .to_string(),
                );
            }
        }
    }

    tips.push(
        match score.status {
            HealthStatus::Excellent => {
                "Excellent work! Keep your streak alive and start applying to your top-matched roles"
            }
            HealthStatus::Good => {
                "You're on a good track: close the remaining gaps to reach an excellent score"
            }
            HealthStatus::Fair => "Focus on your weakest area first for the biggest score gain",
            HealthStatus::NeedsImprovement => {
                "Start small: complete your profile, then take one quiz a day"
            }
        }
        .to_string(),
    );

    tips.truncate(MAX_SUGGESTIONS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::score::{
        compute_health_score, LearningSnapshot, ProfileSnapshot, ResumeSnapshot,
    };

    fn tips_for(inputs: &HealthScoreInputs) -> Vec<String> {
        let score = compute_health_score(inputs);
        generate_suggestions(inputs, &score)
    }

    fn strong_inputs() -> HealthScoreInputs {
        HealthScoreInputs {
            profile: Some(ProfileSnapshot {
                skills: "python".to_string(),
                interests: "data".to_string(),
                short_term_goals: "internship".to_string(),
                long_term_goals: "lead".to_string(),
                field_of_study: "CS".to_string(),
                education_level: "BSc".to_string(),
                career_health_score: Some(90.0),
            }),
            learning: Some(LearningSnapshot {
                total_attempts: 20,
                correct_answers: 18,
                streak_count: 12,
                xp_total: 1500,
            }),
            resume: Some(ResumeSnapshot {
                ats_score: 88.0,
                overall_rating: 8.5,
            }),
        }
    }

    #[test]
    fn test_empty_inputs_start_with_profile_tip() {
        let tips = tips_for(&HealthScoreInputs::default());
        assert!(!tips.is_empty());
        assert!(tips[0].contains("profile"));
        assert!(tips.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn test_strong_inputs_only_get_general_tip() {
        let tips = tips_for(&strong_inputs());
        assert_eq!(tips.len(), 1);
        assert!(tips[0].starts_with("Excellent work"));
    }

    #[test]
    fn test_never_more_than_five() {
        let inputs = HealthScoreInputs {
            profile: Some(ProfileSnapshot::default()),
            learning: Some(LearningSnapshot {
                total_attempts: 10,
                correct_answers: 1,
                streak_count: 0,
                xp_total: 10,
            }),
            resume: Some(ResumeSnapshot {
                ats_score: 20.0,
                overall_rating: 2.0,
            }),
        };
        let tips = tips_for(&inputs);
        assert_eq!(tips.len(), MAX_SUGGESTIONS);
        // profile rules come first
        assert!(tips[0].starts_with("Complete your profile"));
        assert!(tips[1].starts_with("Generate career recommendations"));
        assert!(tips.iter().all(|t| !t.trim().is_empty()));
    }

    #[test]
    fn test_missing_fields_are_named() {
        let mut inputs = strong_inputs();
        if let Some(profile) = inputs.profile.as_mut() {
            profile.long_term_goals.clear();
            profile.education_level = "  ".to_string();
        }
        let tips = tips_for(&inputs);
        assert_eq!(
            tips[0],
            "Complete your profile by adding your long-term goals, education level"
        );
    }

    #[test]
    fn test_low_accuracy_reports_percentage() {
        let mut inputs = strong_inputs();
        if let Some(learning) = inputs.learning.as_mut() {
            learning.correct_answers = 9;
        }
        let tips = tips_for(&inputs);
        assert!(tips.iter().any(|t| t.contains("45%")));
    }

    #[test]
    fn test_low_ats_score_tip() {
        let mut inputs = strong_inputs();
        inputs.resume = Some(ResumeSnapshot {
            ats_score: 55.0,
            overall_rating: 9.0,
        });
        let tips = tips_for(&inputs);
        assert!(tips.iter().any(|t| t.contains("55/100")));
    }

    #[test]
    fn test_no_quiz_attempts_suggests_quiz() {
        let mut inputs = strong_inputs();
        inputs.learning = Some(LearningSnapshot::default());
        let tips = tips_for(&inputs);
        assert!(tips.iter().any(|t| t.contains("first skill quiz")));
    }
}
