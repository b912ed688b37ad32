//! XP, levels and badges.

use serde::{Deserialize, Serialize};

pub const XP_PER_CORRECT_ANSWER: i64 = 10;
pub const PERFECT_QUIZ_BONUS: i64 = 25;
pub const ROADMAP_STEP_XP: i64 = 50;
pub const XP_PER_LEVEL: i64 = 500;

/// XP for one quiz attempt. `correct` is clamped into `[0, total]`.
pub fn quiz_xp(correct: i64, total: i64) -> i64 {
    let total = total.max(0);
    let correct = correct.clamp(0, total);
    let bonus = if total > 0 && correct == total {
        PERFECT_QUIZ_BONUS
    } else {
        0
    };
    correct * XP_PER_CORRECT_ANSWER + bonus
}

pub fn level_for_xp(xp: i64) -> i64 {
    xp.max(0) / XP_PER_LEVEL + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    FirstQuiz,
    PerfectQuiz,
    #[serde(rename = "streak_3")]
    Streak3,
    #[serde(rename = "streak_7")]
    Streak7,
    #[serde(rename = "streak_30")]
    Streak30,
    #[serde(rename = "xp_1000")]
    Xp1000,
    #[serde(rename = "roadmap_5")]
    Roadmap5,
}

impl Badge {
    pub const ALL: [Badge; 7] = [
        Badge::FirstQuiz,
        Badge::PerfectQuiz,
        Badge::Streak3,
        Badge::Streak7,
        Badge::Streak30,
        Badge::Xp1000,
        Badge::Roadmap5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::FirstQuiz => "first_quiz",
            Badge::PerfectQuiz => "perfect_quiz",
            Badge::Streak3 => "streak_3",
            Badge::Streak7 => "streak_7",
            Badge::Streak30 => "streak_30",
            Badge::Xp1000 => "xp_1000",
            Badge::Roadmap5 => "roadmap_5",
        }
    }

    pub fn from_key(key: &str) -> Option<Badge> {
        Badge::ALL.into_iter().find(|badge| badge.as_str() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Badge::FirstQuiz => "First Steps",
            Badge::PerfectQuiz => "Quiz Ace",
            Badge::Streak3 => "Streak Starter",
            Badge::Streak7 => "Week Warrior",
            Badge::Streak30 => "Monthly Master",
            Badge::Xp1000 => "XP Hunter",
            Badge::Roadmap5 => "Pathfinder",
        }
    }
}

/// Badge as shown to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeAward {
    pub badge: Badge,
    pub title: &'static str,
}

impl From<Badge> for BadgeAward {
    fn from(badge: Badge) -> Self {
        Self {
            badge,
            title: badge.title(),
        }
    }
}

/// Snapshot of the counters badges are judged on, after the current activity.
#[derive(Debug, Clone, Default)]
pub struct BadgeProgress {
    pub quizzes_taken: i64,
    pub perfect_quiz: bool,
    pub streak: i64,
    pub xp_total: i64,
    pub roadmap_steps_completed: i64,
}

/// Every badge the progress qualifies for. Callers persist idempotently.
pub fn earned_badges(progress: &BadgeProgress) -> Vec<Badge> {
    Badge::ALL
        .into_iter()
        .filter(|badge| match badge {
            Badge::FirstQuiz => progress.quizzes_taken >= 1,
            Badge::PerfectQuiz => progress.perfect_quiz,
            Badge::Streak3 => progress.streak >= 3,
            Badge::Streak7 => progress.streak >= 7,
            Badge::Streak30 => progress.streak >= 30,
            Badge::Xp1000 => progress.xp_total >= 1000,
            Badge::Roadmap5 => progress.roadmap_steps_completed >= 5,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_xp_with_perfect_bonus() {
        assert_eq!(quiz_xp(5, 5), 75);
        assert_eq!(quiz_xp(3, 5), 30);
        assert_eq!(quiz_xp(0, 5), 0);
    }

    #[test]
    fn test_quiz_xp_sanitises_counts() {
        assert_eq!(quiz_xp(9, 5), 75);
        assert_eq!(quiz_xp(-2, 5), 0);
        assert_eq!(quiz_xp(0, 0), 0);
    }

    #[test]
    fn test_levels() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(499), 1);
        assert_eq!(level_for_xp(500), 2);
        assert_eq!(level_for_xp(-20), 1);
    }

    #[test]
    fn test_nothing_earned_from_zero() {
        assert!(earned_badges(&BadgeProgress::default()).is_empty());
    }

    #[test]
    fn test_streak_badges_accumulate() {
        let badges = earned_badges(&BadgeProgress {
            quizzes_taken: 12,
            streak: 7,
            ..Default::default()
        });
        assert_eq!(badges, vec![Badge::FirstQuiz, Badge::Streak3, Badge::Streak7]);
    }

    #[test]
    fn test_badge_keys_match_serde() {
        for badge in Badge::ALL {
            let json = serde_json::to_string(&badge).unwrap();
            assert_eq!(json, format!("\"{}\"", badge.as_str()));
        }
    }

    #[test]
    fn test_badge_from_key() {
        assert_eq!(Badge::from_key("streak_7"), Some(Badge::Streak7));
        assert_eq!(Badge::from_key("gold_star"), None);
    }

    #[test]
    fn test_award_carries_title() {
        let award = BadgeAward::from(Badge::PerfectQuiz);
        assert_eq!(award.title, "Quiz Ace");
        let json = serde_json::to_value(award).unwrap();
        assert_eq!(json["badge"], "perfect_quiz");
        assert_eq!(json["title"], "Quiz Ace");
    }
}
