// Gamified learning: quizzes, streaks, XP, levels and badges.

pub mod handlers;
pub mod prompts;
pub mod quiz;
pub mod rewards;
pub mod store;
pub mod streak;
