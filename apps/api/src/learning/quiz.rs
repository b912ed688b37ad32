//! LLM-generated skill quizzes for roadmap topics.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::learning::prompts::{QUIZ_PROMPT, QUIZ_SYSTEM};
use crate::llm_client::prompts::render_prompt;
use crate::llm_client::LlmClient;

pub const QUESTIONS_PER_QUIZ: usize = 5;
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: usize,
    #[serde(default)]
    pub explanation: String,
}

/// A question as sent to the client, without the answer key.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionView {
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for QuizQuestionView {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResult {
    pub chosen_index: usize,
    pub answer_index: usize,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizGrade {
    pub correct: i64,
    pub total: i64,
    pub results: Vec<QuestionResult>,
}

/// Grades one answer per question against the stored key.
/// `None` when the answer count does not match the question count.
pub fn grade_quiz(questions: &[QuizQuestion], answers: &[usize]) -> Option<QuizGrade> {
    if questions.is_empty() || questions.len() != answers.len() {
        return None;
    }

    let results: Vec<QuestionResult> = questions
        .iter()
        .zip(answers)
        .map(|(q, &chosen)| QuestionResult {
            chosen_index: chosen,
            answer_index: q.answer_index,
            is_correct: chosen == q.answer_index,
            explanation: q.explanation.clone(),
        })
        .collect();

    Some(QuizGrade {
        correct: results.iter().filter(|r| r.is_correct).count() as i64,
        total: results.len() as i64,
        results,
    })
}

#[derive(Debug, Deserialize)]
struct QuizPayload {
    #[serde(default)]
    questions: Vec<QuizQuestion>,
}

/// Asks the LLM for a quiz and keeps only well-formed questions.
pub async fn generate_quiz(
    llm: &LlmClient,
    topic: &str,
    difficulty: Difficulty,
) -> Result<Vec<QuizQuestion>, AppError> {
    let count = QUESTIONS_PER_QUIZ.to_string();
    let prompt = render_prompt(
        QUIZ_PROMPT,
        &[
            ("topic", topic),
            ("difficulty", difficulty.as_str()),
            ("count", count.as_str()),
        ],
    );

    let payload: QuizPayload = llm
        .call_json(&prompt, QUIZ_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Quiz generation failed: {e}")))?;

    let received = payload.questions.len();
    let questions = retain_valid(payload.questions);
    if questions.len() < received {
        warn!(
            "Dropped {} malformed quiz questions for topic '{topic}'",
            received - questions.len()
        );
    }

    if questions.is_empty() {
        return Err(AppError::Llm(format!(
            "Quiz generation for '{topic}' returned no usable questions"
        )));
    }
    Ok(questions)
}

fn retain_valid(questions: Vec<QuizQuestion>) -> Vec<QuizQuestion> {
    questions
        .into_iter()
        .filter(|q| {
            !q.question.trim().is_empty()
                && q.options.len() == OPTIONS_PER_QUESTION
                && q.options.iter().all(|o| !o.trim().is_empty())
                && q.answer_index < q.options.len()
        })
        .take(QUESTIONS_PER_QUIZ)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: usize, answer_index: usize) -> QuizQuestion {
        QuizQuestion {
            question: "What does `?` do in Rust?".to_string(),
            options: (0..options).map(|i| format!("Option {i}")).collect(),
            answer_index,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_retain_valid_drops_malformed() {
        let kept = retain_valid(vec![
            question(4, 2),
            question(3, 0),
            question(4, 4),
            QuizQuestion {
                question: "  ".to_string(),
                ..question(4, 0)
            },
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].answer_index, 2);
    }

    #[test]
    fn test_retain_valid_caps_count() {
        let kept = retain_valid((0..8).map(|_| question(4, 1)).collect());
        assert_eq!(kept.len(), QUESTIONS_PER_QUIZ);
    }

    #[test]
    fn test_payload_parses() {
        let json = r#"{"questions": [{"question": "2+2?", "options": ["1","2","3","4"], "answer_index": 3}]}"#;
        let payload: QuizPayload = serde_json::from_str(json).unwrap();
        assert_eq!(retain_valid(payload.questions).len(), 1);
    }

    #[test]
    fn test_difficulty_defaults_to_intermediate() {
        assert_eq!(Difficulty::default(), Difficulty::Intermediate);
        let d: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(d.as_str(), "advanced");
    }

    #[test]
    fn test_grade_quiz_counts_correct_answers() {
        let questions = vec![question(4, 0), question(4, 2), question(4, 3)];
        let grade = grade_quiz(&questions, &[0, 1, 3]).unwrap();
        assert_eq!(grade.correct, 2);
        assert_eq!(grade.total, 3);
        assert!(!grade.results[1].is_correct);
        assert_eq!(grade.results[1].answer_index, 2);
    }

    #[test]
    fn test_grade_quiz_out_of_range_choice_is_wrong() {
        let grade = grade_quiz(&[question(4, 1)], &[9]).unwrap();
        assert_eq!(grade.correct, 0);
    }

    #[test]
    fn test_grade_quiz_rejects_mismatched_answers() {
        let questions = vec![question(4, 0), question(4, 1)];
        assert!(grade_quiz(&questions, &[0]).is_none());
        assert!(grade_quiz(&[], &[]).is_none());
    }

    #[test]
    fn test_view_hides_answer_key() {
        let json = serde_json::to_value(QuizQuestionView::from(&question(4, 2))).unwrap();
        assert!(json.get("answer_index").is_none());
        assert!(json.get("explanation").is_none());
        assert_eq!(json["options"].as_array().unwrap().len(), 4);
    }
}
