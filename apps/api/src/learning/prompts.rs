// Learning module LLM prompt templates.

pub const QUIZ_SYSTEM: &str = "\
You are a patient technical instructor writing short skill-check quizzes. \
Questions must be factually correct and unambiguous, with exactly one right answer.";

/// Replace `{topic}`, `{difficulty}` and `{count}` before sending.
pub const QUIZ_PROMPT: &str = r#"Write a {difficulty} multiple-choice quiz with {count} questions on: {topic}

Return exactly this JSON structure:
{
  "questions": [
    {
      "question": "string",
      "options": ["A", "B", "C", "D"],
      "answer_index": 0,
      "explanation": "one or two sentences on why the answer is correct"
    }
  ]
}

RULES:
1. Every question has exactly 4 options.
2. answer_index is the 0-based index of the correct option.
3. Return ONLY the JSON object."#;
