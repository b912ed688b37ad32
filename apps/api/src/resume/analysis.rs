//! ATS analysis of extracted resume text via the LLM.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::prompts::render_prompt;
use crate::llm_client::LlmClient;
use crate::resume::prompts::{RESUME_ANALYSIS_PROMPT, RESUME_ANALYSIS_SYSTEM};

/// Resume text beyond this many characters is not sent to the model.
pub const MAX_PROMPT_CHARS: usize = 12_000;
const MAX_LIST_ITEMS: usize = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub ats_score: f64,
    #[serde(default)]
    pub overall_rating: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ResumeAnalysis {
    /// Clamps scores into range and tidies the lists.
    pub fn sanitized(self) -> Self {
        Self {
            ats_score: clamp_score(self.ats_score, 100.0),
            overall_rating: clamp_score(self.overall_rating, 10.0),
            strengths: tidy(self.strengths),
            weaknesses: tidy(self.weaknesses),
            missing_keywords: tidy(self.missing_keywords),
            suggestions: tidy(self.suggestions),
        }
    }
}

pub async fn analyze_resume(
    llm: &LlmClient,
    resume_text: &str,
    target_role: Option<&str>,
) -> Result<ResumeAnalysis, AppError> {
    let target_role = target_role
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or("not specified; infer the most likely role from the resume");

    let prompt = render_prompt(
        RESUME_ANALYSIS_PROMPT,
        &[
            ("target_role", target_role),
            ("resume_text", truncate_chars(resume_text, MAX_PROMPT_CHARS)),
        ],
    );

    let analysis: ResumeAnalysis = llm
        .call_json(&prompt, RESUME_ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

    Ok(analysis.sanitized())
}

fn clamp_score(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value.clamp(0.0, max) * 10.0).round() / 10.0
}

fn tidy(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .take(MAX_LIST_ITEMS)
        .collect()
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
