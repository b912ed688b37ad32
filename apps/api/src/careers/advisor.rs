//! Career advisor: AI-first career suggestions with a keyword-matcher fallback.
//!
//! `AppState` holds an `Arc<dyn CareerAdvisor>`. The advisor returns an explicit
//! `Result`; `resolve_suggestions` decides between its output and the matcher.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::careers::matcher::{score_careers_from_text, ProfileSignal, MAX_MATCHES};
use crate::careers::models::{CareerSuggestion, SuggestionSource};
use crate::careers::prompts::{CAREER_SUGGEST_PROMPT, CAREER_SUGGEST_SYSTEM};
use crate::llm_client::prompts::render_prompt;
use crate::llm_client::{LlmClient, LlmError};

/// Produces career suggestions for a profile. Implement this to swap backends.
#[async_trait]
pub trait CareerAdvisor: Send + Sync {
    async fn suggest(&self, profile: &ProfileSignal) -> Result<Vec<CareerSuggestion>, LlmError>;
}

/// Claude-backed advisor.
pub struct LlmCareerAdvisor(pub LlmClient);

#[derive(Debug, Deserialize)]
struct AdvisorResponse {
    #[serde(default)]
    careers: Vec<CareerSuggestion>,
}

#[async_trait]
impl CareerAdvisor for LlmCareerAdvisor {
    async fn suggest(&self, profile: &ProfileSignal) -> Result<Vec<CareerSuggestion>, LlmError> {
        let prompt = advisor_prompt(profile);

        let response: AdvisorResponse = self.0.call_json(&prompt, CAREER_SUGGEST_SYSTEM).await?;
        Ok(sanitize(response.careers))
    }
}

fn advisor_prompt(profile: &ProfileSignal) -> String {
    render_prompt(
        CAREER_SUGGEST_PROMPT,
        &[
            ("skills", profile.skills.as_str()),
            ("interests", profile.interests.as_str()),
            ("goals", profile.goals.as_str()),
            ("field_of_study", profile.field_of_study.as_str()),
        ],
    )
}

/// Result of a suggestion request, tagged with the path that produced it.
#[derive(Debug, Clone)]
pub struct SuggestionOutcome {
    pub suggestions: Vec<CareerSuggestion>,
    pub source: SuggestionSource,
}

/// Asks the advisor (when present) and falls back to the keyword matcher.
pub async fn suggest_careers(
    advisor: Option<&dyn CareerAdvisor>,
    profile: &ProfileSignal,
) -> SuggestionOutcome {
    let ai_result = match advisor {
        Some(advisor) => Some(advisor.suggest(profile).await),
        None => None,
    };
    resolve_suggestions(ai_result, profile)
}

/// Picks the AI output when it is usable, otherwise the keyword matcher's.
pub fn resolve_suggestions(
    ai_result: Option<Result<Vec<CareerSuggestion>, LlmError>>,
    profile: &ProfileSignal,
) -> SuggestionOutcome {
    match ai_result {
        Some(Ok(suggestions)) if !suggestions.is_empty() => {
            info!("Using {} AI career suggestions", suggestions.len());
            return SuggestionOutcome {
                suggestions,
                source: SuggestionSource::Ai,
            };
        }
        Some(Ok(_)) => warn!("AI advisor returned no usable careers, using keyword matcher"),
        Some(Err(e)) => warn!("AI advisor failed ({e}), using keyword matcher"),
        None => info!("AI suggestions disabled, using keyword matcher"),
    }

    SuggestionOutcome {
        suggestions: score_careers_from_text(profile)
            .into_iter()
            .map(CareerSuggestion::from)
            .collect(),
        source: SuggestionSource::Keyword,
    }
}

/// Drops untitled entries, clamps percentages, keeps the best six in the model's order.
fn sanitize(careers: Vec<CareerSuggestion>) -> Vec<CareerSuggestion> {
    careers
        .into_iter()
        .filter(|c| !c.title.trim().is_empty())
        .map(|mut c| {
            c.match_percentage = c.match_percentage.clamp(0, 100);
            c
        })
        .take(MAX_MATCHES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubAdvisor(Result<Vec<CareerSuggestion>, fn() -> LlmError>);

    #[async_trait]
    impl CareerAdvisor for StubAdvisor {
        async fn suggest(&self, _profile: &ProfileSignal) -> Result<Vec<CareerSuggestion>, LlmError> {
            match &self.0 {
                Ok(list) => Ok(list.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn ai_career(title: &str, pct: i32) -> CareerSuggestion {
        CareerSuggestion {
            title: title.to_string(),
            description: String::new(),
            match_percentage: pct,
            required_skills: vec![],
            roadmap: vec![],
            rationale: String::new(),
            timeline: String::new(),
            resources: vec![],
        }
    }

    fn python_profile() -> ProfileSignal {
        ProfileSignal {
            skills: "python django".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_success_supersedes_matcher() {
        let outcome = resolve_suggestions(
            Some(Ok(vec![ai_career("Site Reliability Engineer", 91)])),
            &python_profile(),
        );
        assert_eq!(outcome.source, SuggestionSource::Ai);
        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].title, "Site Reliability Engineer");
    }

    #[test]
    fn test_ai_failure_falls_back() {
        let outcome = resolve_suggestions(Some(Err(LlmError::EmptyContent)), &python_profile());
        assert_eq!(outcome.source, SuggestionSource::Keyword);
        assert_eq!(outcome.suggestions.len(), MAX_MATCHES);
        assert_eq!(outcome.suggestions[0].title, "Python Developer");
    }

    #[test]
    fn test_empty_ai_result_falls_back() {
        let outcome = resolve_suggestions(Some(Ok(vec![])), &python_profile());
        assert_eq!(outcome.source, SuggestionSource::Keyword);
    }

    #[test]
    fn test_disabled_advisor_uses_matcher() {
        let outcome = resolve_suggestions(None, &python_profile());
        assert_eq!(outcome.source, SuggestionSource::Keyword);
    }

    #[test]
    fn test_prompt_keeps_braces_in_profile_text() {
        let prompt = advisor_prompt(&ProfileSignal {
            skills: "templating with {interests} syntax".to_string(),
            interests: "robotics".to_string(),
            ..Default::default()
        });
        assert!(prompt.contains("SKILLS: templating with {interests} syntax"));
        assert!(prompt.contains("INTERESTS: robotics"));
        assert!(!prompt.contains("{skills}"));
    }

    #[test]
    fn test_sanitize_clamps_and_filters() {
        let cleaned = sanitize(vec![
            ai_career("  ", 80),
            ai_career("Data Engineer", 140),
            ai_career("Analyst", -3),
        ]);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].match_percentage, 100);
        assert_eq!(cleaned[1].match_percentage, 0);
    }

    #[test]
    fn test_sanitize_caps_at_six() {
        let many: Vec<_> = (0..9).map(|i| ai_career(&format!("Career {i}"), 70)).collect();
        assert_eq!(sanitize(many).len(), MAX_MATCHES);
    }

    #[tokio::test]
    async fn test_suggest_careers_with_failing_advisor() {
        let advisor = StubAdvisor(Err(|| LlmError::RateLimited { retries: 3 }));
        let outcome = suggest_careers(Some(&advisor), &python_profile()).await;
        assert_eq!(outcome.source, SuggestionSource::Keyword);
        assert_eq!(outcome.suggestions[0].title, "Python Developer");
    }

    #[tokio::test]
    async fn test_suggest_careers_with_working_advisor() {
        let advisor = StubAdvisor(Ok(vec![ai_career("Backend Developer", 90)]));
        let outcome = suggest_careers(Some(&advisor), &python_profile()).await;
        assert_eq!(outcome.source, SuggestionSource::Ai);
    }
}
