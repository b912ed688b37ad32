use serde::{Deserialize, Serialize};

use crate::careers::matcher::ScoredCareer;

/// Where a suggestion set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    Ai,
    Keyword,
}

impl SuggestionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionSource::Ai => "ai",
            SuggestionSource::Keyword => "keyword",
        }
    }
}

/// A career recommendation as persisted and returned to clients.
/// Both the AI advisor and the keyword matcher produce this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub match_percentage: i32,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<String>,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl From<ScoredCareer> for CareerSuggestion {
    fn from(scored: ScoredCareer) -> Self {
        let archetype = scored.archetype;
        Self {
            title: archetype.name.to_string(),
            description: archetype.description.to_string(),
            match_percentage: scored.match_percentage,
            required_skills: archetype
                .required_skills
                .iter()
                .map(|s| s.to_string())
                .collect(),
            roadmap: scored.roadmap,
            rationale: scored.rationale,
            timeline: archetype.timeline.to_string(),
            resources: archetype.resources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::careers::matcher::{score_careers_from_text, ProfileSignal};

    #[test]
    fn test_conversion_keeps_rank_fields() {
        let signal = ProfileSignal {
            skills: "python django".to_string(),
            ..Default::default()
        };
        let top = score_careers_from_text(&signal).remove(0);
        let pct = top.match_percentage;
        let suggestion = CareerSuggestion::from(top);
        assert_eq!(suggestion.title, "Python Developer");
        assert_eq!(suggestion.match_percentage, pct);
        assert_eq!(suggestion.roadmap.len(), 5);
        assert!(!suggestion.resources.is_empty());
    }

    #[test]
    fn test_ai_payload_tolerates_missing_optional_fields() {
        let json = r#"{"title": "Data Engineer", "match_percentage": 88}"#;
        let suggestion: CareerSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(suggestion.title, "Data Engineer");
        assert!(suggestion.roadmap.is_empty());
    }

    #[test]
    fn test_source_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&SuggestionSource::Ai).unwrap(), "\"ai\"");
        assert_eq!(SuggestionSource::Keyword.as_str(), "keyword");
    }
}
