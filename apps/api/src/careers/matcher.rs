//! Keyword matcher: deterministic career ranking from free-text skills and interests.
//!
//! Used when the AI advisor is disabled, fails, or returns nothing usable.
//!
//! Algorithm:
//! 1. Lower-case `skills + " " + interests`.
//! 2. Per archetype: +15 for every keyword found as a substring (recorded as matched),
//!    +10 for every required skill found as a substring (not recorded).
//! 3. Stable sort by score descending, keep the top 6.
//! 4. Percentage = clamp(60 + score, 60, 95) - 3 * rank.

use serde::{Deserialize, Serialize};

use crate::careers::catalog::{CareerArchetype, CAREER_CATALOG};

pub const KEYWORD_MATCH_POINTS: u32 = 15;
pub const SKILL_MATCH_POINTS: u32 = 10;
pub const MAX_MATCHES: usize = 6;

const MATCH_FLOOR: i32 = 60;
const MATCH_CEILING: i32 = 95;
const RANK_DECAY: i32 = 3;

/// Free-text profile fields the matcher reads. Built per request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSignal {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub field_of_study: String,
}

impl ProfileSignal {
    fn match_text(&self) -> String {
        format!("{} {}", self.skills, self.interests).to_lowercase()
    }
}

/// One ranked career produced by the matcher.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCareer {
    pub archetype: &'static CareerArchetype,
    /// Raw accumulator before normalisation.
    pub score: u32,
    pub matched_keywords: Vec<&'static str>,
    /// Not re-clamped after the rank decay, so the floor is 60 - 3 * 5 = 45.
    pub match_percentage: i32,
    pub roadmap: Vec<String>,
    pub rationale: String,
}

/// Ranks the built-in catalog against the profile.
pub fn score_careers_from_text(profile: &ProfileSignal) -> Vec<ScoredCareer> {
    score_against_catalog(profile, CAREER_CATALOG)
}

/// Ranks an arbitrary catalog. Always returns `min(6, catalog.len())` entries.
pub fn score_against_catalog(
    profile: &ProfileSignal,
    catalog: &'static [CareerArchetype],
) -> Vec<ScoredCareer> {
    let text = profile.match_text();

    let mut raw: Vec<(&'static CareerArchetype, u32, Vec<&'static str>)> = catalog
        .iter()
        .map(|archetype| {
            let (score, matched) = score_archetype(archetype, &text);
            (archetype, score, matched)
        })
        .collect();

    // sort_by is stable: equal scores keep catalog order
    raw.sort_by(|a, b| b.1.cmp(&a.1));

    raw.into_iter()
        .take(MAX_MATCHES)
        .enumerate()
        .map(|(index, (archetype, score, matched_keywords))| {
            let rationale = build_rationale(&matched_keywords, &profile.field_of_study);
            ScoredCareer {
                archetype,
                score,
                match_percentage: match_percentage(score, index),
                roadmap: build_roadmap(archetype),
                rationale,
                matched_keywords,
            }
        })
        .collect()
}

fn score_archetype(archetype: &'static CareerArchetype, text: &str) -> (u32, Vec<&'static str>) {
    let mut score = 0_u32;
    let mut matched = Vec::new();

    for keyword in archetype.keywords {
        if text.contains(&keyword.to_lowercase()) {
            score = score.saturating_add(KEYWORD_MATCH_POINTS);
            matched.push(*keyword);
        }
    }

    for skill in archetype.required_skills {
        if text.contains(&skill.to_lowercase()) {
            score = score.saturating_add(SKILL_MATCH_POINTS);
        }
    }

    (score, matched)
}

fn match_percentage(score: u32, index: usize) -> i32 {
    let raw = i32::try_from(score).unwrap_or(i32::MAX);
    let normalized = MATCH_FLOOR.saturating_add(raw).clamp(MATCH_FLOOR, MATCH_CEILING);
    normalized - RANK_DECAY * index as i32
}

fn build_rationale(matched_keywords: &[&str], field_of_study: &str) -> String {
    if !matched_keywords.is_empty() {
        return format!(
            "Matched based on your skills: {}",
            matched_keywords.join(", ")
        );
    }

    let field = field_of_study.trim();
    if field.is_empty() {
        "Recommended as a versatile path that fits a wide range of backgrounds".to_string()
    } else {
        format!("Recommended based on your background in {field}")
    }
}

fn build_roadmap(archetype: &CareerArchetype) -> Vec<String> {
    let first = archetype
        .required_skills
        .first()
        .copied()
        .unwrap_or(archetype.name);
    let second = archetype.required_skills.get(1).copied().unwrap_or(first);

    vec![
        format!("Learn {first} fundamentals"),
        "Build practice projects".to_string(),
        format!("Get certified in {second}"),
        "Create portfolio showcasing your work".to_string(),
        "Apply for entry-level positions".to_string(),
    ]
}
