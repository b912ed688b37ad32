use serde::Deserialize;
use uuid::Uuid;

use crate::careers::matcher::ProfileSignal;
use crate::models::profile::CareerProfileRow;

pub const MAX_FIELD_CHARS: usize = 2_000;

/// Request body for PUT /api/v1/profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProfileRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub short_term_goals: String,
    #[serde(default)]
    pub long_term_goals: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub education_level: String,
}

impl UpsertProfileRequest {
    /// Trims every field and rejects oversized ones. Returns the list of problems.
    pub fn normalized(mut self) -> Result<Self, Vec<String>> {
        let mut problems = Vec::new();
        for (name, value) in [
            ("skills", &mut self.skills),
            ("interests", &mut self.interests),
            ("short_term_goals", &mut self.short_term_goals),
            ("long_term_goals", &mut self.long_term_goals),
            ("field_of_study", &mut self.field_of_study),
            ("education_level", &mut self.education_level),
        ] {
            *value = value.trim().to_string();
            let chars = value.chars().count();
            if chars > MAX_FIELD_CHARS {
                problems.push(format!(
                    "{name} is {chars} characters; the limit is {MAX_FIELD_CHARS}"
                ));
            }
        }

        if problems.is_empty() {
            Ok(self)
        } else {
            Err(problems)
        }
    }
}

impl From<&CareerProfileRow> for ProfileSignal {
    fn from(row: &CareerProfileRow) -> Self {
        let goals = [row.short_term_goals.trim(), row.long_term_goals.trim()]
            .into_iter()
            .filter(|g| !g.is_empty())
            .collect::<Vec<_>>()
            .join(". ");
        Self {
            skills: row.skills.clone(),
            interests: row.interests.clone(),
            goals,
            field_of_study: row.field_of_study.clone(),
        }
    }
}
