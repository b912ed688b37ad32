// Career advisor LLM prompt templates.

pub const CAREER_SUGGEST_SYSTEM: &str = "\
You are an experienced career counsellor for students and early-career professionals. \
Recommend realistic careers grounded in the user's stated skills and interests.";

/// Replace `{skills}`, `{interests}`, `{goals}` and `{field_of_study}` before sending.
pub const CAREER_SUGGEST_PROMPT: &str = r#"Suggest up to 6 careers for this user.

SKILLS: {skills}
INTERESTS: {interests}
GOALS: {goals}
FIELD OF STUDY: {field_of_study}

Return exactly this JSON structure:
{
  "careers": [
    {
      "title": "string",
      "description": "one sentence",
      "match_percentage": 0-100 integer,
      "required_skills": ["string"],
      "roadmap": ["5 ordered, concrete steps"],
      "rationale": "why this fits the user, citing their skills",
      "timeline": "e.g. 6-9 months",
      "resources": ["https://..."]
    }
  ]
}

RULES:
1. Order careers by match_percentage, highest first.
2. Only cite skills the user actually listed in the rationale.
3. Return ONLY the JSON object."#;
