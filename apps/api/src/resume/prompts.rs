// Resume analysis LLM prompt templates.

pub const RESUME_ANALYSIS_SYSTEM: &str = "\
You are an expert technical recruiter who knows how Applicant Tracking Systems parse resumes. \
Judge only what is in the resume text; never assume experience that is not written down.";

/// Replace `{target_role}` and `{resume_text}` before sending.
pub const RESUME_ANALYSIS_PROMPT: &str = r#"Analyse this resume for ATS compatibility and overall quality.

TARGET ROLE: {target_role}

RESUME TEXT:
{resume_text}

Return exactly this JSON structure:
{
  "ats_score": 0-100 number (how reliably an ATS would parse and rank this resume for the target role),
  "overall_rating": 0-10 number (overall quality as judged by a recruiter),
  "strengths": ["string"],
  "weaknesses": ["string"],
  "missing_keywords": ["keywords expected for the target role that do not appear"],
  "suggestions": ["concrete, actionable edits"]
}

RULES:
1. At most 6 items per list.
2. Penalise tables, images, unusual headings and missing contact details in ats_score.
3. Return ONLY the JSON object."#;
