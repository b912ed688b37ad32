// Prompt fragments shared by every JSON-producing call.
// Feature-specific prompts live next to the feature (careers, learning, resume).

/// Appended to every system prompt sent through `LlmClient::call_json`.
pub const JSON_ONLY_SYSTEM: &str = "\
Respond with a single valid JSON object and nothing else. \
Do not wrap it in markdown code fences and do not add commentary.";

/// Joins a feature's system prompt with the JSON-only instruction.
pub fn json_system(system: &str) -> String {
    let system = system.trim();
    if system.is_empty() {
        JSON_ONLY_SYSTEM.to_string()
    } else {
        format!("{system}\n\n{JSON_ONLY_SYSTEM}")
    }
}

/// Fills `{name}` placeholders in one pass over the template.
/// Inserted values are never rescanned, so user text containing `{...}` stays literal.
pub fn render_prompt(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_fills_known_placeholders() {
        let prompt = render_prompt(
            "Skills: {skills}\nInterests: {interests}",
            &[("skills", "rust"), ("interests", "compilers")],
        );
        assert_eq!(prompt, "Skills: rust\nInterests: compilers");
    }

    #[test]
    fn test_render_prompt_does_not_rescan_values() {
        let prompt = render_prompt(
            "{skills} / {interests}",
            &[("skills", "likes {interests} braces"), ("interests", "maths")],
        );
        assert_eq!(prompt, "likes {interests} braces / maths");
    }

    #[test]
    fn test_render_prompt_keeps_json_braces() {
        let prompt = render_prompt(r#"{"topic": "{topic}", "n": {count}}"#, &[("topic", "SQL")]);
        assert_eq!(prompt, r#"{"topic": "SQL", "n": {count}}"#);
    }

    #[test]
    fn test_json_system_appends_instruction() {
        let system = json_system("You are a career counsellor.");
        assert!(system.starts_with("You are a career counsellor."));
        assert!(system.ends_with(JSON_ONLY_SYSTEM));
    }

    #[test]
    fn test_json_system_empty_base() {
        assert_eq!(json_system("   "), JSON_ONLY_SYSTEM);
    }
}
