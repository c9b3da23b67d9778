// src/relay/prompt.rs
// System prompt assembly from a context snapshot

use crate::context::ContextSnapshot;

/// Fixed instructional template placed at the top of every system prompt
pub const SYSTEM_TEMPLATE: &str = "You are Network Gemini, a helpful network operations assistant.
Answer using the uploaded network context below when it is relevant.
If the context does not contain the answer, say so instead of guessing.
Keep answers concise and factual.";

/// Appended on its own line when an excerpt was cut to fit the budget
pub const TRUNCATION_MARKER: &str = "[truncated]";

const NO_CONTEXT: &str = "No network files have been uploaded yet.";

/// Cut `text` to at most `budget` characters, on a char boundary.
///
/// Returns the excerpt and whether anything was dropped.
pub fn truncate_chars(text: &str, budget: usize) -> (&str, bool) {
    match text.char_indices().nth(budget) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}

pub fn build_system_prompt(snapshot: &ContextSnapshot, char_budget: usize) -> String {
    let mut prompt = String::from(SYSTEM_TEMPLATE);
    prompt.push_str("\n\n");

    if snapshot.is_empty() {
        prompt.push_str(NO_CONTEXT);
        return prompt;
    }

    if let Some(summary) = &snapshot.summary {
        prompt.push_str("Context summary: ");
        prompt.push_str(summary);
        prompt.push('\n');
    }

    for (slot, text) in snapshot.filled() {
        let (excerpt, truncated) = truncate_chars(text, char_budget);
        prompt.push_str("\n### ");
        prompt.push_str(slot.label());
        prompt.push('\n');
        prompt.push_str(excerpt);
        if truncated {
            prompt.push('\n');
            prompt.push_str(TRUNCATION_MARKER);
        }
        prompt.push('\n');
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_within_budget() {
        assert_eq!(truncate_chars("short", 10), ("short", false));
        assert_eq!(truncate_chars("exact", 5), ("exact", false));
    }

    #[test]
    fn test_truncate_over_budget() {
        assert_eq!(truncate_chars("abcdef", 3), ("abc", true));
        assert_eq!(truncate_chars("abc", 0), ("", true));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // 'é' and '📡' are multi-byte
        let (excerpt, truncated) = truncate_chars("é📡ab", 2);
        assert_eq!(excerpt, "é📡");
        assert!(truncated);
    }

    #[test]
    fn test_prompt_without_context() {
        let prompt = build_system_prompt(&ContextSnapshot::default(), 100);
        assert!(prompt.starts_with(SYSTEM_TEMPLATE));
        assert!(prompt.contains(NO_CONTEXT));
    }

    #[test]
    fn test_prompt_embeds_summary_and_excerpts() {
        let snapshot = ContextSnapshot {
            alarm_data: Some("ALARM: cell X down".to_string()),
            network_log: Some("x".repeat(50)),
            summary: Some("alarm data: 1 lines scanned".to_string()),
            ..ContextSnapshot::default()
        };
        let prompt = build_system_prompt(&snapshot, 20);

        assert!(prompt.contains("Context summary: alarm data: 1 lines scanned"));
        assert!(prompt.contains("### alarm data\nALARM: cell X down\n"));
        assert!(prompt.contains(&format!("### network log\n{}\n{}", "x".repeat(20), TRUNCATION_MARKER)));
        assert!(!prompt.contains(&"x".repeat(21)));
        assert!(!prompt.contains("### network data"));
    }
}
