//! Post-processing for raw model output.
//!
//! The steps run in a fixed order; later steps assume earlier ones already ran
//! (quote stripping must happen before lead-in stripping).

use once_cell::sync::Lazy;
use regex::Regex;

type CleanupStep = fn(&str) -> String;

/// The ordered cleanup pipeline.
const PIPELINE: &[CleanupStep] = &[
    strip_code_fences,
    strip_bold_markers,
    strip_wrapping_quotes,
    strip_lead_in,
    trim_whitespace,
];

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("valid code fence regex"));

/// Surrounding whitespace is tolerated so a quote before a trailing newline still counts.
static WRAPPING_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*["']|["']\s*$"#).expect("valid quote regex"));

/// Each phrase must end at a colon, whitespace or end of text, so words like
/// "Promptly" or "versioning" are left alone. Bare "Prompt" needs its colon.
static LEAD_IN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?:here(?:'|’)s the enhanced prompt|enhanced prompt|enhanced version)(?::\s*|\s+|$)|prompt:\s*)",
    )
    .expect("valid lead-in regex")
});

/// Runs the full pipeline over a raw model response.
pub fn clean_response(raw: &str) -> String {
    PIPELINE
        .iter()
        .fold(raw.to_string(), |text, step| step(&text))
}

/// Removes fenced code blocks, delimiters and contents included.
fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").into_owned()
}

fn strip_bold_markers(text: &str) -> String {
    text.replace("**", "")
}

/// Drops one leading and one trailing straight quote, each only if present.
fn strip_wrapping_quotes(text: &str) -> String {
    WRAPPING_QUOTE.replace_all(text, "").into_owned()
}

/// Drops at most one boilerplate lead-in, only at position 0.
fn strip_lead_in(text: &str) -> String {
    LEAD_IN.replace(text, "").into_owned()
}

fn trim_whitespace(text: &str) -> String {
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_fenced_blocks_entirely() {
        let raw = "Create a landing page.\n```html\n<div>hero</div>\n```\nUse a bold hero.";
        let cleaned = clean_response(raw);
        assert!(!cleaned.contains("```"));
        assert!(!cleaned.contains("<div>hero</div>"));
        assert!(cleaned.starts_with("Create a landing page."));
        assert!(cleaned.ends_with("Use a bold hero."));
    }

    #[test]
    fn test_removes_multiple_fenced_blocks_non_greedy() {
        let raw = "A ```one``` B ```two``` C";
        assert_eq!(clean_response(raw), "A  B  C");
    }

    #[test]
    fn test_removes_bold_markers() {
        assert_eq!(
            clean_response("Build a **fast** and **accessible** blog"),
            "Build a fast and accessible blog"
        );
    }

    #[test]
    fn test_strips_one_pair_of_quotes() {
        assert_eq!(clean_response("\"Design a logo\""), "Design a logo");
        assert_eq!(clean_response("'Design a logo'"), "Design a logo");
        assert_eq!(clean_response("\"\"nested\"\""), "\"nested\"");
    }

    #[test]
    fn test_strips_lead_in_case_insensitively() {
        assert_eq!(clean_response("Prompt: Build a blog"), "Build a blog");
        assert_eq!(clean_response("ENHANCED PROMPT: Build a blog"), "Build a blog");
        assert_eq!(clean_response("Enhanced version Build a blog"), "Build a blog");
        assert_eq!(
            clean_response("Here's the enhanced prompt:\n\nBuild a blog"),
            "Build a blog"
        );
    }

    #[test]
    fn test_strips_at_most_one_lead_in() {
        assert_eq!(
            clean_response("Enhanced prompt: Prompt: Build a blog"),
            "Prompt: Build a blog"
        );
    }

    #[test]
    fn test_lead_in_must_end_at_word_boundary() {
        for raw in [
            "Promptly build a landing page",
            "Prompts should be concise",
            "Enhanced versioning system for docs",
            "Enhanced prompting guide for support agents",
            "Prompt engineering tips for a support bot",
        ] {
            assert_eq!(clean_response(raw), raw);
        }
    }

    #[test]
    fn test_lead_in_alone_is_removed() {
        assert_eq!(clean_response("Enhanced version"), "");
    }

    #[test]
    fn test_quotes_before_trailing_newline_are_stripped() {
        assert_eq!(clean_response("\"Design a logo\"\n"), "Design a logo");
        assert_eq!(clean_response("\n  'Design a logo'  \n"), "Design a logo");
    }

    #[test]
    fn test_lead_in_only_at_start() {
        let raw = "Write an essay. Prompt: keep it short.";
        assert_eq!(clean_response(raw), raw);
    }

    #[test]
    fn test_quotes_stripped_before_lead_in() {
        assert_eq!(clean_response("\"Prompt: Build a blog\""), "Build a blog");
    }

    #[test]
    fn test_leaves_plain_text_untouched() {
        let raw = "Create a responsive portfolio site with a project gallery and contact form.";
        assert_eq!(clean_response(raw), raw);
    }

    #[test]
    fn test_idempotent_on_cleaned_text() {
        let samples = [
            "\"Design a **modern** landing page for a coffee brand\"",
            "Here's the enhanced prompt: Create a dashboard.\n```sql\nselect 1;\n```\n",
            "Prompt: **Build** a blog with markdown support, tags and RSS.",
            "  plain text with trailing space  ",
            "\"Design a logo\"\n",
            "Enhanced version:\nCreate a booking page for a dental clinic.\n",
        ];
        for raw in samples {
            let once = clean_response(raw);
            assert_eq!(clean_response(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_steps_run_in_order() {
        assert_eq!(PIPELINE.len(), 5);
        let raw = "**Prompt:** ```x``` \"Build it\"";
        // bold removed → "Prompt: ..." can then be stripped at position 0
        assert_eq!(clean_response(raw), "\"Build it");
    }
}
