//! Chat reply formatting
//!
//! Answers from the "ask AI" panel are rendered more loosely than
//! summaries: no headers or lists, just escaped text with bold spans,
//! bullet glyphs and line breaks.

use std::sync::LazyLock;

use regex::Regex;

use super::summary_formatter::escape_html;

/// Non-greedy `**text**`, applied after escaping
static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern is valid")
});

/// Format an AI answer as an HTML paragraph
///
/// # Examples
///
/// ```
/// use application::format_ai_reply;
///
/// assert_eq!(
///     format_ai_reply("**Yes**, see:\n- clause 4"),
///     "<p><strong>Yes</strong>, see:<br>• clause 4</p>"
/// );
/// ```
#[must_use]
pub fn format_ai_reply(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            let escaped = escape_html(line);
            let bolded = BOLD_SPAN.replace_all(&escaped, "<strong>$1</strong>");
            match bolded.strip_prefix("- ").or_else(|| bolded.strip_prefix("* ")) {
                Some(rest) => format!("• {rest}"),
                None => bolded.into_owned(),
            }
        })
        .collect();

    format!("<p>{}</p>", lines.join("<br>"))
}
