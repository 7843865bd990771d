//! Cleanup of model feedback text before it is shown to students.

use regex::Regex;
use std::sync::LazyLock;

static CODEBLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:.*)\n([\s\S]*?)```").unwrap());

/// The part of `text` after the last occurrence of `delimiter`, or
/// `"[internal error]"` when the delimiter never appears. Prompts that
/// ask the model to separate reasoning from publishable feedback rely
/// on this cut.
pub fn cut_at_delimiter(text: &str, delimiter: &str) -> String {
    match text.rsplit_once(delimiter) {
        Some((_, tail)) => tail.to_string(),
        None => "[internal error]".to_string(),
    }
}

/// Replace every markdown code block with `[CODE REDACTED]` so feedback
/// never hands students a complete solution.
pub fn redact_codeblocks(text: &str) -> String {
    CODEBLOCK.replace_all(text, "[CODE REDACTED]").into_owned()
}

/// Apply the full cleanup pass: optional delimiter cut, code redaction,
/// surrounding-whitespace trim.
pub fn clean_feedback(text: &str, delimiter: Option<&str>) -> String {
    let text = match delimiter {
        Some(delimiter) => cut_at_delimiter(text, delimiter),
        None => text.to_string(),
    };
    redact_codeblocks(&text).trim().to_string()
}
