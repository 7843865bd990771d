//! Assembles one prompt from a problem, resolved code, and config.

use super::config::PromptConfig;
use crate::assignment::ProblemStatement;

/// Build the prompt for one problem.
///
/// Layout, in order: the general fragment, an optional context block, the
/// statement block, an optional grading-note block, an optional
/// dependencies block, and the code block. Each block wraps its text in
/// triple-backtick fences between the matching `pre_*`/`post_*` fragments.
/// Blank code becomes a `;; blank response` placeholder so the model is
/// told explicitly that the student wrote nothing.
pub fn build_prompt(
    problem: &ProblemStatement,
    code: &str,
    config: &PromptConfig,
    dependency_code: &str,
) -> String {
    let mut prompt = config.section_for("general", problem);

    if !problem.context.trim().is_empty() {
        push_block(&mut prompt, config, problem, "context", problem.context.trim());
    }

    push_block(
        &mut prompt,
        config,
        problem,
        "statement",
        problem.statement.trim(),
    );

    if !problem.grading_note.is_empty() {
        push_block(
            &mut prompt,
            config,
            problem,
            "gradenote",
            problem.grading_note.trim(),
        );
    }

    if !dependency_code.is_empty() {
        push_block(
            &mut prompt,
            config,
            problem,
            "dependencies",
            dependency_code.trim(),
        );
    }

    let code = code.trim();
    let code = if code.is_empty() { ";; blank response" } else { code };
    push_block(&mut prompt, config, problem, "code", code);

    prompt
}

fn push_block(
    prompt: &mut String,
    config: &PromptConfig,
    problem: &ProblemStatement,
    name: &str,
    body: &str,
) {
    prompt.push_str(&config.section_for(&format!("pre_{name}"), problem));
    prompt.push_str(&format!("```\n{body}\n```"));
    prompt.push_str(&config.section_for(&format!("post_{name}"), problem));
}
