//! Feedback prompt assembly.
//!
//! Turns a validated problem plus the student's resolved code into the
//! prompt text an external language model would receive. Actually calling
//! a model, and posting its output anywhere, is out of scope; the
//! `prompt` command prints assembled requests instead.

mod builder;
mod config;
mod postprocess;


pub use builder::build_prompt;
pub use config::PromptConfig;
pub use postprocess::{clean_feedback, cut_at_delimiter, redact_codeblocks};

use crate::assignment::ProblemStatement;
use crate::document::{Document, MarkerPath};
use crate::error::Result;
use crate::validate;

/// A fully assembled feedback request for one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRequest {
    /// The problem's marker path.
    pub path: MarkerPath,
    /// The student's code, as resolved from the submission.
    pub code: String,
    /// The complete prompt text.
    pub prompt: String,
}

/// Resolve a problem against a submission document and assemble its
/// prompt. Path validation runs first so an absent section fails loudly
/// instead of producing an empty prompt.
pub fn request_for_problem(
    document: &Document,
    problem: &ProblemStatement,
    config: &PromptConfig,
) -> Result<FeedbackRequest> {
    validate::validate_path_shape(&problem.path)?;
    validate::validate_path_exists(&problem.path, document)?;

    let code = document.at(&problem.path).contents();
    let dependency_code = document.extract_responses(&problem.dependencies);
    let prompt = build_prompt(problem, &code, config, &dependency_code);

    Ok(FeedbackRequest {
        path: problem.path.clone(),
        code,
        prompt,
    })
}
