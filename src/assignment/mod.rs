//! Assignment metadata loading.
//!
//! An assignment is stored as JSON whose top level is
//! `{ "assignment": { ... } }`. Unknown fields are ignored for forward
//! compatibility; a missing `assignment` key defaults to an empty
//! assignment, which then fails validation loudly rather than producing
//! empty prompts downstream.


use crate::document::{MarkerPath, PROB_END, PROB_START};
use crate::error::{FeedbotError, Result};
use crate::validate;
use serde::Deserialize;
use std::path::Path;

fn default_lang() -> String {
    "#lang htdp/bsl".to_string()
}

/// One problem of an assignment: where the answer lives and what to ask
/// the model about it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProblemStatement {
    /// Marker path addressing the student's answer in the submission.
    pub path: MarkerPath,
    /// The problem statement given to the student.
    pub statement: String,
    #[serde(default)]
    pub title: String,
    /// Starter code emitted into generated stub files.
    #[serde(default)]
    pub stub: String,
    /// Instructor-provided context (extra instructions, data definitions).
    #[serde(default)]
    pub context: String,
    /// Additional grading guidance passed to the model, never the student.
    #[serde(default)]
    pub grading_note: String,
    /// Tags selecting tag-suffixed prompt fragments.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Paths of earlier answers this problem builds on. Each dependency
    /// is a full marker path, never a bare string or integer.
    #[serde(default)]
    pub dependencies: Vec<MarkerPath>,
}

/// A whole assignment: title, language line, and ordered problems.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AssignmentStatement {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub title: String,
    /// Assignment-wide context shown ahead of every problem statement.
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub problems: Vec<ProblemStatement>,
}

impl Default for AssignmentStatement {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            title: String::new(),
            context: String::new(),
            problems: Vec::new(),
        }
    }
}

#[derive(Deserialize, Default)]
struct MetadataFile {
    #[serde(default)]
    assignment: AssignmentStatement,
}

impl AssignmentStatement {
    /// Load and validate assignment metadata from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FeedbotError::UserError(format!(
                "failed to read assignment file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate assignment metadata from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: MetadataFile = serde_json::from_str(json)
            .map_err(|e| FeedbotError::Metadata(format!("failed to parse assignment JSON: {e}")))?;
        let assignment = file.assignment;
        assignment.validate()?;
        Ok(assignment)
    }

    /// Shape-check the metadata: a title must be present, and every
    /// problem path and dependency must be a well-formed marker path.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(FeedbotError::Metadata(
                "assignment must have a title".to_string(),
            ));
        }
        for problem in &self.problems {
            validate::validate_problem(problem)?;
        }
        Ok(())
    }

    /// Render a starter stub file: the language line, then each problem's
    /// starter code wrapped in 1-based begin/end markers.
    pub fn render_stub(&self) -> String {
        let mut out = format!("{}\n\n", self.lang);
        for (i, problem) in self.problems.iter().enumerate() {
            let number = i + 1;
            out.push_str(&format!("{}{}: {}", PROB_START, number, problem.title));
            out.push_str(&format!("\n\n{}\n\n", problem.stub));
            out.push_str(&format!("{}{}\n\n", PROB_END, number));
        }
        out
    }
}
