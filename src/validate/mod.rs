//! Cross-document validation of declared marker paths.
//!
//! An assignment declares, for each problem, the marker path where the
//! student's answer lives and the paths of any earlier answers it builds
//! on. These checks run before any prompt text is assembled: an empty
//! resolution used directly would silently produce an empty prompt, so
//! the validator turns it into a loud failure instead. Validation fails
//! fast at the first violation.


use crate::assignment::ProblemStatement;
use crate::document::{Document, MarkerPath};
use thiserror::Error;

/// A structural path violation, tagged with the offending path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path does not resolve to any section of the document.
    #[error("no section found at path [{path}]")]
    MissingPath { path: MarkerPath },

    /// The path is not an ordered sequence of non-empty segments.
    #[error("invalid path [{path}]: {reason}")]
    InvalidPathShape { path: MarkerPath, reason: String },
}

/// Check that every segment of `path` is a non-empty string.
pub fn validate_path_shape(path: &MarkerPath) -> Result<(), PathError> {
    if path.segments().iter().any(|segment| segment.is_empty()) {
        return Err(PathError::InvalidPathShape {
            path: path.clone(),
            reason: "path segments must be non-empty strings".to_string(),
        });
    }
    Ok(())
}

/// Check that `path` resolves to a non-empty section of `document`.
///
/// This is the single authoritative check that a declared problem path
/// is actually present in a template or submission.
pub fn validate_path_exists(path: &MarkerPath, document: &Document) -> Result<(), PathError> {
    if document.at(path).is_empty() {
        return Err(PathError::MissingPath { path: path.clone() });
    }
    Ok(())
}

/// Shape-check a problem's own path and every dependency path.
pub fn validate_problem(problem: &ProblemStatement) -> Result<(), PathError> {
    validate_path_shape(&problem.path)?;
    for dependency in &problem.dependencies {
        validate_path_shape(dependency)?;
    }
    Ok(())
}
