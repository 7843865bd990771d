//! Error types for the feedbot CLI.
//!
//! Uses thiserror for derive macros. The structural error kinds live next to
//! the modules that raise them (`slice::SliceError`, `validate::PathError`);
//! this module wraps them into a single top-level error that maps each
//! failure class to an exit code.

use crate::exit_codes;
use crate::slice::SliceError;
use crate::validate::PathError;
use thiserror::Error;

/// Main error type for feedbot operations.
#[derive(Error, Debug)]
pub enum FeedbotError {
    /// User provided invalid arguments or an input file could not be read.
    #[error("{0}")]
    UserError(String),

    /// Assignment metadata or prompt config is malformed.
    #[error("Invalid metadata: {0}")]
    Metadata(String),

    /// A submission violated the problem-boundary grammar.
    #[error(transparent)]
    Slice(#[from] SliceError),

    /// A declared marker path is missing or malformed.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl FeedbotError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FeedbotError::UserError(_) => exit_codes::USER_ERROR,
            FeedbotError::Metadata(_) => exit_codes::METADATA_FAILURE,
            FeedbotError::Slice(_) => exit_codes::SLICE_FAILURE,
            FeedbotError::Path(_) => exit_codes::PATH_FAILURE,
        }
    }
}

/// Result type alias for feedbot operations.
pub type Result<T> = std::result::Result<T, FeedbotError>;
