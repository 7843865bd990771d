//! Problem-boundary slicing for flat numbered submissions.
//!
//! A submission delimits each answer with explicit comment markers:
//!
//! ```text
//! ;;! Begin Problem 1: Add
//! (+ 1 2)
//! ;;! End Problem 1
//! ```
//!
//! The scanner partitions the raw file into [`ProblemSection`]s, rejecting
//! malformed nesting and numbering with line-accurate errors. Problem
//! numbers are 1-based in the markers and stored as 0-based indices so
//! they align with zero-indexed problem lists elsewhere.

mod scanner;
mod types;

#[cfg(test)]
mod tests;

pub use scanner::{SliceError, slice_file, slice_submission};
pub use types::{OUTSIDE_PROBLEM, ProblemSection, Submission};
