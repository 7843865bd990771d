//! Line-scanning state machine behind [`slice_submission`].

use super::types::{OUTSIDE_PROBLEM, ProblemSection, Submission};
use crate::document::{PROB_END, PROB_START};
use crate::error::{FeedbotError, Result};
use std::path::Path;
use thiserror::Error;

/// A structural violation of the problem-boundary grammar.
///
/// Every variant carries the 1-based line number where scanning stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// A begin marker appeared while another problem was still open.
    #[error("line {line}: can't begin a new problem inside problem {open}")]
    MalformedNesting { open: u32, line: usize },

    /// The token after a begin/end marker is not a positive integer.
    #[error("line {line}: invalid problem number '{token}'")]
    InvalidProblemNumber { token: String, line: usize },

    /// An end marker appeared with no problem open.
    #[error("line {line}: can't end a problem when none has begun")]
    UnmatchedEnd { line: usize },

    /// An end marker's number does not match the open problem.
    #[error("line {line}: end marker closes problem {found}, but problem {open} is open")]
    MismatchedEnd { open: u32, found: u32, line: usize },

    /// The file ended while a problem was still open.
    #[error("line {line}: problem {open} is never ended")]
    UnterminatedProblem { open: u32, line: usize },
}

impl SliceError {
    /// The 1-based line number where the violation was detected.
    pub fn line(&self) -> usize {
        match self {
            SliceError::MalformedNesting { line, .. }
            | SliceError::InvalidProblemNumber { line, .. }
            | SliceError::UnmatchedEnd { line }
            | SliceError::MismatchedEnd { line, .. }
            | SliceError::UnterminatedProblem { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Inside(u32),
}

/// The scanner's full state, threaded explicitly through each step.
#[derive(Debug)]
struct Scanner {
    state: State,
    content: String,
    section_start: usize,
    sections: Vec<ProblemSection>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::Outside,
            content: String::new(),
            section_start: 1,
            sections: Vec::new(),
        }
    }

    fn step(&mut self, line: &str, line_no: usize) -> std::result::Result<(), SliceError> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(PROB_START) {
            self.flush(line_no);
            if let State::Inside(open) = self.state {
                return Err(SliceError::MalformedNesting { open, line: line_no });
            }
            let number = parse_problem_number(rest)
                .map_err(|token| SliceError::InvalidProblemNumber { token, line: line_no })?;
            self.state = State::Inside(number);
        } else if let Some(rest) = trimmed.strip_prefix(PROB_END) {
            // The end-marker line itself belongs to no section.
            self.flush(line_no + 1);
            let State::Inside(open) = self.state else {
                return Err(SliceError::UnmatchedEnd { line: line_no });
            };
            let number = parse_problem_number(rest)
                .map_err(|token| SliceError::InvalidProblemNumber { token, line: line_no })?;
            if number != open {
                return Err(SliceError::MismatchedEnd {
                    open,
                    found: number,
                    line: line_no,
                });
            }
            self.state = State::Outside;
        } else {
            self.content.push_str(line);
        }

        Ok(())
    }

    /// Materialize the accumulated section and start a new one at
    /// `next_start`. Sections outside any problem are dropped when their
    /// text is entirely whitespace, so cosmetic blank gaps between
    /// problems don't pollute the output.
    fn flush(&mut self, next_start: usize) {
        let code = std::mem::take(&mut self.content);
        match self.state {
            State::Outside => {
                if !code.trim().is_empty() {
                    self.sections.push(ProblemSection {
                        index: OUTSIDE_PROBLEM,
                        code,
                        start_line: self.section_start,
                    });
                }
            }
            State::Inside(number) => {
                self.sections.push(ProblemSection {
                    // 1-based on the wire, 0-based internally.
                    index: i64::from(number) - 1,
                    code,
                    start_line: self.section_start,
                });
            }
        }
        self.section_start = next_start;
    }

    fn finish(mut self, raw: &str, last_line: usize) -> std::result::Result<Submission, SliceError> {
        if let State::Inside(open) = self.state {
            return Err(SliceError::UnterminatedProblem {
                open,
                line: last_line,
            });
        }
        self.flush(last_line + 1);
        Ok(Submission {
            full_code: raw.to_string(),
            sections: self.sections,
        })
    }
}

/// Partition raw submission text into problem sections.
///
/// Fails fast at the first structural violation; there is no
/// partial-result-plus-warnings mode.
pub fn slice_submission(raw: &str) -> std::result::Result<Submission, SliceError> {
    let mut scanner = Scanner::new();
    let mut last_line = 0;
    for (i, line) in raw.split_inclusive('\n').enumerate() {
        last_line = i + 1;
        scanner.step(line, last_line)?;
    }
    scanner.finish(raw, last_line)
}

/// Read a submission file and slice it.
pub fn slice_file<P: AsRef<Path>>(path: P) -> Result<Submission> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        FeedbotError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    Ok(slice_submission(&raw)?)
}

/// Parse a problem number from the text following a begin/end marker:
/// the first whitespace-delimited token before any colon. Returns the
/// offending token on failure.
fn parse_problem_number(rest: &str) -> std::result::Result<u32, String> {
    let token = rest
        .split(':')
        .next()
        .unwrap_or("")
        .split_whitespace()
        .next()
        .unwrap_or("");

    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(token.to_string());
    }
    match token.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(token.to_string()),
    }
}
