//! Marker-addressable text documents.
//!
//! A [`Document`] is an immutable ordered sequence of lines. Structural
//! marker lines (lines starting with [`MARKER`]) divide it into named
//! sections, and every navigation operation returns a new `Document`
//! rather than mutating in place. Line order is the sole source of
//! positional meaning.

mod path;


pub use path::MarkerPath;

use crate::error::{FeedbotError, Result};
use std::path::Path;

/// Line prefix for all structural markers.
pub const MARKER: &str = ";;!";

/// Prefix of a begin-problem marker line. The problem number follows,
/// optionally with a colon and title: `;;! Begin Problem 3: Fold`.
pub const PROB_START: &str = ";;! Begin Problem ";

/// Prefix of an end-problem marker line: `;;! End Problem 3`.
pub const PROB_END: &str = ";;! End Problem ";

/// An immutable line-sequence wrapper supporting marker-relative slicing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create a document from owned lines (terminators already stripped).
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Create a document from anything that yields line strings.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(Into::into).collect())
    }

    /// Split raw text into lines, stripping each line's terminator.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Load a document from a file in a single blocking read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FeedbotError::UserError(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Ok(Self::from_text(&content))
    }

    /// The lines of this document, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines strictly before the first line starting with `marker`.
    ///
    /// When no line matches, the entire document is returned unchanged:
    /// a missing marker means "no truncation", not an error.
    pub fn before(&self, marker: &str) -> Document {
        match self.find(marker) {
            Some(i) => Document::new(self.lines[..i].to_vec()),
            None => self.clone(),
        }
    }

    /// The lines strictly after the first line starting with `marker`.
    ///
    /// When no line matches, an empty document is returned. This is
    /// deliberately asymmetric with [`Document::before`]: a missing marker
    /// on `after` signals "nothing remains".
    pub fn after(&self, marker: &str) -> Document {
        match self.find(marker) {
            Some(i) => Document::new(self.lines[i + 1..].to_vec()),
            None => Document::default(),
        }
    }

    /// All lines joined with a newline separator.
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    /// Resolve a marker path to the section it names.
    ///
    /// Each segment narrows the document to the lines after the first
    /// `;;! <segment>` marker line, strictly left to right; the final
    /// result is cut at the next marker line of any kind. An empty path
    /// yields the document content up to the first marker. A path that
    /// does not exist yields an empty document (via the `after` miss
    /// rule) rather than an error, so callers must check for emptiness.
    pub fn at(&self, path: &MarkerPath) -> Document {
        let mut doc = self.clone();
        for segment in path.segments() {
            doc = doc.after(&format!("{MARKER} {segment}"));
        }
        doc.before(MARKER)
    }

    /// Concatenate labeled "previous response" blocks for each path, in
    /// input order. A path that resolves to an empty document still
    /// contributes its labeled block with empty content.
    pub fn extract_responses(&self, paths: &[MarkerPath]) -> String {
        let mut out = String::new();
        for path in paths {
            out.push_str(&format!("Student response for {path}: "));
            out.push_str(&self.at(path).contents());
        }
        out
    }

    /// Index of the first line whose text starts with `marker`.
    /// Matching is a literal string-prefix test, never a regex.
    fn find(&self, marker: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.starts_with(marker))
    }
}
