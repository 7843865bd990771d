//! Sliced-submission types and lookups.

/// Section index for content that falls outside any problem.
pub const OUTSIDE_PROBLEM: i64 = -1;

/// A contiguous run of lines associated with one problem index, or with
/// [`OUTSIDE_PROBLEM`] for stray content between problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSection {
    /// 0-based problem index, or [`OUTSIDE_PROBLEM`]. Indices other than
    /// the sentinel come from a strictly positive marker number minus one.
    pub index: i64,
    /// The section's text, line terminators preserved verbatim.
    pub code: String,
    /// 1-based line where the section began (the begin-marker line for
    /// numbered sections).
    pub start_line: usize,
}

/// The sliced result of a raw submission file. Built once per slicing
/// pass and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The entire raw file, untouched.
    pub full_code: String,
    /// The file partitioned into sections, in input order.
    pub sections: Vec<ProblemSection>,
}

impl Submission {
    /// Whether any section carries the given 0-based problem index.
    pub fn has_problem(&self, index: i64) -> bool {
        self.sections.iter().any(|sec| sec.index == index)
    }

    /// Whether every given 0-based problem index is present.
    pub fn has_all_problems<I>(&self, indices: I) -> bool
    where
        I: IntoIterator<Item = i64>,
    {
        indices.into_iter().all(|index| self.has_problem(index))
    }

    /// The first section carrying the given 0-based problem index.
    pub fn get_problem(&self, index: i64) -> Option<&ProblemSection> {
        self.sections.iter().find(|sec| sec.index == index)
    }
}
