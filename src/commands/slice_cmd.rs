//! The `slice` command: print a submission's problem sections.

use crate::assignment::AssignmentStatement;
use crate::cli::SliceArgs;
use crate::error::{FeedbotError, Result};
use crate::slice::{self, OUTSIDE_PROBLEM};

pub fn cmd_slice(args: SliceArgs) -> Result<()> {
    let submission = slice::slice_file(&args.submission)?;

    if let Some(assignment_path) = &args.assignment {
        let assignment = AssignmentStatement::load(assignment_path)?;
        let missing: Vec<usize> = (0..assignment.problems.len())
            .filter(|&i| !submission.has_problem(i as i64))
            .map(|i| i + 1)
            .collect();
        if !missing.is_empty() {
            return Err(FeedbotError::UserError(format!(
                "{}: submission is missing problems {}",
                args.submission.display(),
                missing
                    .iter()
                    .map(usize::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
    }

    for section in &submission.sections {
        let label = if section.index == OUTSIDE_PROBLEM {
            "outside any problem".to_string()
        } else {
            format!("problem {}", section.index + 1)
        };
        println!("--- {} (line {}) ---", label, section.start_line);
        print!("{}", section.code);
    }
    Ok(())
}
