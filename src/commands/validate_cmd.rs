//! The `validate` command: fail fast before any prompts are built.

use crate::assignment::AssignmentStatement;
use crate::cli::ValidateArgs;
use crate::document::Document;
use crate::error::Result;
use crate::validate;

pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    // Loading already shape-checks every path and dependency.
    let assignment = AssignmentStatement::load(&args.assignment)?;
    let document = Document::load(&args.submission)?;

    for problem in &assignment.problems {
        validate::validate_path_exists(&problem.path, &document)?;
        for dependency in &problem.dependencies {
            validate::validate_path_exists(dependency, &document)?;
        }
    }

    println!(
        "{}: all {} problem paths resolve",
        args.submission.display(),
        assignment.problems.len()
    );
    Ok(())
}
