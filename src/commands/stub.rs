//! The `stub` command: generate a starter file from assignment metadata.

use crate::assignment::AssignmentStatement;
use crate::cli::StubArgs;
use crate::error::{FeedbotError, Result};

pub fn cmd_stub(args: StubArgs) -> Result<()> {
    let assignment = AssignmentStatement::load(&args.assignment)?;
    let stub = assignment.render_stub();

    std::fs::write(&args.output, stub).map_err(|e| {
        FeedbotError::UserError(format!(
            "failed to write stub to '{}': {}",
            args.output.display(),
            e
        ))
    })?;

    println!(
        "wrote stub for '{}' to {}",
        assignment.title,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StubArgs;
    use crate::slice;
    use crate::test_support::{write_temp_file, SAMPLE_ASSIGNMENT};
    use tempfile::TempDir;

    #[test]
    fn written_stub_slices_cleanly() {
        let dir = TempDir::new().unwrap();
        let assignment = write_temp_file(&dir, "assignment.json", SAMPLE_ASSIGNMENT);
        let output = dir.path().join("stub.rkt");

        cmd_stub(StubArgs {
            assignment,
            output: output.clone(),
        })
        .unwrap();

        let submission = slice::slice_file(&output).unwrap();
        assert!(submission.has_all_problems(0..2));
    }

    #[test]
    fn unreadable_assignment_is_a_user_error() {
        let dir = TempDir::new().unwrap();
        let err = cmd_stub(StubArgs {
            assignment: dir.path().join("nope.json"),
            output: dir.path().join("stub.rkt"),
        })
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
