//! The `prompt` command: assemble and print feedback prompts (dry run).

use crate::assignment::{AssignmentStatement, ProblemStatement};
use crate::cli::PromptArgs;
use crate::document::Document;
use crate::error::{FeedbotError, Result};
use crate::prompt::{self, PromptConfig};

pub fn cmd_prompt(args: PromptArgs) -> Result<()> {
    let assignment = AssignmentStatement::load(&args.assignment)?;
    let config = PromptConfig::load(&args.config)?;
    let document = Document::load(&args.submission)?;

    let problems: Vec<&ProblemStatement> = match args.problem {
        Some(index) => {
            let problem = assignment.problems.get(index).ok_or_else(|| {
                FeedbotError::UserError(format!(
                    "no problem at index {} (assignment has {})",
                    index,
                    assignment.problems.len()
                ))
            })?;
            vec![problem]
        }
        None => assignment.problems.iter().collect(),
    };

    for problem in problems {
        let request = prompt::request_for_problem(&document, problem, &config)?;
        println!("=============================");
        println!("{}: {}", args.submission.display(), request.path);
        println!();
        println!("{}", request.prompt);
        println!();
    }
    Ok(())
}
