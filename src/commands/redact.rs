//! The `redact` command: clean a feedback transcript for publication.

use crate::cli::RedactArgs;
use crate::error::{FeedbotError, Result};
use crate::prompt;

pub fn cmd_redact(args: RedactArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.input).map_err(|e| {
        FeedbotError::UserError(format!("failed to read '{}': {}", args.input.display(), e))
    })?;

    let cleaned = prompt::clean_feedback(&text, args.delimiter.as_deref());
    println!("{cleaned}");
    Ok(())
}
