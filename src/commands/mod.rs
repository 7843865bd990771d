//! Command implementations for feedbot.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod prompt;
mod redact;
mod slice_cmd;
mod stub;
mod validate_cmd;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Validate(args) => validate_cmd::cmd_validate(args),
        Command::Slice(args) => slice_cmd::cmd_slice(args),
        Command::Prompt(args) => prompt::cmd_prompt(args),
        Command::Stub(args) => stub::cmd_stub(args),
        Command::Redact(args) => redact::cmd_redact(args),
    }
}
