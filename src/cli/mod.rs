//! CLI argument parsing for feedbot.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Feedbot: marker-driven automated feedback for problem-set submissions.
///
/// Submissions delimit answers with comment markers (`;;! Begin Problem 1`
/// / `;;! End Problem 1`) or nested named markers (`;;! Problem 2`).
/// Feedbot validates assignment metadata against those markers, slices
/// submissions into problem sections, and assembles feedback prompts.
#[derive(Parser, Debug)]
#[command(name = "feedbot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for feedbot.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate assignment metadata against a submission.
    ///
    /// Checks that every declared problem path and dependency path
    /// resolves to a non-empty section of the submission.
    Validate(ValidateArgs),

    /// Slice a numbered submission into problem sections.
    ///
    /// Prints each section with its index and start line; fails with a
    /// line-accurate error on malformed nesting or numbering.
    Slice(SliceArgs),

    /// Assemble feedback prompts without contacting a model.
    ///
    /// Resolves each problem's code and dependencies and prints the
    /// prompt text the query layer would send.
    Prompt(PromptArgs),

    /// Generate a starter stub file from assignment metadata.
    Stub(StubArgs),

    /// Clean a model feedback transcript for publication.
    ///
    /// Cuts everything before the configured delimiter and redacts
    /// markdown code blocks.
    Redact(RedactArgs),
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the assignment metadata JSON.
    #[arg(short, long)]
    pub assignment: PathBuf,

    /// Path to the student's submitted file.
    #[arg(short, long)]
    pub submission: PathBuf,
}

/// Arguments for the `slice` command.
#[derive(Parser, Debug)]
pub struct SliceArgs {
    /// Path to the student's submitted file.
    #[arg(short, long)]
    pub submission: PathBuf,

    /// Optional assignment metadata; when given, the submission must
    /// contain a section for every declared problem.
    #[arg(short, long)]
    pub assignment: Option<PathBuf>,
}

/// Arguments for the `prompt` command.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Path to the assignment metadata JSON.
    #[arg(short, long)]
    pub assignment: PathBuf,

    /// Path to the student's submitted file.
    #[arg(short, long)]
    pub submission: PathBuf,

    /// Path to the prompt configuration JSON.
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Zero-based index of a single problem to prompt for.
    /// When omitted, prompts are assembled for every problem.
    #[arg(short, long)]
    pub problem: Option<usize>,
}

/// Arguments for the `stub` command.
#[derive(Parser, Debug)]
pub struct StubArgs {
    /// Path to the assignment metadata JSON.
    #[arg(short, long)]
    pub assignment: PathBuf,

    /// Output path for the generated stub file.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactArgs {
    /// Path to the feedback transcript to clean.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Delimiter marking the start of the publishable feedback.
    #[arg(short, long)]
    pub delimiter: Option<String>,
}
