//! Prompt configuration loaded from `config.json`.

use crate::assignment::ProblemStatement;
use crate::error::{FeedbotError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

fn default_model() -> String {
    "gpt-4".to_string()
}

/// Prompt configuration: the system message, model name, optional output
/// delimiter, and the named prompt fragments assembled around each
/// problem. Fragment keys may carry tag-suffixed variants
/// (`pre_code#recursion`) that apply only to problems with that tag.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PromptConfig {
    /// System message sent ahead of every prompt.
    #[serde(default)]
    pub system: String,

    /// Model the surrounding query layer would call.
    #[serde(default = "default_model")]
    pub model: String,

    /// Delimiter separating the model's reasoning from the publishable
    /// part of its feedback, if the prompts ask for one.
    #[serde(default)]
    pub delimiter: Option<String>,

    /// Prompt fragments by name (`general`, `pre_statement`, `post_code`,
    /// tag variants, ...). All remaining string keys land here.
    #[serde(flatten)]
    pub sections: BTreeMap<String, String>,
}

impl PromptConfig {
    /// Load prompt configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FeedbotError::UserError(format!(
                "failed to read prompt config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Parse prompt configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| FeedbotError::Metadata(format!("failed to parse prompt config: {e}")))
    }

    /// The fragment for `name`, followed by every `name#tag` variant the
    /// problem's tags select, in tag order. Missing fragments contribute
    /// nothing.
    pub fn section_for(&self, name: &str, problem: &ProblemStatement) -> String {
        let mut text = self.sections.get(name).cloned().unwrap_or_default();
        for tag in &problem.tags {
            if let Some(extra) = self.sections.get(&format!("{name}#{tag}")) {
                text.push_str(extra);
            }
        }
        text
    }
}
