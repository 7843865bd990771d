use std::path::PathBuf;
use tempfile::TempDir;

/// Write a file into a temp directory and return its path.
pub(crate) fn write_temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Two-problem assignment used across command tests. Problem 2 depends
/// on Problem 1's answer.
pub(crate) const SAMPLE_ASSIGNMENT: &str = r#"{
    "assignment": {
        "title": "Lists",
        "problems": [
            {
                "path": ["Problem 1"],
                "title": "Sum",
                "statement": "Sum a list of numbers.",
                "stub": "(define (sum lon) ...)"
            },
            {
                "path": ["Problem 2"],
                "title": "Average",
                "statement": "Average a list of numbers.",
                "stub": "(define (avg lon) ...)",
                "dependencies": [["Problem 1"]]
            }
        ]
    }
}"#;

/// Minimal prompt config exercising the fragment layout.
pub(crate) const SAMPLE_PROMPT_CONFIG: &str = r#"{
    "system": "You are a patient TA.",
    "model": "gpt-4",
    "general": "Review this solution.\n",
    "pre_statement": "The problem statement was:\n",
    "post_statement": "\n",
    "pre_dependencies": "Earlier answers:\n",
    "post_dependencies": "\n",
    "pre_code": "The student's code was:\n",
    "post_code": "\n"
}"#;
