//! Marker paths: ordered marker names addressing a nested section.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of marker names.
///
/// Segment order matters: each segment narrows the previous document.
/// Paths deserialize transparently from JSON string arrays, which is the
/// form assignment metadata uses for both problem paths and dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerPath(Vec<String>);

impl MarkerPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for MarkerPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<S: Into<String>> FromIterator<S> for MarkerPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for MarkerPath {
    /// Segments joined with `", "`, the form used in prompt labels and
    /// path error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_segments() {
        let path = MarkerPath::from_iter(["Problem 2", "Part A"]);
        assert_eq!(path.to_string(), "Problem 2, Part A");
    }

    #[test]
    fn empty_path_displays_as_empty_string() {
        assert_eq!(MarkerPath::default().to_string(), "");
    }

    #[test]
    fn deserializes_from_string_array() {
        let path: MarkerPath = serde_json::from_str(r#"["Design", "helper"]"#).unwrap();
        assert_eq!(path.segments(), ["Design", "helper"]);
    }

    #[test]
    fn rejects_non_string_segments() {
        assert!(serde_json::from_str::<MarkerPath>("[1, 2]").is_err());
        assert!(serde_json::from_str::<MarkerPath>(r#""Design""#).is_err());
    }
}
