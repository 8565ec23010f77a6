//! Whole-name filter for directory-mode planning.

use regex::Regex;

use crate::errors::MoveError;

/// Compiled name filter with anchored, whole-string semantics: `.*\.txt`
/// matches `report.txt`, while `report` does not.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: String,
    regex: Regex,
}

impl NameFilter {
    /// Compile `pattern`. A malformed pattern fails here, at plan time,
    /// before any move is attempted.
    pub fn new(pattern: &str) -> Result<Self, MoveError> {
        // Wrap in a non-capturing group so alternations stay anchored.
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|source| MoveError::InvalidFilter {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whole-string match against one entry name.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}
