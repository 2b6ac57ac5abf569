//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name a contact is filed under.
///
/// Names are taken as given: no trimming, no case folding, no validation.
/// Two contacts are the same contact only when their names match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Wrap a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContactName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_stored_verbatim() {
        let name = ContactName::new("  Аліса ");
        assert_eq!(name.as_str(), "  Аліса ");
        assert_eq!(name.to_string(), "  Аліса ");
    }

    #[test]
    fn test_name_serializes_as_plain_string() {
        let name = ContactName::from("Bob");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Bob\"");
    }
}
