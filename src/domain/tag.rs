//! Free-form, case-sensitive tag attached to notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A free-form label for filtering notes.
///
/// Tags keep their case: `Urgent` and `urgent` are different tags.
/// Tags typed by the user are trimmed and must be non-empty. Tags read
/// back from stored records keep their exact text.
///
/// # Examples
///
/// ```
/// use jotter::domain::Tag;
///
/// let tag = Tag::new("  Home Office ").unwrap();
/// assert_eq!(tag.as_str(), "Home Office");
/// assert_ne!(Tag::new("urgent").unwrap(), Tag::new("Urgent").unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError;

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tag cannot be empty")
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a tag from user input.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the input is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTagError);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Accepts stored tag text as-is, rejecting only blank text.
    pub(crate) fn verbatim(s: String) -> Result<Self, ParseTagError> {
        if s.trim().is_empty() {
            return Err(ParseTagError);
        }
        Ok(Self(s))
    }

    /// Returns the tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::verbatim(s).map_err(serde::de::Error::custom)
    }
}
