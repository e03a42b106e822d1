//! Section definitions
//!
//! One bracket-identified record of ordered key/value pairs.

use serde::Serialize;

use crate::error::{ArcherError, Result};

/// Opening character of every section identifier
pub const SECTION_OPEN: char = '[';

/// Closing character of the bracketed part of an identifier
pub const SECTION_CLOSE: char = ']';

/// Identifier the firmware uses for "no matching row"
pub const ERROR_SENTINEL: &str = "[error]0";

/// A single protocol section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Full first line, brackets included (e.g. `[1,0,0,0,0,0]0`)
    identifier: String,

    /// Key/value pairs in the order they were read or inserted
    values: Vec<(String, String)>,
}

impl Section {
    /// Create an empty section, validating the identifier
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        validate_identifier(&identifier)?;
        Ok(Self {
            identifier,
            values: Vec::new(),
        })
    }

    /// Create a section from an identifier and ordered pairs
    pub fn with_values<K, V>(
        identifier: impl Into<String>,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut section = Self::new(identifier)?;
        for (key, value) in values {
            section.insert(key, value);
        }
        Ok(section)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Text between the first `[` and the first `]` of the identifier
    ///
    /// This is the row address the firmware expects in mutation commands.
    pub fn raw_identifier(&self) -> &str {
        raw_identifier(&self.identifier)
    }

    /// True for the `[error]0` "no row" marker
    pub fn is_sentinel(&self) -> bool {
        self.identifier == ERROR_SENTINEL
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a value, comparing keys without regard to ASCII case
    pub fn get_ignore_ascii_case(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Set a value, keeping the original position if the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.values.push((key, value)),
        }
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }

    /// Key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize as identifier line followed by `key=value` lines
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        self.write_text(&mut text);
        text
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        out.push_str(&self.identifier);
        out.push('\n');
        for (key, value) in &self.values {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
    }

    /// Built by the codec once the identifier has been validated
    pub(crate) fn from_parts(identifier: String, values: Vec<(String, String)>) -> Self {
        Self { identifier, values }
    }
}

/// An identifier must open with `[` and close its bracket on the same line
pub(crate) fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(ArcherError::Parse("empty section identifier".to_string()));
    }
    if !identifier.starts_with(SECTION_OPEN) || !identifier.contains(SECTION_CLOSE) {
        return Err(ArcherError::Parse(format!(
            "unterminated section identifier: {:?}",
            identifier
        )));
    }
    Ok(())
}

/// Substring between the first `[` and the first `]` that follows it
pub fn raw_identifier(identifier: &str) -> &str {
    let start = match identifier.find(SECTION_OPEN) {
        Some(i) => i + SECTION_OPEN.len_utf8(),
        None => return identifier,
    };
    let rest = &identifier[start..];
    match rest.find(SECTION_CLOSE) {
        Some(end) => &rest[..end],
        None => rest,
    }
}
