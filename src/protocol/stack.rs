//! Stack definitions
//!
//! An ordered sequence of sections: one full request or response payload.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::{ArcherError, Result};
use super::codec::{decode_stack, encode_stack};
use super::Section;

/// A parsed protocol payload
///
/// Only built by parsing. [`Stack::reparse`] swaps the whole section list
/// and leaves the old one in place if the new text is malformed.
#[derive(Debug, Clone, Serialize)]
pub struct Stack {
    sections: Vec<Section>,
}

impl Stack {
    /// Parse raw response text
    pub fn parse(raw: &str) -> Result<Self> {
        let sections = decode_stack(raw)?;
        Ok(Self { sections })
    }

    /// Replace the contents with a fresh parse of `raw`
    pub fn reparse(&mut self, raw: &str) -> Result<()> {
        self.sections = decode_stack(raw)?;
        Ok(())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections that carry a row, skipping the `[error]0` sentinel
    pub fn rows(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_sentinel())
    }

    /// Find a section by its full identifier
    ///
    /// An empty stack yields `Ok(None)`; a populated stack without a match
    /// is an error.
    pub fn section(&self, identifier: &str) -> Result<Option<&Section>> {
        if self.sections.is_empty() {
            return Ok(None);
        }
        self.sections
            .iter()
            .find(|s| s.identifier() == identifier)
            .map(Some)
            .ok_or_else(|| ArcherError::SectionNotFound(identifier.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Serialize back to protocol text
    pub fn to_text(&self) -> String {
        encode_stack(&self.sections)
    }
}

/// Schema equality: same identifiers and same key sets, in order.
/// Values are deliberately not compared.
impl PartialEq for Stack {
    fn eq(&self, other: &Self) -> bool {
        if self.sections.len() != other.sections.len() {
            return false;
        }
        self.sections
            .iter()
            .zip(&other.sections)
            .all(|(a, b)| {
                a.identifier() == b.identifier()
                    && a.keys().collect::<BTreeSet<_>>() == b.keys().collect::<BTreeSet<_>>()
            })
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
