//! Protocol codec
//!
//! Encoding and decoding functions for the stack text format.
//!
//! ## Response Format
//! ```text
//! [1,0,0,0,0,0]0          <- identifier line
//! yiaddr=192.168.0.10     <- key=value, split at the first '='
//! chaddr=AA:BB:CC:DD:EE:FF
//! [error]0                <- "no more rows" sentinel
//! ```
//!
//! ## Command Format
//! ```text
//! [TABLE#path#parent]index,count\r\n
//! column\r\n              <- read entries name columns
//! key=value\r\n           <- write entries assign values
//! ```
//!
//! Lines end at `\n`; any run of `\r` before it belongs to the terminator,
//! so decoded values never end in `\r` and re-encoding with `\n` alone
//! decodes to the same values.
//!
//! Section boundaries are found by scanning for `[`. The firmware never puts
//! `[` inside a value; text that does will split in the wrong place.

use crate::error::{ArcherError, Result};
use super::section::{validate_identifier, SECTION_OPEN};
use super::{Command, EntryBody, Section};

/// Line separator the firmware expects in request bodies
pub const LINE_SEPARATOR: &str = "\r\n";

// =============================================================================
// Stack Decoding/Encoding
// =============================================================================

/// Decode raw response text into sections
pub fn decode_stack(raw: &str) -> Result<Vec<Section>> {
    let raw = raw.trim_start();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    split_sections(raw)
        .into_iter()
        .map(decode_section)
        .collect()
}

/// Encode sections as `\n` separated text
pub fn encode_stack(sections: &[Section]) -> String {
    let mut text = String::new();
    for section in sections {
        section.write_text(&mut text);
    }
    text
}

/// Split text into per-section chunks
///
/// The first character always belongs to the current chunk; the next `[`
/// after it starts a new one.
fn split_sections(raw: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = raw;

    loop {
        let skip = rest.chars().next().map(char::len_utf8).unwrap_or(0);
        match rest[skip..].find(SECTION_OPEN) {
            Some(offset) => {
                let boundary = skip + offset;
                chunks.push(&rest[..boundary]);
                rest = &rest[boundary..];
            }
            None => {
                chunks.push(rest);
                break;
            }
        }
    }

    chunks
}

/// Decode one chunk: identifier line, then `key=value` lines
fn decode_section(chunk: &str) -> Result<Section> {
    let mut lines = chunk.split('\n').map(|l| l.trim_end_matches('\r'));

    let identifier = lines.next().unwrap_or_default();
    validate_identifier(identifier)?;

    let mut values: Vec<(String, String)> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| {
            ArcherError::Parse(format!(
                "line without '=' in section {}: {:?}",
                identifier, line
            ))
        })?;

        match values.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => values.push((key.to_string(), value.to_string())),
        }
    }

    Ok(Section::from_parts(identifier.to_string(), values))
}

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command as a request body
///
/// Entries are numbered in order; the count is the number of lines that
/// follow each header.
pub fn encode_command(command: &Command) -> String {
    let mut body = String::new();

    for (index, entry) in command.entries().iter().enumerate() {
        body.push_str(&format!(
            "[{}#{}#{}]{},{}{}",
            entry.table,
            entry.path,
            entry.parent,
            index,
            entry.count(),
            LINE_SEPARATOR
        ));

        match &entry.body {
            EntryBody::Fields(fields) => {
                for field in fields {
                    body.push_str(field);
                    body.push_str(LINE_SEPARATOR);
                }
            }
            EntryBody::Assign(values) => {
                for (key, value) in values {
                    body.push_str(key);
                    body.push('=');
                    body.push_str(value);
                    body.push_str(LINE_SEPARATOR);
                }
            }
        }
    }

    body
}
