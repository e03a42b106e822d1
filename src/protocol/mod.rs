//! Protocol Module
//!
//! The bracketed "stack" text format spoken by the router's `cgi` endpoint.
//!
//! ## Sections
//! ```text
//! ┌───────────────────────────────┐
//! │ [identifier]index             │  first line
//! │ key=value                     │  zero or more pairs
//! │ key=value                     │
//! └───────────────────────────────┘
//! ```
//!
//! A [`Stack`] is the ordered list of sections in one payload. Responses are
//! parsed into a stack; requests are built as a [`Command`] and encoded.
//!
//! ### Sentinel
//! - `[error]0`: no (more) matching rows

mod section;
mod stack;
mod command;
mod codec;

pub use section::{raw_identifier, Section, ERROR_SENTINEL, SECTION_CLOSE, SECTION_OPEN};
pub use stack::Stack;
pub use command::{Command, CommandEntry, EntryBody, ROOT_PATH};
pub use codec::{decode_stack, encode_command, encode_stack, LINE_SEPARATOR};
