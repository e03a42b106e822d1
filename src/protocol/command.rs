//! Command definitions
//!
//! Outgoing queries and mutations, before encoding.

/// Stack path of the root object (`0,0,0,0,0,0`)
pub const ROOT_PATH: &str = "0,0,0,0,0,0";

/// What an entry asks the router to do with its table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    /// Read the named columns
    Fields(Vec<String>),

    /// Write the given values (an empty list is a bare row operation, e.g. delete)
    Assign(Vec<(String, String)>),
}

/// One bracketed entry: `[TABLE#path#parent]index,count`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Protocol table name, e.g. `LAN_DHCP_STATIC_ADDR`
    pub table: String,

    /// Stack path of the addressed row
    pub path: String,

    /// Stack path of the parent object
    pub parent: String,

    pub body: EntryBody,
}

impl CommandEntry {
    /// Number of lines that follow the header
    pub fn count(&self) -> usize {
        match &self.body {
            EntryBody::Fields(fields) => fields.len(),
            EntryBody::Assign(values) => values.len(),
        }
    }
}

/// A full request body made of indexed entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    entries: Vec<CommandEntry>,
}

impl Command {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a read of `fields` from `table` at the root path
    pub fn read(self, table: &str, fields: &[&str]) -> Self {
        self.read_at(table, ROOT_PATH, ROOT_PATH, fields)
    }

    /// Append a read of `fields` from `table` at an explicit path
    pub fn read_at(mut self, table: &str, path: &str, parent: &str, fields: &[&str]) -> Self {
        self.entries.push(CommandEntry {
            table: table.to_string(),
            path: path.to_string(),
            parent: parent.to_string(),
            body: EntryBody::Fields(fields.iter().map(|f| f.to_string()).collect()),
        });
        self
    }

    /// Append a write of `values` to the row at `path`
    pub fn write_at(mut self, table: &str, path: &str, parent: &str, values: &[(&str, &str)]) -> Self {
        self.entries.push(CommandEntry {
            table: table.to_string(),
            path: path.to_string(),
            parent: parent.to_string(),
            body: EntryBody::Assign(
                values
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        });
        self
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }
}
