use crate::error::{PollError, Result};
use crate::interfaces::command::Command;
use std::io::Read;

/// Reads poll commands from a CSV source.
///
/// The header names the columns (`action, member, candidate, name, age, region,
/// scientific_name, description`). Whitespace is trimmed and short rows are
/// accepted, with missing columns read as empty.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes commands.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PollError::from))
    }
}
