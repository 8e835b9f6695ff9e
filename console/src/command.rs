use std::num::ParseIntError;
use thiserror::Error;

use sweeper_core::Point;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Point),
    Mark(Point),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Expected `<command>,<row>,<column>`, got {0} fields")]
    FieldCount(usize),
    #[error("Unknown command `{0}`, use `r` to reveal or `m` to mark")]
    Unknown(String),
    #[error("Invalid coordinate: {0}")]
    Coordinate(#[from] ParseIntError),
}

impl CommandError {
    /// Malformed lines end the session, the rest only skip the line.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::FieldCount(_))
    }
}

/// Parses `<command>,<row>,<column>` where the command is `r` or `m`.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let fields: Vec<_> = line.trim().split(',').map(str::trim).collect();
    let [command, row, column] = fields.as_slice() else {
        return Err(CommandError::FieldCount(fields.len()));
    };

    let point = Point::new(row.parse()?, column.parse()?);
    match *command {
        "r" => Ok(Command::Reveal(point)),
        "m" => Ok(Command::Mark(point)),
        other => Err(CommandError::Unknown(other.to_owned())),
    }
}
