use thiserror::Error;

use crate::Point;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Point {0} is out of bounds")]
    OutOfBounds(Point),
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,
    #[error("Grid of {rows}x{columns} cannot be addressed")]
    TooLarge { rows: usize, columns: usize },
    #[error("Too many traps, {traps} requested but at most {} fit beside the first move", .cells - 1)]
    TooManyTraps { traps: usize, cells: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
