#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use placement::TrapSource;
pub use types::*;

mod cell;
mod engine;
mod error;
mod grid;
mod placement;
#[cfg(test)]
mod testing;
mod types;

/// Board dimensions and trap count of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub traps: usize,
}

impl GameConfig {
    pub fn new(rows: usize, columns: usize, traps: usize) -> Result<Self> {
        let config = Self {
            rows,
            columns,
            traps,
        };
        config.validate()?;
        Ok(config)
    }

    /// The first reveal is always safe, so at least one cell has to stay free of traps.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::EmptyGrid);
        }
        if Coord::try_from(self.rows).is_err() || Coord::try_from(self.columns).is_err() {
            return Err(GameError::TooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let Some(cells) = self.rows.checked_mul(self.columns) else {
            return Err(GameError::TooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        };
        if self.traps >= cells {
            return Err(GameError::TooManyTraps {
                traps: self.traps,
                cells,
            });
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> usize {
        self.rows * self.columns
    }

    pub const fn safe_cells(&self) -> usize {
        self.total_cells() - self.traps
    }
}
