use std::io::{self, Write};

use sweeper_core::{Cell, CellStatus, Game, Point};

/// Three-character symbol for a slot. Unpopulated and hidden look the same so the board leaks nothing.
pub fn symbol(cell: Cell) -> String {
    match cell {
        Cell::Unpopulated
        | Cell::Trapped {
            status: CellStatus::Hidden,
        }
        | Cell::Safe {
            status: CellStatus::Hidden,
            ..
        } => "[-]".to_owned(),
        Cell::Trapped {
            status: CellStatus::Marked,
        }
        | Cell::Safe {
            status: CellStatus::Marked,
            ..
        } => "[!]".to_owned(),
        Cell::Trapped {
            status: CellStatus::Revealed,
        } => "[*]".to_owned(),
        Cell::Safe {
            status: CellStatus::Revealed,
            adjacent_traps,
        } => format!("[{adjacent_traps}]"),
    }
}

/// Writes the board with row and column indices.
pub fn draw<S>(game: &Game<S>, out: &mut impl Write) -> io::Result<()> {
    write!(out, "   ")?;
    for column in 0..game.columns() {
        write!(out, "{:>3}", format!("{column} "))?;
    }
    writeln!(out)?;

    for (point, cell) in game.grid().iter() {
        if point.column == 0 {
            write!(out, "{:>3}", format!("{} ", point.row))?;
        }
        write!(out, "{}", symbol(*cell))?;
        if point.column as usize + 1 == game.columns() {
            writeln!(out)?;
        }
    }

    writeln!(
        out,
        "{:?}, {} traps left",
        game.state(),
        game.remaining_traps()
    )
}

/// Convenience for logging a single slot.
pub fn describe(point: Point, cell: Cell) -> String {
    format!("{point} {}", symbol(cell))
}
