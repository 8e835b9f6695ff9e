use crate::*;

/// Source of uniformly distributed slot indices used to lay traps.
pub trait TrapSource {
    /// Uniform value in `0..bound`, `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng> TrapSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Lays `traps` trapped cells by rejection sampling over the whole grid.
///
/// A draw is rejected when it lands on `exclude` or on a slot that is already populated, so every other slot is
/// equally likely. Callers must leave at least `traps` unpopulated slots besides `exclude`.
pub(crate) fn place_traps<S>(grid: &mut Grid<Cell>, traps: usize, exclude: Point, source: &mut S)
where
    S: TrapSource + ?Sized,
{
    let total = grid.len();
    let mut placed = 0;
    let mut rejected = 0usize;

    while placed < traps {
        let index = source.next_index(total);
        let Ok(point) = grid.point_of(index) else {
            log::warn!("Trap source returned index {index} outside of {total} slots");
            rejected += 1;
            continue;
        };

        if point == exclude || grid[point].is_populated() {
            log::trace!("Rejected trap draw at {point}");
            rejected += 1;
            continue;
        }

        grid[point] = Cell::trapped();
        placed += 1;
    }

    log::debug!("Placed {placed} traps avoiding {exclude}, {rejected} draws rejected");
}
