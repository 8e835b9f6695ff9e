use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use rand::SeedableRng;
use rand::rngs::{SmallRng, ThreadRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - New -> InProgress
/// - InProgress -> Defeat
/// - InProgress -> Victory
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No move made yet, traps not placed
    #[default]
    New,
    InProgress,
    /// A trap was revealed
    Defeat,
    /// Every safe cell was revealed
    Victory,
}

impl GameState {
    pub const fn is_new(self) -> bool {
        matches!(self, Self::New)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Defeat | Self::Victory)
    }
}

/// Change notification delivered to subscribers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GridChanged,
    StateChanged {
        previous: GameState,
        current: GameState,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    OutOfBounds,
    NoChange,
    Revealed,
    Defeat,
    Victory,
}

impl RevealOutcome {
    /// Whether this outcome came with a grid notification
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            OutOfBounds | NoChange => false,
            Revealed | Defeat | Victory => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    OutOfBounds,
    NotStarted,
    NoChange,
    Marked,
    Unmarked,
}

impl MarkOutcome {
    /// Whether the status of a cell changed
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Marked | Self::Unmarked)
    }
}

pub type Listener<S> = Box<dyn FnMut(&GameEvent, &Game<S>)>;

/// Represents a game from first move to finish.
///
/// Traps are laid on the first reveal and every other cell is generated the first time it is touched, so the grid
/// only becomes fully populated once the game ends.
pub struct Game<S = ThreadRng> {
    config: GameConfig,
    grid: Grid<Cell>,
    revealed_safe_count: usize,
    marked_count: usize,
    state: GameState,
    source: S,
    listeners: Vec<Listener<S>>,
}

impl Game<ThreadRng> {
    /// New game with traps drawn from the thread-local generator.
    pub fn new(rows: usize, columns: usize, total_traps: usize) -> Result<Self> {
        Self::with_source(GameConfig::new(rows, columns, total_traps)?, rand::rng())
    }
}

impl Game<SmallRng> {
    /// Reproducible game, the same seed always yields the same trap layout for the same first move.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, SmallRng::seed_from_u64(seed))
    }
}

impl<S> Game<S> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn columns(&self) -> usize {
        self.config.columns
    }

    pub fn total_traps(&self) -> usize {
        self.config.traps
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn revealed_safe_count(&self) -> usize {
        self.revealed_safe_count
    }

    /// Traps not accounted for by a mark, negative when more cells are marked than there are traps
    pub fn remaining_traps(&self) -> isize {
        self.config.traps as isize - self.marked_count as isize
    }

    /// Slot content, `None` when `point` is outside the grid.
    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        self.grid.get(point).ok().copied()
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Registers a listener, called synchronously for every event in registration order.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&GameEvent, &Game<S>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: GameEvent) {
        log::trace!("Emitting {event:?}");
        // listeners only get a shared view, so none can subscribe mid-dispatch
        let mut listeners = mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener(&event, self);
        }
        self.listeners = listeners;
    }

    fn all_safe_revealed(&self) -> bool {
        self.revealed_safe_count == self.config.safe_cells()
    }

    /// Turns an unpopulated slot into a hidden safe cell counting the traps around it.
    fn materialize_safe(&mut self, point: Point) -> u8 {
        let adjacent_traps = self
            .grid
            .neighbors(point)
            .filter(|&neighbor| self.grid[neighbor].is_trapped())
            .count()
            .try_into()
            .unwrap_or(u8::MAX);
        self.grid[point] = Cell::safe(adjacent_traps);
        adjacent_traps
    }

    /// Toggles Hidden and Marked, revealed cells are left alone.
    ///
    /// Emits a grid notification for every in-bounds mark on a started game, even when nothing changed.
    pub fn mark(&mut self, point: Point) -> MarkOutcome {
        if !self.grid.in_bounds(point) {
            return MarkOutcome::OutOfBounds;
        }
        if self.state.is_new() {
            return MarkOutcome::NotStarted;
        }

        if !self.grid[point].is_populated() {
            self.materialize_safe(point);
        }

        let cell = &mut self.grid[point];
        let outcome = match cell.status() {
            Some(CellStatus::Hidden) => {
                cell.set_status(CellStatus::Marked);
                self.marked_count += 1;
                MarkOutcome::Marked
            }
            Some(CellStatus::Marked) => {
                cell.set_status(CellStatus::Hidden);
                self.marked_count -= 1;
                MarkOutcome::Unmarked
            }
            Some(CellStatus::Revealed) | None => MarkOutcome::NoChange,
        };
        log::debug!("Mark at {point}: {outcome:?}");

        self.emit(GameEvent::GridChanged);
        outcome
    }

    /// Reveals every in-bounds cell, generating unpopulated slots as safe ones.
    fn reveal_all(&mut self) {
        for point in self.grid.points() {
            if !self.grid[point].is_populated() {
                self.materialize_safe(point);
            }
            self.grid[point].set_status(CellStatus::Revealed);
        }
        self.marked_count = 0;
    }

    fn transition(&mut self, target: GameState) {
        if self.state == target || self.state.is_finished() {
            return;
        }

        if target.is_finished() {
            self.reveal_all();
            self.emit(GameEvent::GridChanged);
        }

        let previous = mem::replace(&mut self.state, target);
        log::debug!("Game state {previous:?} -> {target:?}");
        self.emit(GameEvent::StateChanged {
            previous,
            current: target,
        });
    }

    /// Reveals `start` and floods through zero-count cells, without notifying.
    ///
    /// Neighbors are visited depth-first in enumeration order. Returns whether any cell changed.
    fn reveal_cascade(&mut self, start: Point) -> bool {
        let mut pending = vec![start];
        let mut changed = false;

        while let Some(point) = pending.pop() {
            if self.state.is_finished() {
                break;
            }

            let cell = self.grid[point];
            let adjacent_traps = match cell {
                Cell::Unpopulated => self.materialize_safe(point),
                Cell::Safe {
                    status: CellStatus::Hidden,
                    adjacent_traps,
                } => adjacent_traps,
                Cell::Trapped {
                    status: CellStatus::Hidden,
                } => {
                    log::debug!("Trap revealed at {point}");
                    self.grid[point].set_status(CellStatus::Revealed);
                    self.transition(GameState::Defeat);
                    changed = true;
                    continue;
                }
                Cell::Safe { .. } | Cell::Trapped { .. } => continue,
            };

            self.grid[point].set_status(CellStatus::Revealed);
            self.revealed_safe_count += 1;
            changed = true;

            if adjacent_traps == 0 {
                log::trace!("Cascading from {point}");
                let first = pending.len();
                pending.extend(self.grid.neighbors(point));
                // stack pops from the back, keep enumeration order
                pending[first..].reverse();
            }
        }

        changed
    }
}

impl<S: TrapSource> Game<S> {
    pub fn with_source(config: GameConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(config.rows, config.columns)?,
            revealed_safe_count: 0,
            marked_count: 0,
            state: GameState::New,
            source,
            listeners: Vec::new(),
        })
    }

    /// Reveals a cell, the first reveal of a game also lays the traps away from it.
    ///
    /// One grid notification is emitted per call however far the reveal cascades. Out-of-bounds points, finished
    /// games and cells already revealed or marked are left untouched without notification.
    pub fn reveal(&mut self, point: Point) -> RevealOutcome {
        if !self.grid.in_bounds(point) {
            return RevealOutcome::OutOfBounds;
        }

        if self.state.is_new() {
            crate::placement::place_traps(&mut self.grid, self.config.traps, point, &mut self.source);
            self.transition(GameState::InProgress);
        }
        if self.state != GameState::InProgress {
            return RevealOutcome::NoChange;
        }

        if !self.reveal_cascade(point) {
            return RevealOutcome::NoChange;
        }
        self.emit(GameEvent::GridChanged);

        if self.state == GameState::InProgress && self.all_safe_revealed() {
            self.transition(GameState::Victory);
        }

        match self.state {
            GameState::Defeat => RevealOutcome::Defeat,
            GameState::Victory => RevealOutcome::Victory,
            GameState::New | GameState::InProgress => RevealOutcome::Revealed,
        }
    }
}

impl<S> fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("revealed_safe_count", &self.revealed_safe_count)
            .field("marked_count", &self.marked_count)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
