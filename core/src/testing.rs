use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::*;

/// Replays a fixed list of indices, panics once it runs dry.
#[derive(Debug)]
pub(crate) struct ScriptedSource {
    indices: VecDeque<usize>,
}

impl ScriptedSource {
    pub(crate) fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.indices.is_empty()
    }
}

impl TrapSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let index = self.indices.pop_front().expect("scripted source ran out of indices");
        assert!(index < bound, "scripted index {index} not below {bound}");
        index
    }
}

/// Game whose traps land exactly on `traps`, in order.
pub(crate) fn game_with_traps(rows: usize, columns: usize, traps: &[Point]) -> Game<ScriptedSource> {
    let config = GameConfig::new(rows, columns, traps.len()).unwrap();
    let indices = traps.iter().map(|point| {
        let row = usize::try_from(point.row).unwrap();
        let column = usize::try_from(point.column).unwrap();
        row * columns + column
    });
    Game::with_source(config, ScriptedSource::new(indices)).unwrap()
}

/// Records every event the game emits.
pub(crate) fn record_events<S: 'static>(game: &mut Game<S>) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.subscribe(move |event, _| sink.borrow_mut().push(*event));
    events
}
