use crate::game::Game;

/// Append-only log of position snapshots.
///
/// Each entry is a full `Game` clone taken before a move was applied, so
/// undo is "pop and restore" rather than reverse move application. A flat
/// vector of 64-cell boards is cheap enough that pointer-chasing undo
/// structures buy nothing here.
#[derive(Clone, Debug, Default)]
pub struct GameLog {
    snapshots: Vec<Game>,
}

impl GameLog {
    pub fn new() -> GameLog {
        GameLog {
            snapshots: Vec::new(),
        }
    }

    /// Append a snapshot of the given position.
    pub fn record(&mut self, game: &Game) {
        self.snapshots.push(game.clone());
    }

    /// Remove and return the most recent snapshot.
    pub fn undo(&mut self) -> Option<Game> {
        self.snapshots.pop()
    }

    pub fn last(&self) -> Option<&Game> {
        self.snapshots.last()
    }

    pub fn get(&self, index: usize) -> Option<&Game> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
