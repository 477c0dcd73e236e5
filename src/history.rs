use serde::{Deserialize, Serialize};

use crate::Point;
use crate::ko::Ko;
use crate::stone::Stone;
use crate::turn::Turn;

/// Everything needed to invert one committed move: the captured points with
/// their prior color and the ko state on both sides of the move. Cheap to
/// keep regardless of board size, unlike a grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub turn: Turn,
    pub ordinal: u32,
    pub captured: Vec<(Point, Stone)>,
    pub ko_before: Option<Ko>,
    pub ko_after: Option<Ko>,
}

/// Append-only stack of applied moves. Only the last record is ever
/// un-applied; popped records are retained for redo until a new move commits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    applied: Vec<MoveRecord>,
    undone: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.applied.last()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.applied
    }

    /// Commit a new record. Forks the line: any pending redo is discarded.
    pub fn push(&mut self, record: MoveRecord) {
        self.undone.clear();
        self.applied.push(record);
    }

    /// Move the last applied record onto the redo stack and return it.
    pub fn undo(&mut self) -> Option<&MoveRecord> {
        let record = self.applied.pop()?;
        self.undone.push(record);
        self.undone.last()
    }

    /// Move the most recently undone record back and return it.
    pub fn redo(&mut self) -> Option<&MoveRecord> {
        let record = self.undone.pop()?;
        self.applied.push(record);
        self.applied.last()
    }

    pub fn clear(&mut self) {
        self.applied.clear();
        self.undone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ordinal: u32) -> MoveRecord {
        MoveRecord {
            turn: Turn::play(Stone::Black, (ordinal as u8, 0)),
            ordinal,
            captured: Vec::new(),
            ko_before: None,
            ko_after: None,
        }
    }

    #[test]
    fn push_and_pop_is_lifo() {
        let mut history = History::new();
        history.push(record(0));
        history.push(record(1));

        assert_eq!(history.len(), 2);
        assert_eq!(history.undo().map(|r| r.ordinal), Some(1));
        assert_eq!(history.undo().map(|r| r.ordinal), Some(0));
        assert_eq!(history.undo().map(|r| r.ordinal), None);
    }

    #[test]
    fn redo_restores_undone_records() {
        let mut history = History::new();
        history.push(record(0));
        history.push(record(1));
        history.undo();

        assert_eq!(history.redo().map(|r| r.ordinal), Some(1));
        assert_eq!(history.len(), 2);
        assert!(history.redo().is_none());
    }

    #[test]
    fn push_discards_pending_redo() {
        let mut history = History::new();
        history.push(record(0));
        history.undo();
        history.push(record(1));

        assert!(history.redo().is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        history.push(record(0));
        history.push(record(1));
        history.undo();
        history.clear();

        assert!(history.is_empty());
        assert!(history.redo().is_none());
    }
}
