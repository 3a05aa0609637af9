// history.rs - Bounded, seekable log of board snapshots
// Recording while the cursor sits in the past discards everything after it

use std::collections::VecDeque;

use tracing::debug;

use crate::board::Board;

/// Snapshot log with a live cursor.
#[derive(Debug, Clone)]
pub struct History {
    /// Snapshots, oldest first.
    entries: VecDeque<Board>,
    /// Index of the displayed snapshot, `None` while empty.
    cursor: Option<usize>,
    /// Maximum number of snapshots kept.
    capacity: usize,
}

impl History {
    /// Creates an empty history keeping at most `capacity` snapshots (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Records `board` after the cursor.
    ///
    /// Truncates any snapshots past the cursor, then evicts the oldest ones
    /// once the capacity is exceeded. The cursor ends on the new snapshot.
    pub fn push(&mut self, board: Board) {
        let keep = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push_back(board);

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Jumps to snapshot `index`. Out-of-range indices leave the cursor alone.
    pub fn move_to(&mut self, index: usize) -> Option<&Board> {
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "history index out of range");
            return None;
        }
        self.cursor = Some(index);
        self.entries.get(index)
    }

    /// Steps one snapshot back, if there is one.
    pub fn move_backward(&mut self) -> Option<&Board> {
        match self.cursor {
            Some(i) if i > 0 => self.move_to(i - 1),
            _ => None,
        }
    }

    /// Steps one snapshot forward, if there is one.
    pub fn move_forward(&mut self) -> Option<&Board> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => self.move_to(i + 1),
            _ => None,
        }
    }

    /// Drops every snapshot.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn can_move_backward(&self) -> bool {
        self.cursor.is_some_and(|i| i > 0)
    }

    pub fn can_move_forward(&self) -> bool {
        self.cursor.is_some_and(|i| i + 1 < self.entries.len())
    }

    pub fn current(&self) -> Option<&Board> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshots up to and including the cursor.
    pub fn branch(&self) -> impl Iterator<Item = &Board> + '_ {
        let end = self.cursor.map_or(0, |i| i + 1);
        self.entries.range(..end)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Board> + '_ {
        self.entries.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::config::MAX_HISTORY)
    }
}
