//! Snapshot history with a cursor.
//!
//! Every entry is a complete snapshot. The entry under the cursor is the
//! visible state; entries after it can be redone and are dropped by the
//! next appending commit. Overwrites replace the visible entry in place and
//! are used for transient state (selection, entering edit mode) that should
//! not become its own undo step.

/// Linear undo/redo history over full snapshots.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
    limit: usize,
}

impl<T: Clone> History<T> {
    /// Create a history holding a single initial entry
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, 0)
    }

    /// Create with a maximum number of entries (0 = unlimited)
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            limit,
        }
    }

    /// The visible snapshot
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Drop the redo future, append `snapshot` and make it current
    pub fn commit(&mut self, snapshot: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        if self.limit > 0 && self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
            self.cursor -= excess;
        }
    }

    /// Replace the visible snapshot without touching length or the redo future
    pub fn overwrite(&mut self, snapshot: T) {
        self.entries[self.cursor] = snapshot;
    }

    /// Step back. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Discard everything and start over from `snapshot` at cursor 0
    pub fn reset(&mut self, snapshot: T) {
        self.entries.clear();
        self.entries.push(snapshot);
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots (never zero)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshots(&self) -> &[T] {
        &self.entries
    }
}
