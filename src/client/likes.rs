//! Per-card like counters
//!
//! Like state lives only in the page: it starts at zero for every card and
//! is lost on reload. `app.js` applies the same toggle to the DOM.

use serde::Serialize;

/// State of one card's like control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LikeState {
    pub count: u32,
    pub liked: bool,
}

/// Like state for every card in the grid, indexed like the post list
#[derive(Debug, Clone, Default)]
pub struct LikeBoard {
    entries: Vec<LikeState>,
}

impl LikeBoard {
    /// `len` unliked entries with a zero count
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![LikeState::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<LikeState> {
        self.entries.get(index).copied()
    }

    /// Flip the liked flag and move the count by one in the same direction
    ///
    /// Returns the new state, or `None` for an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> Option<LikeState> {
        let entry = self.entries.get_mut(index)?;
        if entry.liked {
            entry.count = entry.count.saturating_sub(1);
        } else {
            entry.count += 1;
        }
        entry.liked = !entry.liked;
        Some(*entry)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
