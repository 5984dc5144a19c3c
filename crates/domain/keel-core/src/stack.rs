use crate::entry::NavigationEntry;

/// Back-history for a single navigable surface.
///
/// Holds strictly *prior* entries: the currently displayed entry lives with
/// whoever owns the surface, never in the stack.
#[derive(Debug, Default)]
pub struct NavigationStack {
    entries: Vec<NavigationEntry>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` as the newest history entry.
    pub fn push(&mut self, entry: NavigationEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the newest entry, `None` when there is no history.
    pub fn pop(&mut self) -> Option<NavigationEntry> {
        self.entries.pop()
    }

    /// The newest entry without removing it.
    pub fn peek(&self) -> Option<&NavigationEntry> {
        self.entries.last()
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Discard all history at once.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
