//! Command history ring.

use crate::config::HISTORY_LINES;
use crate::console::line::Line;

/// Direction of a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward older entries (Up arrow).
    Previous,
    /// Toward newer entries (Down arrow).
    Next,
}

/// Fixed-capacity history of submitted lines.
pub struct CommandHistory {
    /// Stored lines, oldest first.
    entries: heapless::Vec<Line, HISTORY_LINES>,
    /// Navigation index. `entries.len()` means "not navigating".
    cursor: usize,
}

impl CommandHistory {
    /// Create a new empty history.
    pub const fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
            cursor: 0,
        }
    }

    /// Add a submitted line to history.
    ///
    /// Empty lines and repeats of the most recent entry are not stored. The
    /// oldest entry is evicted when the ring is full. Navigation always
    /// restarts past the newest entry.
    pub fn push(&mut self, line: &[u8]) {
        let is_repeat = self.entries.last().is_some_and(|last| last.as_slice() == line);
        if !line.is_empty() && !is_repeat {
            if self.entries.is_full() {
                self.entries.remove(0);
            }
            let mut entry = Line::new();
            let len = line.len().min(entry.capacity());
            let _ = entry.extend_from_slice(&line[..len]);
            // Not full: an entry was evicted above if needed
            let _ = self.entries.push(entry);
        }
        self.reset_navigation();
    }

    /// Step through history. Returns the entry now selected, or `None` when
    /// already at the boundary in that direction.
    pub fn navigate(&mut self, direction: Direction) -> Option<&[u8]> {
        let count = self.entries.len();
        let target = match direction {
            Direction::Previous if self.cursor > 0 => self.cursor - 1,
            Direction::Next if count > 0 && self.cursor >= count => count - 1,
            Direction::Next if self.cursor + 1 < count => self.cursor + 1,
            _ => return None,
        };
        self.cursor = target;
        Some(self.entries[target].as_slice())
    }

    /// Forget the navigation position.
    pub fn reset_navigation(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Index of the entry being displayed, if navigating.
    pub fn position(&self) -> Option<usize> {
        (self.cursor < self.entries.len()).then_some(self.cursor)
    }

    /// Get all history entries (oldest first).
    pub fn entries(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(|entry| entry.as_slice())
    }

    /// Get the number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Check if history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(history: &CommandHistory) -> Vec<Vec<u8>> {
        history.entries().map(|e| e.to_vec()).collect()
    }

    #[test]
    fn test_push_keeps_last_n_oldest_first() {
        let mut history = CommandHistory::new();
        for i in 0..=HISTORY_LINES {
            history.push(format!("cmd{i}").as_bytes());
        }
        assert_eq!(history.count(), HISTORY_LINES);
        let expected: Vec<Vec<u8>> = (1..=HISTORY_LINES)
            .map(|i| format!("cmd{i}").into_bytes())
            .collect();
        assert_eq!(collect(&history), expected);
    }

    #[test]
    fn test_consecutive_duplicate_stored_once() {
        let mut history = CommandHistory::new();
        history.push(b"ls");
        history.push(b"ls");
        assert_eq!(history.count(), 1);
    }

    #[test]
    fn test_dedup_only_against_last_entry() {
        let mut history = CommandHistory::new();
        history.push(b"ls");
        history.push(b"pwd");
        history.push(b"ls");
        assert_eq!(collect(&history), vec![b"ls".to_vec(), b"pwd".to_vec(), b"ls".to_vec()]);
    }

    #[test]
    fn test_empty_line_not_stored() {
        let mut history = CommandHistory::new();
        history.push(b"");
        assert!(history.is_empty());
    }

    #[test]
    fn test_previous_walks_back_and_stops_at_oldest() {
        let mut history = CommandHistory::new();
        history.push(b"one");
        history.push(b"two");

        assert_eq!(history.navigate(Direction::Previous), Some(&b"two"[..]));
        assert_eq!(history.navigate(Direction::Previous), Some(&b"one"[..]));
        assert_eq!(history.navigate(Direction::Previous), None);
        assert_eq!(history.navigate(Direction::Previous), None);
        assert_eq!(history.position(), Some(0));
    }

    #[test]
    fn test_next_stops_at_newest() {
        let mut history = CommandHistory::new();
        history.push(b"one");
        history.push(b"two");
        history.navigate(Direction::Previous);
        history.navigate(Direction::Previous);

        assert_eq!(history.navigate(Direction::Next), Some(&b"two"[..]));
        assert_eq!(history.navigate(Direction::Next), None);
        assert_eq!(history.position(), Some(1));
    }

    #[test]
    fn test_next_without_navigation_lands_on_newest() {
        let mut history = CommandHistory::new();
        history.push(b"one");
        history.push(b"two");
        assert_eq!(history.navigate(Direction::Next), Some(&b"two"[..]));
    }

    #[test]
    fn test_navigate_empty_history() {
        let mut history = CommandHistory::new();
        assert_eq!(history.navigate(Direction::Previous), None);
        assert_eq!(history.navigate(Direction::Next), None);
    }

    #[test]
    fn test_push_resets_navigation() {
        let mut history = CommandHistory::new();
        history.push(b"one");
        history.push(b"two");
        history.navigate(Direction::Previous);
        history.navigate(Direction::Previous);
        history.push(b"two");
        assert_eq!(history.position(), None);
        assert_eq!(history.navigate(Direction::Previous), Some(&b"two"[..]));
    }
}
