/// Direction of a history recall step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallDirection {
    /// Up-arrow: step back toward the oldest entry.
    Older,
    /// Down-arrow: step forward toward the not-yet-submitted input.
    Newer,
}

/// Chronological record of submitted commands with a recall cursor.
///
/// Entries are stored oldest-first and never deduplicated or rewritten.
/// The cursor counts from the most recent entry: 0 means no recall is
/// active, 1 is the most recent entry, `entries.len()` is the oldest.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command. Callers only push trimmed, non-empty
    /// input; duplicates are kept as-is.
    pub fn push(&mut self, raw: impl Into<String>) {
        self.entries.push(raw.into());
    }

    /// Deactivate recall. Called after every successful submission.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Step the cursor and return the text that should replace the input
    /// line, if any.
    ///
    /// `Older` returns `None` only when the history is empty; past the
    /// oldest entry it clamps and keeps returning that entry. `Newer`
    /// always returns a replacement, degrading to the empty string once
    /// recall is exhausted (the input line is cleared, not left alone).
    pub fn recall(&mut self, direction: RecallDirection) -> Option<String> {
        match direction {
            RecallDirection::Older => {
                if self.entries.is_empty() {
                    return None;
                }
                self.cursor = (self.cursor + 1).min(self.entries.len());
                Some(self.entries[self.entries.len() - self.cursor].clone())
            }
            RecallDirection::Newer => {
                self.cursor = self.cursor.saturating_sub(1);
                if self.cursor == 0 {
                    Some(String::new())
                } else {
                    Some(self.entries[self.entries.len() - self.cursor].clone())
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(commands: &[&str]) -> CommandHistory {
        let mut history = CommandHistory::new();
        for cmd in commands {
            history.push(*cmd);
        }
        history
    }

    #[test]
    fn test_recall_older_on_empty_history_is_noop() {
        let mut history = CommandHistory::new();
        assert_eq!(history.recall(RecallDirection::Older), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_recall_older_walks_back_and_clamps() {
        let mut history = seeded(&["first", "second", "third"]);

        assert_eq!(history.recall(RecallDirection::Older).as_deref(), Some("third"));
        assert_eq!(history.recall(RecallDirection::Older).as_deref(), Some("second"));
        assert_eq!(history.recall(RecallDirection::Older).as_deref(), Some("first"));

        // Past the oldest entry the cursor clamps; it never wraps.
        assert_eq!(history.recall(RecallDirection::Older).as_deref(), Some("first"));
        assert_eq!(history.recall(RecallDirection::Older).as_deref(), Some("first"));
        assert_eq!(history.cursor(), 3);
    }

    #[test]
    fn test_recall_newer_exhausts_to_empty_string() {
        let mut history = seeded(&["first", "second"]);

        history.recall(RecallDirection::Older);
        history.recall(RecallDirection::Older);
        assert_eq!(history.recall(RecallDirection::Newer).as_deref(), Some("second"));
        assert_eq!(history.recall(RecallDirection::Newer).as_deref(), Some(""));

        // Further presses keep clearing the line rather than underflowing.
        assert_eq!(history.recall(RecallDirection::Newer).as_deref(), Some(""));
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_recall_round_trip_returns_to_empty() {
        let mut history = seeded(&["a", "b", "c", "d"]);

        let k = 3;
        for _ in 0..k {
            history.recall(RecallDirection::Older);
        }
        let mut last = None;
        for _ in 0..k {
            last = history.recall(RecallDirection::Newer);
        }
        assert_eq!(last.as_deref(), Some(""));
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_push_keeps_duplicates_and_recall_never_mutates() {
        let mut history = seeded(&["ls", "ls"]);
        assert_eq!(history.len(), 2);

        history.recall(RecallDirection::Older);
        history.recall(RecallDirection::Older);
        history.recall(RecallDirection::Newer);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_reset_cursor_after_submission() {
        let mut history = seeded(&["one", "two"]);
        history.recall(RecallDirection::Older);
        history.push("three");
        history.reset_cursor();

        // Recall starts again from the newest entry.
        assert_eq!(history.recall(RecallDirection::Older).as_deref(), Some("three"));
    }
}
