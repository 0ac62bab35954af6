use std::collections::VecDeque;

/// Append-only transcript of everything the shell has printed, including
/// echoed command lines. Lines are never reordered; the only way to remove
/// them is `clear()`, which resets the buffer to a single blank row, or
/// front eviction when a retention cap is configured.
#[derive(Debug, Clone)]
pub struct ScrollbackBuffer {
    lines: VecDeque<String>,
    /// Maximum retained lines. 0 disables eviction.
    max_lines: usize,
}

impl ScrollbackBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines,
        }
    }

    /// An uncapped buffer, the default for interactive sessions.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Append a single line to the end of the transcript.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        self.evict();
    }

    /// Append lines, in order, to the end of the transcript.
    pub fn append(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
        self.evict();
    }

    /// Replace the transcript with a single empty line, mirroring a screen
    /// clear that leaves one blank prompt row.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.lines.push_back(String::new());
    }

    /// Iterate the transcript from oldest to newest.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop oldest lines while over the cap. Relative order of survivors is
    /// unchanged, so recent-output behavior is identical to an uncapped
    /// buffer.
    fn evict(&mut self) {
        if self.max_lines == 0 {
            return;
        }
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }
}

impl Default for ScrollbackBuffer {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(buf: &ScrollbackBuffer) -> Vec<&str> {
        buf.lines().collect()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut buf = ScrollbackBuffer::unbounded();
        buf.append(["a".to_string(), "b".to_string()]);
        buf.append(["c".to_string()]);
        assert_eq!(snapshot(&buf), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clear_leaves_single_empty_line() {
        let mut buf = ScrollbackBuffer::unbounded();
        buf.append((0..100).map(|i| format!("line {}", i)));
        buf.clear();
        assert_eq!(snapshot(&buf), vec![""]);

        // Clearing an already-cleared buffer is idempotent.
        buf.clear();
        assert_eq!(snapshot(&buf), vec![""]);
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let mut buf = ScrollbackBuffer::new(3);
        buf.append(["a", "b", "c", "d", "e"].map(String::from));
        assert_eq!(snapshot(&buf), vec!["c", "d", "e"]);

        buf.push("f");
        assert_eq!(snapshot(&buf), vec!["d", "e", "f"]);
    }

    #[test]
    fn test_zero_cap_means_unbounded() {
        let mut buf = ScrollbackBuffer::new(0);
        buf.append((0..10_000).map(|i| i.to_string()));
        assert_eq!(buf.len(), 10_000);
    }
}
