/// The single line of text currently being composed.
///
/// Editing is cursor-free: characters append at the end, backspace removes
/// the last character, and history recall replaces the whole line. The
/// stored text always matches what is displayed.
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    text: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Wholesale replacement, used by history recall.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Drain the line on submission.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the line is empty after trimming; submission is gated on
    /// this check.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
