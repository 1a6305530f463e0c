//! Single-line text input with a cursor (pure state transitions).
//!
//! Backs both the search bar and the inline edit fields. The cursor is a
//! char index, so multi-byte input edits cleanly.

/// Text buffer plus cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, `0..=value.chars().count()`.
    cursor: usize,
}

impl TextInput {
    /// Empty input, cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input prefilled with `value`, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert `ch` at the cursor and advance the cursor.
    pub fn insert(mut self, ch: char) -> Self {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
        self
    }

    /// Delete the char before the cursor. No-op at position 0.
    pub fn backspace(mut self) -> Self {
        if self.cursor == 0 {
            return self;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        self
    }

    /// Move cursor left. Saturates at 0.
    pub fn left(mut self) -> Self {
        self.cursor = self.cursor.saturating_sub(1);
        self
    }

    /// Move cursor right. Saturates at the end of the text.
    pub fn right(mut self) -> Self {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
        self
    }

    /// Split at the cursor: (before, char under cursor, after).
    ///
    /// The char under the cursor is `None` when the cursor is at the end.
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let at = self.byte_offset(self.cursor);
        let (before, rest) = self.value.split_at(at);
        let mut chars = rest.chars();
        let under = chars.next();
        (before, under, chars.as_str())
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
