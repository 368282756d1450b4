use std::ops::Range;

/// Represents a text cursor position and selection.
///
/// Positions count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCursor {
    /// Current cursor position.
    pub position: usize,
    /// Selection anchor, if any.
    pub selection_start: Option<usize>,
}

impl TextCursor {
    /// Create a new cursor at the given position.
    pub fn new(position: usize) -> Self {
        Self {
            position,
            selection_start: None,
        }
    }

    /// Get the selection range if there is one.
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection_start.map(|start| {
            if start <= self.position {
                start..self.position
            } else {
                self.position..start
            }
        })
    }

    /// Check if there is a selection.
    pub fn has_selection(&self) -> bool {
        self.selection_start.is_some()
    }

    /// Move cursor to a new position, clearing selection.
    pub fn move_to(&mut self, position: usize) {
        self.position = position;
        self.selection_start = None;
    }

    /// Move cursor to a new position, extending selection.
    pub fn move_to_with_selection(&mut self, position: usize) {
        if self.selection_start.is_none() {
            self.selection_start = Some(self.position);
        }
        self.position = position;
    }
}

/// The single-line text model behind the rounded fields.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: TextCursor,
}

impl TextBuffer {
    /// Create a new empty text buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text buffer with the cursor after `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = TextCursor::new(text.chars().count());
        Self { text, cursor }
    }

    /// Get the current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the current cursor state.
    pub fn cursor(&self) -> TextCursor {
        self.cursor
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    fn byte_range(&self, range: Range<usize>) -> Range<usize> {
        self.byte_offset(range.start)..self.byte_offset(range.end)
    }

    /// Insert text at the cursor, replacing the selection if there is one.
    pub fn insert(&mut self, text: &str) {
        // Single-line: drop anything after a line break.
        let text = text.lines().next().unwrap_or_default();
        let start = match self.cursor.selection() {
            Some(selection) => {
                let bytes = self.byte_range(selection.clone());
                self.text.replace_range(bytes, "");
                selection.start
            },
            None => self.cursor.position,
        };
        let offset = self.byte_offset(start);
        self.text.insert_str(offset, text);
        self.cursor.move_to(start + text.chars().count());
    }

    fn delete_selection(&mut self) -> bool {
        let Some(selection) = self.cursor.selection() else {
            return false;
        };
        let bytes = self.byte_range(selection.clone());
        self.text.replace_range(bytes, "");
        self.cursor.move_to(selection.start);
        true
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_backward(&mut self) {
        if self.delete_selection() || self.cursor.position == 0 {
            return;
        }
        let position = self.cursor.position;
        let bytes = self.byte_range(position - 1..position);
        self.text.replace_range(bytes, "");
        self.cursor.move_to(position - 1);
    }

    /// Delete the character after the cursor (delete key).
    pub fn delete_forward(&mut self) {
        if self.delete_selection() || self.cursor.position >= self.len() {
            return;
        }
        let position = self.cursor.position;
        let bytes = self.byte_range(position..position + 1);
        self.text.replace_range(bytes, "");
    }

    fn move_cursor(&mut self, position: usize, extend_selection: bool) {
        if extend_selection {
            self.cursor.move_to_with_selection(position);
        } else {
            self.cursor.move_to(position);
        }
    }

    /// Move cursor left by one character.
    pub fn move_left(&mut self, extend_selection: bool) {
        let position = self.cursor.position.saturating_sub(1);
        self.move_cursor(position, extend_selection);
    }

    /// Move cursor right by one character.
    pub fn move_right(&mut self, extend_selection: bool) {
        let position = (self.cursor.position + 1).min(self.len());
        self.move_cursor(position, extend_selection);
    }

    /// Move cursor to the beginning of the text.
    pub fn move_to_start(&mut self, extend_selection: bool) {
        self.move_cursor(0, extend_selection);
    }

    /// Move cursor to the end of the text.
    pub fn move_to_end(&mut self, extend_selection: bool) {
        self.move_cursor(self.len(), extend_selection);
    }

    /// Select everything.
    pub fn select_all(&mut self) {
        self.cursor.move_to(0);
        self.cursor.move_to_with_selection(self.len());
    }

    /// Get the selected text (if any).
    pub fn selected_text(&self) -> Option<&str> {
        self.cursor
            .selection()
            .map(|range| &self.text[self.byte_range(range)])
    }

    /// Text before the cursor.
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_offset(self.cursor.position)]
    }

    /// Replace the whole content, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::with_text(text);
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor.move_to(0);
    }
}
