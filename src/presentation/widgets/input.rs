//! Text input widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Text input field widget.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    /// Cursor position in characters.
    cursor: usize,
    focused: bool,
    multiline: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            multiline: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Accepts newlines on Enter.
    #[must_use]
    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets initial value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns whether the input accepts newlines.
    #[must_use]
    pub const fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Applies an editing key. Returns `false` when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.input_char(c),
            KeyCode::Enter if self.multiline => self.input_char('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Row and column of the cursor, counting newlines.
    fn cursor_position(&self) -> (usize, usize) {
        self.value
            .chars()
            .take(self.cursor)
            .fold((0, 0), |(row, col), c| {
                if c == '\n' { (row + 1, 0) } else { (row, col + 1) }
            })
    }

    fn display_text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        let (row, col) = self.cursor_position();

        // Single-line inputs scroll horizontally to keep the cursor visible.
        let scroll_x = if self.multiline {
            0
        } else {
            col.saturating_sub(usize::from(inner.width.saturating_sub(1)))
        };

        let mut paragraph = Paragraph::new(self.display_text())
            .style(text_style)
            .scroll((0, u16::try_from(scroll_x).unwrap_or(u16::MAX)));
        if self.multiline {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x + u16::try_from(col - scroll_x).unwrap_or(u16::MAX);
            let cursor_y = inner.y + u16::try_from(row).unwrap_or(u16::MAX);
            if cursor_x < inner.x + inner.width && cursor_y < inner.y + inner.height {
                buf[(cursor_x, cursor_y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Test");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Client").with_value("Pérez");

        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "Prez");
        assert_eq!(input.cursor_position(), (0, 1));

        input.input_char('é');
        assert_eq!(input.value(), "Pérez");
        assert_eq!(input.cursor_position(), (0, 2));
    }

    #[test]
    fn test_enter_only_edits_multiline() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        let mut single = TextInput::new("Name");
        assert!(!single.handle_key(enter));

        let mut multi = TextInput::new("Notes").multiline();
        multi.input_char('a');
        assert!(multi.handle_key(enter));
        multi.input_char('b');
        assert_eq!(multi.value(), "a\nb");
        assert_eq!(multi.cursor_position(), (1, 1));
    }

    #[test]
    fn test_control_keys_are_not_edits() {
        let mut input = TextInput::new("Name");
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(!input.handle_key(ctrl_s));
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let input = TextInput::new("Due").placeholder("YYYY-MM-DD");
        assert_eq!(input.display_text(), "YYYY-MM-DD");
    }
}
