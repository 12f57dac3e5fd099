//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::ConnectionStatus;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

impl From<ConnectionStatus> for StatusLevel {
    fn from(status: ConnectionStatus) -> Self {
        match status {
            ConnectionStatus::Checking => Self::Warning,
            ConnectionStatus::Online => Self::Success,
            ConnectionStatus::Offline => Self::Error,
        }
    }
}

/// Status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets left content.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Sets status level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Status bar showing `message` next to the backend address and its reachability.
    #[must_use]
    pub fn backend(message: impl Into<String>, api_url: &str, status: ConnectionStatus) -> Self {
        Self::new()
            .left(message)
            .right(format!("{api_url} [{}]", status.label()))
            .level(status.into())
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left_style = Style::default().fg(Color::Gray);
        let right_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let width = usize::from(area.width);
        let left_len = self.left.width();
        let right_len = self.right.width();

        let mut spans = vec![Span::styled(format!(" {}", self.left), left_style)];

        let padding = width.saturating_sub(left_len + right_len + 2);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }
        if !self.right.is_empty() {
            spans.push(Span::styled(format!("{} ", self.right), right_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_status_level_follows_connection() {
        let bar = StatusBar::backend("3 records", "http://localhost:8001", ConnectionStatus::Offline);
        assert_eq!(bar.level, StatusLevel::Error);
        assert_eq!(bar.right, "http://localhost:8001 [offline]");
    }

    #[test]
    fn test_render_places_right_text_at_edge() {
        let bar = StatusBar::new().left("ok").right("R");
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        (&bar).render(area, &mut buf);

        assert_eq!(buf[(1, 0)].symbol(), "o");
        assert_eq!(buf[(8, 0)].symbol(), "R");
    }
}
