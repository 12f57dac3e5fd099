//! Delete confirmation popup.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::utils::{centered_fixed, truncate};
use crate::domain::entities::ResourceKind;

/// Record awaiting a y/n answer before it is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDelete {
    /// Kind of the record.
    pub kind: ResourceKind,
    /// Record id sent with the delete.
    pub id: String,
    /// Card title shown in the question.
    pub title: String,
}

impl ConfirmDelete {
    /// Asks about deleting the record `id` of `kind`.
    #[must_use]
    pub fn new(kind: ResourceKind, id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Widget for &ConfirmDelete {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_fixed(50, 7, area);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Delete {} ", self.kind.singular()));

        let name_width = usize::from(area.width.saturating_sub(6));
        let lines = vec![
            Line::from(Span::styled(
                truncate(&self.title, name_width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Are you sure? "),
                Span::styled("y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" delete  "),
                Span::styled("n", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" keep"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
