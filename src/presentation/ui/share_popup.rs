//! Share channel picker.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::utils::centered_rect;
use crate::application::dto::ShareMessage;

/// Popup previewing a share message and offering email, SMS and clipboard.
#[derive(Debug, Clone)]
pub struct SharePopup {
    message: ShareMessage,
}

impl SharePopup {
    /// Opens the picker for `message`.
    #[must_use]
    pub const fn new(message: ShareMessage) -> Self {
        Self { message }
    }

    /// Message being shared.
    #[must_use]
    pub const fn message(&self) -> &ShareMessage {
        &self.message
    }

    fn option_line<'a>(key: &'a str, label: &'a str, detail: String) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!(" {key} "),
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {label} ")),
            Span::styled(detail, Style::default().fg(Color::DarkGray)),
        ])
    }
}

impl Widget for &SharePopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(70, 70, area);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" Share {} ", self.message.label));
        let inner = block.inner(area);
        block.render(area, buf);

        let [options_area, preview_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(inner);

        let recipient = self
            .message
            .email_to
            .clone()
            .filter(|to| !to.is_empty())
            .unwrap_or_else(|| "no recipient".to_string());
        let options = vec![
            SharePopup::option_line("e", "Email", format!("to {recipient}")),
            SharePopup::option_line("s", "SMS", format!("{} chars", self.message.sms.chars().count())),
            SharePopup::option_line("c", "Copy", "to clipboard".to_string()),
        ];
        Paragraph::new(options).render(options_area, buf);

        Paragraph::new(self.message.clipboard.as_str())
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .title(" Preview ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false })
            .render(preview_area, buf);
    }
}
