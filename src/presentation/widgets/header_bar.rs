use crate::domain::{ConnectionStatus, ResourceKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

trait ConnectionStatusExt {
    fn display_text(self) -> &'static str;
    fn indicator(self) -> &'static str;
}

impl ConnectionStatusExt for ConnectionStatus {
    fn display_text(self) -> &'static str {
        match self {
            Self::Checking => "CHECKING",
            Self::Online => "API ONLINE",
            Self::Offline => "API OFFLINE",
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            Self::Online => "●",
            Self::Checking => "◐",
            Self::Offline => "○",
        }
    }
}

/// Navigation tab of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    /// Dashboard.
    Dashboard,
    /// Resource list.
    Records(ResourceKind),
}

impl NavTab {
    /// All tabs in order; digit keys `1` to `7` select them.
    pub const ALL: [Self; 7] = [
        Self::Dashboard,
        Self::Records(ResourceKind::Projects),
        Self::Records(ResourceKind::Leads),
        Self::Records(ResourceKind::Estimates),
        Self::Records(ResourceKind::Materials),
        Self::Records(ResourceKind::Proposals),
        Self::Records(ResourceKind::Invoices),
    ];

    /// Tab title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Records(kind) => kind.label(),
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab after this one, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Tab before this one, wrapping.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Colours of the header bar.
#[allow(missing_docs)]
pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub tab: Style,
    pub tab_active: Style,
    pub status_online: Style,
    pub status_offline: Style,
    pub status_checking: Style,
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            tab: Style::default().fg(Color::Gray),
            tab_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            status_online: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            status_offline: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_checking: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// App name, screen tabs and API status on one line.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    active: NavTab,
    connection_status: ConnectionStatus,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Header with the dashboard tab active and the API status unknown.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            active: NavTab::Dashboard,
            connection_status: ConnectionStatus::default(),
            style: HeaderBarStyle::default(),
        }
    }

    /// Highlights `tab`.
    #[must_use]
    pub const fn active(mut self, tab: NavTab) -> Self {
        self.active = tab;
        self
    }

    /// Sets the API status badge.
    #[must_use]
    pub const fn connection_status(mut self, status: ConnectionStatus) -> Self {
        self.connection_status = status;
        self
    }

    const fn status_style(&self) -> Style {
        match self.connection_status {
            ConnectionStatus::Online => self.style.status_online,
            ConnectionStatus::Checking => self.style.status_checking,
            ConnectionStatus::Offline => self.style.status_offline,
        }
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, tab) in NavTab::ALL.iter().enumerate() {
            let style = if *tab == self.active {
                self.style.tab_active
            } else {
                self.style.tab
            };
            spans.push(Span::styled(format!(" {}:{} ", i + 1, tab.label()), style));
        }
        spans
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let status_text = format!(
            " {} {} ",
            self.connection_status.indicator(),
            self.connection_status.display_text()
        );
        let status_width = u16::try_from(status_text.chars().count()).unwrap_or(u16::MAX);

        let mut left_spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::styled(format!(" v{} ", self.version), self.style.version),
        ];
        left_spans.extend(self.tab_spans());

        let left_width = area.width.saturating_sub(status_width);
        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(left_spans)).render(left_area, buf);

        if status_width < area.width {
            let right_x = area.right().saturating_sub(status_width);
            let right_area = Rect::new(right_x, area.y, status_width, 1);
            Paragraph::new(Line::from(Span::styled(status_text, self.status_style())))
                .render(right_area, buf);
        }
    }
}
