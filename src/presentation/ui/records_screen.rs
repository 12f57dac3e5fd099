//! Generic record list with a detail pane.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::utils::truncate;
use crate::application::dto::{RecordCard, RecordSet, References};
use crate::domain::entities::ResourceKind;
use crate::domain::keybinding::{Action, KeyScope, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};

/// List screen of one resource kind.
#[derive(Debug)]
pub struct RecordsScreenState {
    kind: ResourceKind,
    set: Option<RecordSet>,
    list_state: ListState,
    last_error: Option<String>,
}

impl RecordsScreenState {
    /// Creates a loading screen for `kind`.
    #[must_use]
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            set: None,
            list_state: ListState::default(),
            last_error: None,
        }
    }

    /// Resource kind listed.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// A screen stays loading until its first successful fetch.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.set.is_none()
    }

    /// Error of the last failed fetch.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Loaded cards, empty while loading.
    #[must_use]
    pub fn cards(&self) -> &[RecordCard] {
        self.set
            .as_ref()
            .map(|s| s.cards.as_slice())
            .unwrap_or_default()
    }

    /// Reference options loaded alongside the records.
    #[must_use]
    pub fn references(&self) -> References {
        self.set
            .as_ref()
            .map(|s| s.references.clone())
            .unwrap_or_default()
    }

    /// Replaces the records, keeping the selection index where possible.
    pub fn set_records(&mut self, set: RecordSet) {
        let len = set.cards.len();
        self.set = Some(set);
        self.last_error = None;
        let selected = match (self.list_state.selected(), len) {
            (_, 0) => None,
            (Some(i), _) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Records a failed fetch; loaded cards stay.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }

    /// Moves the selection down, stopping at the last card.
    pub fn select_next(&mut self) {
        let len = self.cards().len();
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(next));
    }

    /// Moves the selection up, stopping at the first card.
    pub fn select_previous(&mut self) {
        if self.cards().is_empty() {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }

    /// Card under the selection.
    #[must_use]
    pub fn selected_card(&self) -> Option<&RecordCard> {
        self.list_state
            .selected()
            .and_then(|i| self.cards().get(i))
    }

    /// Status bar text for this screen.
    #[must_use]
    pub fn status_text(&self) -> String {
        match (&self.set, &self.last_error) {
            (None, Some(error)) => format!("Failed to load {}: {error}", self.kind.singular()),
            (None, None) => format!("Loading {}…", self.kind.label().to_lowercase()),
            (Some(set), _) => format!("{} {}", set.cards.len(), self.kind.label().to_lowercase()),
        }
    }
}

impl HasCommands for RecordsScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut commands = vec![
            registry.hint(KeyScope::List, Action::NewRecord, "New"),
            registry.hint(KeyScope::List, Action::EditRecord, "Edit"),
            registry.hint(KeyScope::List, Action::DeleteRecord, "Delete"),
        ];
        if self.kind.is_shareable() {
            commands.push(registry.hint(KeyScope::List, Action::ShareRecord, "Share"));
        }
        commands.push(registry.hint(KeyScope::List, Action::Refresh, "Refresh"));
        commands.push(registry.hint(KeyScope::Global, Action::NextTab, "Next"));
        commands.into_iter().flatten().collect()
    }
}

/// Record list widget.
pub struct RecordsScreen;

impl RecordsScreen {
    fn render_list(state: &mut RecordsScreenState, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", state.kind.label()));

        if state.is_loading() {
            Paragraph::new(Span::styled(
                state.status_text(),
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
            return;
        }

        if state.cards().is_empty() {
            Paragraph::new(Span::styled(
                format!("No {} yet. Press n to create one.", state.kind.label().to_lowercase()),
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
            return;
        }

        let width = usize::from(area.width.saturating_sub(4));
        let items: Vec<ListItem> = state
            .cards()
            .iter()
            .map(|card| {
                let mut title = vec![Span::styled(
                    truncate(&card.title, width),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if let Some(status) = &card.status {
                    title.push(Span::styled(
                        format!("  [{status}]"),
                        Style::default().fg(Color::Yellow),
                    ));
                }
                let subtitle = card.subtitle.as_deref().unwrap_or_default();
                ListItem::new(vec![
                    Line::from(title),
                    Line::from(Span::styled(
                        truncate(subtitle, width),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▌");
        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }

    fn render_detail(state: &RecordsScreenState, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Details ");

        let Some(card) = state.selected_card() else {
            block.render(area, buf);
            return;
        };

        let mut lines = vec![Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(subtitle) = &card.subtitle {
            lines.push(Line::from(subtitle.clone()));
        }
        if let Some(status) = &card.status {
            lines.push(Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
                Span::styled(status.clone(), Style::default().fg(Color::Yellow)),
            ]));
        }
        lines.push(Line::from(""));
        for (label, value) in &card.lines {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                Span::raw(value.clone()),
            ]));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl StatefulWidget for RecordsScreen {
    type State = RecordsScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);
        Self::render_list(state, list_area, buf);
        Self::render_detail(state, detail_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::RecordForm;

    fn card(id: &str, title: &str) -> RecordCard {
        RecordCard {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            status: Some("Active".into()),
            lines: vec![("Budget".into(), "$1,000.00".into())],
            form: RecordForm::default(),
            share: None,
        }
    }

    fn set(cards: Vec<RecordCard>) -> RecordSet {
        RecordSet {
            kind: ResourceKind::Projects,
            cards,
            references: References::default(),
        }
    }

    #[test]
    fn test_stays_loading_after_error() {
        let mut state = RecordsScreenState::new(ResourceKind::Projects);
        state.set_error("network error");

        assert!(state.is_loading());
        assert!(state.status_text().contains("network error"));
    }

    #[test]
    fn test_selection_clamps_on_reload() {
        let mut state = RecordsScreenState::new(ResourceKind::Projects);
        state.set_records(set(vec![card("1", "A"), card("2", "B"), card("3", "C")]));
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_card().unwrap().id, "3");

        state.set_records(set(vec![card("1", "A"), card("2", "B")]));
        assert_eq!(state.selected_card().unwrap().id, "2");

        state.set_records(set(Vec::new()));
        assert!(state.selected_card().is_none());
        state.select_previous();
        assert!(state.selected_card().is_none());
    }

    #[test]
    fn test_share_hint_only_for_shareable_kinds() {
        let registry = CommandRegistry::new();
        let has_share = |kind| {
            RecordsScreenState::new(kind)
                .get_commands(&registry)
                .iter()
                .any(|k| k.action == Action::ShareRecord)
        };

        assert!(has_share(ResourceKind::Invoices));
        assert!(has_share(ResourceKind::Proposals));
        assert!(!has_share(ResourceKind::Leads));
    }

    #[test]
    fn test_render_shows_detail_lines() {
        let mut state = RecordsScreenState::new(ResourceKind::Projects);
        state.set_records(set(vec![card("1", "Kitchen Remodel")]));
        let area = Rect::new(0, 0, 80, 10);
        let mut buf = Buffer::empty(area);

        RecordsScreen.render(area, &mut buf, &mut state);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Kitchen Remodel"));
        assert!(text.contains("$1,000.00"));
    }
}
