//! Dashboard with counters and quick actions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::dto::DashboardStats;
use crate::domain::entities::ResourceKind;
use crate::domain::keybinding::{Action, KeyScope, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::widgets::FooterBar;

const QUICK_ACTIONS: [(ResourceKind, &str); 4] = [
    (ResourceKind::Projects, "New Project"),
    (ResourceKind::Leads, "New Lead"),
    (ResourceKind::Estimates, "New Estimate"),
    (ResourceKind::Proposals, "New Proposal"),
];

/// Dashboard state; counters stay `None` until all three fetches succeed.
#[derive(Debug, Default)]
pub struct DashboardScreenState {
    stats: Option<DashboardStats>,
}

impl DashboardScreenState {
    /// Creates a state that is still loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loaded counters, if any.
    #[must_use]
    pub const fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    /// Stores freshly loaded counters.
    pub fn set_stats(&mut self, stats: DashboardStats) {
        self.stats = Some(stats);
    }

    /// Whether the counters are still missing.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.stats.is_none()
    }
}

impl HasCommands for DashboardScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut commands: Vec<Keybind> = QUICK_ACTIONS
            .iter()
            .filter_map(|&(kind, label)| {
                registry.hint(KeyScope::Dashboard, Action::QuickCreate(kind), label)
            })
            .collect();
        commands.extend(registry.hint(KeyScope::Dashboard, Action::Refresh, "Refresh"));
        commands.extend(registry.hint(KeyScope::Global, Action::Quit, "Quit"));
        commands
    }
}

fn counter(title: &str, value: Option<usize>, color: Color, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {title} "));

    let text = value.map_or_else(|| "…".to_string(), |v| v.to_string());
    let inner = block.inner(area);
    block.render(area, buf);

    let [_, value_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(value_area, buf);
}

/// Dashboard widget.
pub struct DashboardScreen<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> DashboardScreen<'a> {
    /// Creates the widget; quick-action keys come from `registry`.
    #[must_use]
    pub const fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }
}

impl ratatui::widgets::StatefulWidget for DashboardScreen<'_> {
    type State = DashboardScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [title_area, counters_area, actions_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(10),
            Constraint::Fill(1),
        ])
        .areas(area);

        let subtitle = if state.is_loading() {
            "Loading projects, leads and estimates…"
        } else {
            "Overview of your construction business"
        };
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Dashboard",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
        ])
        .render(title_area, buf);

        let stats = state.stats;
        let pick = |f: fn(&DashboardStats) -> usize| stats.as_ref().map(f);

        let rows = Layout::vertical([Constraint::Length(5), Constraint::Length(5)]).split(counters_area);
        let top = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(rows[0]);
        let bottom = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(rows[1]);

        counter("Total Projects", pick(|s| s.total_projects), Color::Cyan, top[0], buf);
        counter("Active Projects", pick(|s| s.active_projects), Color::Green, top[1], buf);
        counter("Total Leads", pick(|s| s.total_leads), Color::Magenta, top[2], buf);
        counter("New Leads", pick(|s| s.new_leads), Color::Yellow, bottom[0], buf);
        counter("Total Estimates", pick(|s| s.total_estimates), Color::Blue, bottom[1], buf);
        counter("Pending Estimates", pick(|s| s.pending_estimates), Color::Red, bottom[2], buf);

        let hints: Vec<Keybind> = QUICK_ACTIONS
            .iter()
            .filter_map(|&(kind, label)| {
                self.registry
                    .hint(KeyScope::Dashboard, Action::QuickCreate(kind), label)
            })
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Quick Actions ");
        let inner = block.inner(actions_area);
        block.render(actions_area, buf);
        FooterBar::new(&hints).render(Rect::new(inner.x, inner.y, inner.width, inner.height.min(1)), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::StatefulWidget;

    fn rendered(state: &mut DashboardScreenState) -> String {
        let registry = CommandRegistry::new();
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);
        DashboardScreen::new(&registry).render(area, &mut buf, state);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_until_stats_arrive() {
        let mut state = DashboardScreenState::new();
        assert!(state.is_loading());
        assert!(rendered(&mut state).contains("Loading"));

        state.set_stats(DashboardStats {
            total_projects: 12,
            active_projects: 7,
            ..DashboardStats::default()
        });

        let screen = rendered(&mut state);
        assert!(!state.is_loading());
        assert!(screen.contains("12"));
        assert!(screen.contains("New Project"));
    }

    #[test]
    fn test_commands_list_quick_actions() {
        let registry = CommandRegistry::new();
        let labels: Vec<_> = DashboardScreenState::new()
            .get_commands(&registry)
            .into_iter()
            .map(|k| k.label.to_string())
            .collect();

        assert_eq!(
            labels,
            ["New Project", "New Lead", "New Estimate", "New Proposal", "Refresh", "Quit"]
        );
    }
}
