//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, MouseEvent, MouseEventKind};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use super::backend::{Backend, BackendCommand, BackendEvent, BackendServices, ShareChannel};
use super::confirm_popup::ConfirmDelete;
use super::dashboard_screen::{DashboardScreen, DashboardScreenState};
use super::form_modal::FormModalState;
use super::notification_popup::NotificationPopup;
use super::records_screen::{RecordsScreen, RecordsScreenState};
use super::share_popup::SharePopup;
use crate::application::dto::{RecordForm, References};
use crate::application::services::{NotificationManager, blank_form};
use crate::domain::ConnectionStatus;
use crate::domain::entities::ResourceKind;
use crate::domain::keybinding::{Action, KeyScope, Keybind};
use crate::domain::notification::NotificationLevel;
use crate::infrastructure::config::{AppConfig, LastScreen, StateConfig, StorageManager};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::{EventResult, is_interrupt, is_press};
use crate::presentation::widgets::{FooterBar, HeaderBar, NavTab, StatusBar};

const NOTIFICATION_TICK_RATE: Duration = Duration::from_millis(250);

enum Screen {
    Dashboard(DashboardScreenState),
    Records(RecordsScreenState),
}

impl Screen {
    fn for_tab(tab: NavTab) -> Self {
        match tab {
            NavTab::Dashboard => Self::Dashboard(DashboardScreenState::new()),
            NavTab::Records(kind) => Self::Records(RecordsScreenState::new(kind)),
        }
    }

    const fn tab(&self) -> NavTab {
        match self {
            Self::Dashboard(_) => NavTab::Dashboard,
            Self::Records(state) => NavTab::Records(state.kind()),
        }
    }
}

enum Modal {
    Form(Box<FormModalState>),
    Confirm(ConfirmDelete),
    Share(SharePopup),
}

const fn tab_from_last_screen(screen: LastScreen) -> NavTab {
    match screen {
        LastScreen::Dashboard => NavTab::Dashboard,
        LastScreen::Records(kind) => NavTab::Records(kind),
    }
}

const fn last_screen_from_tab(tab: NavTab) -> LastScreen {
    match tab {
        NavTab::Dashboard => LastScreen::Dashboard,
        NavTab::Records(kind) => LastScreen::Records(kind),
    }
}

/// Terminal UI: screens, modals and the loop that feeds them.
pub struct App {
    screen: Screen,
    modal: Option<Modal>,
    registry: CommandRegistry,
    notifications: NotificationManager,
    connection: ConnectionStatus,
    api_url: String,
    status_message: String,
    storage: Option<StorageManager>,
    command_tx: mpsc::UnboundedSender<BackendCommand>,
    event_rx: mpsc::UnboundedReceiver<BackendEvent>,
    exiting: bool,
}

impl App {
    /// Creates the app and spawns its backend worker on the current runtime.
    #[must_use]
    pub fn new(
        services: BackendServices,
        config: &AppConfig,
        storage: Option<StorageManager>,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        tokio::spawn(Backend::new(services, command_rx, event_tx).run());

        Self::with_channels(command_tx, event_rx, config, storage)
    }

    fn with_channels(
        command_tx: mpsc::UnboundedSender<BackendCommand>,
        event_rx: mpsc::UnboundedReceiver<BackendEvent>,
        config: &AppConfig,
        storage: Option<StorageManager>,
    ) -> Self {
        let last_screen = if config.ui.restore_last_screen {
            storage
                .as_ref()
                .and_then(|s| {
                    s.load_state()
                        .inspect_err(|e| warn!(error = %e, "Failed to load session state"))
                        .ok()
                })
                .map(|state| state.last_screen)
                .unwrap_or_default()
        } else {
            LastScreen::Dashboard
        };

        Self {
            screen: Screen::for_tab(tab_from_last_screen(last_screen)),
            modal: None,
            registry: CommandRegistry::new(),
            notifications: NotificationManager::new(config.notification_duration()),
            connection: ConnectionStatus::Checking,
            api_url: config.api_url.clone(),
            status_message: "Connecting…".to_string(),
            storage,
            command_tx,
            event_rx,
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start();

        let mut terminal_events = EventStream::new();
        let mut notification_interval = interval(NOTIFICATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_backend_event(event);
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.exiting = true;
                    }
                }

                _ = notification_interval.tick() => {
                    self.notifications.tick();
                }
            }
            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn start(&self) {
        info!(api_url = %self.api_url, "Checking API");
        self.send(BackendCommand::CheckHealth);
        self.load_current();
    }

    fn send(&self, command: BackendCommand) {
        if self.command_tx.send(command).is_err() {
            warn!("Backend worker is gone, command dropped");
        }
    }

    fn load_current(&self) {
        match &self.screen {
            Screen::Dashboard(_) => self.send(BackendCommand::LoadDashboard),
            Screen::Records(state) => self.send(BackendCommand::LoadRecords(state.kind())),
        }
    }

    fn switch_to(&mut self, tab: NavTab) {
        if self.screen.tab() == tab {
            return;
        }
        debug!(screen = tab.label(), "Switching screen");
        self.screen = Screen::for_tab(tab);
        self.load_current();
        self.save_last_screen(tab);
    }

    fn save_last_screen(&self, tab: NavTab) {
        let Some(storage) = &self.storage else {
            return;
        };
        let state = StateConfig {
            last_screen: last_screen_from_tab(tab),
        };
        if let Err(e) = storage.save_state(&state) {
            warn!(error = %e, "Failed to save session state");
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => EventResult::Continue,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        if self.modal.is_some() {
            return EventResult::Continue;
        }
        let Screen::Records(state) = &mut self.screen else {
            return EventResult::Continue;
        };
        match mouse.kind {
            MouseEventKind::ScrollDown => state.select_next(),
            MouseEventKind::ScrollUp => state.select_previous(),
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !is_press(&key) {
            return EventResult::Continue;
        }
        if is_interrupt(&key) {
            return EventResult::Exit;
        }

        if let Some(modal) = self.modal.take() {
            self.modal = self.handle_modal_key(modal, key);
            return EventResult::Consumed;
        }

        if let Some(action) = self.registry.find_action(KeyScope::Global, key) {
            return self.handle_global_action(action);
        }

        let scope = match self.screen {
            Screen::Dashboard(_) => KeyScope::Dashboard,
            Screen::Records(_) => KeyScope::List,
        };
        match self.registry.find_action(scope, key) {
            Some(action) => {
                self.handle_screen_action(action);
                EventResult::Consumed
            }
            None => EventResult::Continue,
        }
    }

    fn handle_global_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::Quit => return EventResult::Exit,
            Action::NextTab => self.switch_to(self.screen.tab().next()),
            Action::PreviousTab => self.switch_to(self.screen.tab().previous()),
            Action::ShowDashboard => self.switch_to(NavTab::Dashboard),
            Action::ShowResource(kind) => self.switch_to(NavTab::Records(kind)),
            _ => return EventResult::Continue,
        }
        EventResult::Consumed
    }

    fn handle_screen_action(&mut self, action: Action) {
        match action {
            Action::QuickCreate(kind) => {
                self.switch_to(NavTab::Records(kind));
                self.open_form(kind, None, blank_form(kind), &References::default());
            }
            Action::Refresh => self.load_current(),
            _ => {}
        }

        let Screen::Records(state) = &mut self.screen else {
            return;
        };
        let kind = state.kind();
        match action {
            Action::NavigateDown => state.select_next(),
            Action::NavigateUp => state.select_previous(),
            Action::NewRecord => {
                let references = state.references();
                self.open_form(kind, None, blank_form(kind), &references);
            }
            Action::EditRecord => {
                if let Some(card) = state.selected_card() {
                    let (id, form) = (card.id.clone(), card.form.clone());
                    let references = state.references();
                    self.open_form(kind, Some(id), form, &references);
                }
            }
            Action::DeleteRecord => {
                if let Some(card) = state.selected_card() {
                    self.modal = Some(Modal::Confirm(ConfirmDelete::new(
                        kind,
                        card.id.clone(),
                        card.title.clone(),
                    )));
                }
            }
            Action::ShareRecord => {
                if let Some(message) = state.selected_card().and_then(|c| c.share.clone()) {
                    self.modal = Some(Modal::Share(SharePopup::new(message)));
                }
            }
            _ => {}
        }
    }

    fn open_form(
        &mut self,
        kind: ResourceKind,
        id: Option<String>,
        form: RecordForm,
        references: &References,
    ) {
        debug!(kind = %kind, editing = id.is_some(), "Opening form");
        self.modal = Some(Modal::Form(Box::new(FormModalState::new(
            kind, id, form, references,
        ))));
    }

    fn handle_modal_key(&mut self, modal: Modal, key: KeyEvent) -> Option<Modal> {
        match modal {
            Modal::Form(mut form) => {
                match self.registry.find_action(KeyScope::Form, key) {
                    Some(Action::Cancel) => return None,
                    Some(Action::Submit) => {
                        if let Some(record) = form.submit() {
                            self.send(BackendCommand::SaveRecord {
                                kind: form.kind(),
                                id: form.id().map(str::to_string),
                                form: record,
                            });
                        }
                    }
                    Some(Action::FocusNext) => form.focus_next(),
                    Some(Action::FocusPrevious) => form.focus_previous(),
                    Some(Action::CycleNext) => form.cycle(true),
                    Some(Action::CyclePrevious) => form.cycle(false),
                    Some(Action::AddLineItem) => form.add_line_item(),
                    Some(Action::RemoveLineItem) => form.remove_line_item(),
                    _ => {
                        form.handle_input(key);
                    }
                }
                Some(Modal::Form(form))
            }
            Modal::Confirm(confirm) => match self.registry.find_action(KeyScope::Confirm, key) {
                Some(Action::Confirm) => {
                    info!(kind = %confirm.kind, id = %confirm.id, "Deleting record");
                    self.send(BackendCommand::DeleteRecord {
                        kind: confirm.kind,
                        id: confirm.id,
                    });
                    None
                }
                Some(Action::Cancel) => None,
                _ => Some(Modal::Confirm(confirm)),
            },
            Modal::Share(popup) => {
                let channel = match self.registry.find_action(KeyScope::Share, key) {
                    Some(Action::ShareEmail) => ShareChannel::Email,
                    Some(Action::ShareSms) => ShareChannel::Sms,
                    Some(Action::ShareCopy) => ShareChannel::Clipboard,
                    Some(Action::Cancel) => return None,
                    _ => return Some(Modal::Share(popup)),
                };
                self.send(BackendCommand::Share {
                    message: popup.message().clone(),
                    channel,
                });
                None
            }
        }
    }

    fn open_form_mut(&mut self, kind: ResourceKind) -> Option<&mut FormModalState> {
        match &mut self.modal {
            Some(Modal::Form(form)) if form.kind() == kind => Some(form),
            _ => None,
        }
    }

    fn records_mut(&mut self, kind: ResourceKind) -> Option<&mut RecordsScreenState> {
        match &mut self.screen {
            Screen::Records(state) if state.kind() == kind => Some(state),
            _ => None,
        }
    }

    fn reload_if_showing(&self, kind: ResourceKind) {
        if self.screen.tab() == NavTab::Records(kind) {
            self.send(BackendCommand::LoadRecords(kind));
        }
    }

    fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::ApiOnline(service) => {
                self.connection = ConnectionStatus::Online;
                self.status_message = format!("{} v{}", service.message, service.version);
            }
            BackendEvent::ApiOffline(error) => {
                self.connection = ConnectionStatus::Offline;
                self.status_message = error;
            }
            BackendEvent::DashboardLoaded(stats) => {
                if let Screen::Dashboard(state) = &mut self.screen {
                    state.set_stats(stats);
                }
            }
            BackendEvent::DashboardLoadError(error) => {
                self.status_message = format!("Dashboard unavailable: {error}");
            }
            BackendEvent::RecordsLoaded(set) => {
                let kind = set.kind;
                let references = set.references.clone();
                if let Some(state) = self.records_mut(kind) {
                    state.set_records(set);
                }
                if let Some(form) = self.open_form_mut(kind) {
                    form.set_references(&references);
                }
            }
            BackendEvent::RecordsLoadError { kind, error } => {
                if let Some(state) = self.records_mut(kind) {
                    state.set_error(error);
                }
            }
            BackendEvent::RecordSaved { kind, updated } => {
                if self.open_form_mut(kind).is_some() {
                    self.modal = None;
                }
                let verb = if updated { "updated" } else { "created" };
                self.notifications
                    .success("Saved", format!("{} {verb}", capitalize(kind.singular())));
                self.reload_if_showing(kind);
            }
            BackendEvent::RecordSaveError { kind, error } => {
                if let Some(form) = self.open_form_mut(kind) {
                    form.set_error(error.clone());
                }
                self.notifications
                    .error(format!("Failed to save {}", kind.singular()), error);
            }
            BackendEvent::RecordDeleted { kind, id } => {
                debug!(kind = %kind, id = %id, "Record deleted");
                self.notifications
                    .success("Deleted", format!("{} deleted", capitalize(kind.singular())));
                self.reload_if_showing(kind);
            }
            BackendEvent::RecordDeleteError { kind, error } => {
                self.notifications
                    .error(format!("Failed to delete {}", kind.singular()), error);
            }
            BackendEvent::Shared(ShareChannel::Clipboard) => {
                self.notifications.success("Copied", "Copied to clipboard");
            }
            BackendEvent::Shared(channel) => {
                self.notifications.notify(
                    NotificationLevel::Info,
                    "Shared",
                    format!("Opened {} app", channel.label()),
                );
            }
            BackendEvent::ShareFailed { channel, error } => {
                self.notifications
                    .error(format!("Could not share via {}", channel.label()), error);
            }
        }
    }

    fn footer_commands(&self) -> (KeyScope, Vec<Keybind>) {
        match &self.modal {
            Some(Modal::Form(form)) => (KeyScope::Form, form.get_commands(&self.registry)),
            Some(Modal::Confirm(_)) => (
                KeyScope::Confirm,
                [
                    self.registry.hint(KeyScope::Confirm, Action::Confirm, "Delete"),
                    self.registry.hint(KeyScope::Confirm, Action::Cancel, "Keep"),
                ]
                .into_iter()
                .flatten()
                .collect(),
            ),
            Some(Modal::Share(_)) => (
                KeyScope::Share,
                [
                    self.registry.hint(KeyScope::Share, Action::ShareEmail, "Email"),
                    self.registry.hint(KeyScope::Share, Action::ShareSms, "SMS"),
                    self.registry.hint(KeyScope::Share, Action::ShareCopy, "Copy"),
                    self.registry.hint(KeyScope::Share, Action::Cancel, "Close"),
                ]
                .into_iter()
                .flatten()
                .collect(),
            ),
            None => match &self.screen {
                Screen::Dashboard(state) => {
                    (KeyScope::Dashboard, state.get_commands(&self.registry))
                }
                Screen::Records(state) => {
                    let mut commands = state.get_commands(&self.registry);
                    commands.extend(self.registry.hint(KeyScope::Global, Action::Quit, "Quit"));
                    (KeyScope::List, commands)
                }
            },
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, footer_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            HeaderBar::new(crate::NAME, crate::VERSION)
                .active(self.screen.tab())
                .connection_status(self.connection),
            header_area,
        );

        let status_message = match &self.screen {
            Screen::Records(state) if self.connection == ConnectionStatus::Online => {
                state.status_text()
            }
            _ => self.status_message.clone(),
        };

        match &mut self.screen {
            Screen::Dashboard(state) => {
                frame.render_stateful_widget(DashboardScreen::new(&self.registry), body_area, state);
            }
            Screen::Records(state) => {
                frame.render_stateful_widget(RecordsScreen, body_area, state);
            }
        }

        match &self.modal {
            Some(Modal::Form(form)) => frame.render_widget(&**form, body_area),
            Some(Modal::Confirm(confirm)) => frame.render_widget(confirm, body_area),
            Some(Modal::Share(popup)) => frame.render_widget(popup, body_area),
            None => {}
        }

        if let Some(notification) = self.notifications.current() {
            frame.render_widget(NotificationPopup::new(notification), body_area);
        }

        let (scope, commands) = self.footer_commands();
        frame.render_widget(FooterBar::new(&commands).scope(scope), footer_area);

        let status = StatusBar::backend(status_message, &self.api_url, self.connection);
        frame.render_widget(&status, status_area);
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{RecordCard, RecordSet, SelectOption};
    use crate::domain::ports::ServiceInfo;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::tempdir;

    struct Harness {
        app: App,
        commands: mpsc::UnboundedReceiver<BackendCommand>,
        _events: mpsc::UnboundedSender<BackendEvent>,
    }

    fn harness(storage: Option<StorageManager>) -> Harness {
        let (command_tx, commands) = mpsc::unbounded_channel();
        let (events, event_rx) = mpsc::unbounded_channel();
        let app = App::with_channels(command_tx, event_rx, &AppConfig::default(), storage);
        Harness {
            app,
            commands,
            _events: events,
        }
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn card(id: &str, title: &str) -> RecordCard {
        RecordCard {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: None,
            status: None,
            lines: Vec::new(),
            form: blank_form(ResourceKind::Materials),
            share: None,
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<BackendCommand>) -> Vec<BackendCommand> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn test_start_checks_health_and_loads_dashboard() {
        let mut h = harness(None);
        h.app.start();

        let sent = drain(&mut h.commands);
        assert!(matches!(sent[0], BackendCommand::CheckHealth));
        assert!(matches!(sent[1], BackendCommand::LoadDashboard));
    }

    #[test]
    fn test_digit_switches_screen_and_loads_it() {
        let mut h = harness(None);
        press(&mut h.app, KeyCode::Char('5'));

        assert_eq!(h.app.screen.tab(), NavTab::Records(ResourceKind::Materials));
        let sent = drain(&mut h.commands);
        assert!(matches!(
            sent.as_slice(),
            [BackendCommand::LoadRecords(ResourceKind::Materials)]
        ));
    }

    #[test]
    fn test_quit_ignored_while_form_open() {
        let mut h = harness(None);
        press(&mut h.app, KeyCode::Char('5'));
        press(&mut h.app, KeyCode::Char('n'));
        assert!(matches!(h.app.modal, Some(Modal::Form(_))));

        assert_eq!(press(&mut h.app, KeyCode::Char('q')), EventResult::Consumed);
        assert_eq!(press(&mut h.app, KeyCode::Esc), EventResult::Consumed);
        assert!(h.app.modal.is_none());
        assert_eq!(press(&mut h.app, KeyCode::Char('q')), EventResult::Exit);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut h = harness(None);
        press(&mut h.app, KeyCode::Char('5'));
        h.app.handle_backend_event(BackendEvent::RecordsLoaded(RecordSet {
            kind: ResourceKind::Materials,
            cards: vec![card("m-1", "Drywall"), card("m-2", "Lumber")],
            references: References::default(),
        }));
        press(&mut h.app, KeyCode::Down);
        drain(&mut h.commands);

        press(&mut h.app, KeyCode::Char('d'));
        assert!(drain(&mut h.commands).is_empty());
        press(&mut h.app, KeyCode::Char('n'));
        assert!(h.app.modal.is_none());
        assert!(drain(&mut h.commands).is_empty());

        press(&mut h.app, KeyCode::Char('d'));
        press(&mut h.app, KeyCode::Char('y'));
        let sent = drain(&mut h.commands);
        assert!(matches!(
            sent.as_slice(),
            [BackendCommand::DeleteRecord { kind: ResourceKind::Materials, id }] if id == "m-2"
        ));
    }

    #[test]
    fn test_quick_create_opens_form_and_fills_references() {
        let mut h = harness(None);
        press(&mut h.app, KeyCode::Char('o'));

        assert_eq!(h.app.screen.tab(), NavTab::Records(ResourceKind::Proposals));
        assert!(h.app.open_form_mut(ResourceKind::Proposals).is_some());

        let mut references = References::default();
        references.insert(ResourceKind::Estimates, vec![SelectOption::new("e-1", "Roof")]);
        h.app.handle_backend_event(BackendEvent::RecordsLoaded(RecordSet {
            kind: ResourceKind::Proposals,
            cards: Vec::new(),
            references,
        }));

        let form = h.app.open_form_mut(ResourceKind::Proposals).unwrap();
        form.cycle(true);
        assert_eq!(form.to_form().values.get("estimate_id"), "e-1");
    }

    #[test]
    fn test_save_error_keeps_form_and_success_closes_it() {
        let mut h = harness(None);
        press(&mut h.app, KeyCode::Char('7'));
        press(&mut h.app, KeyCode::Char('n'));

        h.app.handle_backend_event(BackendEvent::RecordSaveError {
            kind: ResourceKind::Invoices,
            error: "Failed to save invoices: due date missing".into(),
        });
        let form = h.app.open_form_mut(ResourceKind::Invoices).unwrap();
        assert_eq!(form.error(), Some("Failed to save invoices: due date missing"));
        assert_eq!(h.app.notifications.current().unwrap().level, NotificationLevel::Error);
        drain(&mut h.commands);

        h.app.handle_backend_event(BackendEvent::RecordSaved {
            kind: ResourceKind::Invoices,
            updated: false,
        });
        assert!(h.app.modal.is_none());
        assert!(matches!(
            drain(&mut h.commands).as_slice(),
            [BackendCommand::LoadRecords(ResourceKind::Invoices)]
        ));
    }

    #[test]
    fn test_health_events_update_connection() {
        let mut h = harness(None);
        h.app.handle_backend_event(BackendEvent::ApiOnline(ServiceInfo {
            message: "Crewlo API".into(),
            version: "1.0.0".into(),
        }));
        assert_eq!(h.app.connection, ConnectionStatus::Online);
        assert_eq!(h.app.status_message, "Crewlo API v1.0.0");

        h.app
            .handle_backend_event(BackendEvent::ApiOffline("Network error: refused".into()));
        assert_eq!(h.app.connection, ConnectionStatus::Offline);
    }

    #[test]
    fn test_clipboard_share_notifies() {
        let mut h = harness(None);
        h.app
            .handle_backend_event(BackendEvent::Shared(ShareChannel::Clipboard));

        let current = h.app.notifications.current().unwrap();
        assert_eq!(current.message, "Copied to clipboard");
    }

    #[test]
    fn test_last_screen_restored() {
        let dir = tempdir().unwrap();
        let mut h = harness(Some(StorageManager::with_dir(dir.path().to_path_buf())));
        press(&mut h.app, KeyCode::Char('3'));

        let restored = harness(Some(StorageManager::with_dir(dir.path().to_path_buf())));
        assert_eq!(
            restored.app.screen.tab(),
            NavTab::Records(ResourceKind::Leads)
        );
    }
}
