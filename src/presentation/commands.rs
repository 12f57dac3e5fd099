use crate::domain::entities::ResourceKind;
use crate::domain::keybinding::{Action, KeyScope, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

const SCREEN_KEYS: [char; 6] = ['2', '3', '4', '5', '6', '7'];

/// Key bindings per scope, plus the primary key each footer hint shows.
pub struct CommandRegistry {
    display_bindings: HashMap<(KeyScope, Action), KeyEvent>,
    input_bindings: Vec<(KeyScope, KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |scope: KeyScope, action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert((scope, action), key);
            }
            input_bindings.push((scope, key, action));
        };

        use KeyScope::{Confirm, Dashboard, Form, Global, List, Share};

        register(Global, Action::Quit, key(KeyCode::Char('q')), true);
        register(Global, Action::Quit, ctrl('c'), false);
        register(Global, Action::NextTab, key(KeyCode::Tab), true);
        register(
            Global,
            Action::PreviousTab,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            false,
        );
        register(Global, Action::ShowDashboard, key(KeyCode::Char('1')), false);
        for (kind, digit) in ResourceKind::ALL.into_iter().zip(SCREEN_KEYS) {
            register(Global, Action::ShowResource(kind), key(KeyCode::Char(digit)), false);
        }

        register(
            Dashboard,
            Action::QuickCreate(ResourceKind::Projects),
            key(KeyCode::Char('p')),
            true,
        );
        register(
            Dashboard,
            Action::QuickCreate(ResourceKind::Leads),
            key(KeyCode::Char('l')),
            true,
        );
        register(
            Dashboard,
            Action::QuickCreate(ResourceKind::Estimates),
            key(KeyCode::Char('e')),
            true,
        );
        register(
            Dashboard,
            Action::QuickCreate(ResourceKind::Proposals),
            key(KeyCode::Char('o')),
            true,
        );
        register(Dashboard, Action::Refresh, key(KeyCode::Char('r')), true);

        register(List, Action::NavigateUp, key(KeyCode::Up), true);
        register(List, Action::NavigateUp, key(KeyCode::Char('k')), false);
        register(List, Action::NavigateDown, key(KeyCode::Down), true);
        register(List, Action::NavigateDown, key(KeyCode::Char('j')), false);
        register(List, Action::NewRecord, key(KeyCode::Char('n')), true);
        register(List, Action::EditRecord, key(KeyCode::Char('e')), true);
        register(List, Action::EditRecord, key(KeyCode::Enter), false);
        register(List, Action::DeleteRecord, key(KeyCode::Char('d')), true);
        register(List, Action::ShareRecord, key(KeyCode::Char('s')), true);
        register(List, Action::Refresh, key(KeyCode::Char('r')), true);

        register(Form, Action::Submit, ctrl('s'), true);
        register(Form, Action::FocusNext, key(KeyCode::Tab), true);
        register(Form, Action::FocusNext, key(KeyCode::Down), false);
        register(
            Form,
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(Form, Action::FocusPrevious, key(KeyCode::Up), false);
        register(Form, Action::CycleNext, ctrl('n'), true);
        register(Form, Action::CyclePrevious, ctrl('p'), false);
        register(Form, Action::AddLineItem, ctrl('a'), true);
        register(Form, Action::RemoveLineItem, ctrl('x'), true);
        register(Form, Action::Cancel, key(KeyCode::Esc), true);

        register(Confirm, Action::Confirm, key(KeyCode::Char('y')), true);
        register(Confirm, Action::Cancel, key(KeyCode::Char('n')), true);
        register(Confirm, Action::Cancel, key(KeyCode::Esc), false);

        register(Share, Action::ShareEmail, key(KeyCode::Char('e')), true);
        register(Share, Action::ShareSms, key(KeyCode::Char('s')), true);
        register(Share, Action::ShareCopy, key(KeyCode::Char('c')), true);
        register(Share, Action::Cancel, key(KeyCode::Esc), true);

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

impl CommandRegistry {
    /// Registry with the default bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary key for `action` in `scope`.
    pub fn get(&self, scope: KeyScope, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&(scope, action)).copied()
    }

    /// Action bound to `key` in `scope`.
    pub fn find_action(&self, scope: KeyScope, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(s, k, _)| *s == scope && k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, _, a)| *a)
    }

    /// Builds a footer hint for `action` if it has a primary key in `scope`.
    pub fn hint(
        &self,
        scope: KeyScope,
        action: Action,
        label: &'static str,
    ) -> Option<Keybind> {
        self.get(scope, action)
            .map(|key| Keybind::new(key, action, label))
    }
}

/// Components that advertise their key bindings in the footer.
pub trait HasCommands {
    /// Bindings to show while the component is active.
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_disambiguates_shared_keys() {
        let registry = CommandRegistry::new();
        let e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);

        assert_eq!(registry.find_action(KeyScope::List, e), Some(Action::EditRecord));
        assert_eq!(registry.find_action(KeyScope::Share, e), Some(Action::ShareEmail));
        assert_eq!(
            registry.find_action(KeyScope::Dashboard, e),
            Some(Action::QuickCreate(ResourceKind::Estimates))
        );
        assert_eq!(registry.find_action(KeyScope::Form, e), None);
    }

    #[test]
    fn test_digit_keys_select_screens() {
        let registry = CommandRegistry::new();
        let seven = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        let one = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);

        assert_eq!(
            registry.find_action(KeyScope::Global, seven),
            Some(Action::ShowResource(ResourceKind::Invoices))
        );
        assert_eq!(
            registry.find_action(KeyScope::Global, one),
            Some(Action::ShowDashboard)
        );
    }

    #[test]
    fn test_hint_uses_primary_binding() {
        let registry = CommandRegistry::new();
        let hint = registry
            .hint(KeyScope::Form, Action::Submit, "Save")
            .unwrap();
        assert_eq!(hint.key, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(registry.hint(KeyScope::Confirm, Action::Submit, "Save").is_none());
    }
}
