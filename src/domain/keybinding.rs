use crossterm::event::KeyEvent;
use std::borrow::Cow;

use crate::domain::entities::ResourceKind;

/// Everything a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    Quit,

    // Screens
    ShowDashboard,
    ShowResource(ResourceKind),
    NextTab,
    PreviousTab,
    QuickCreate(ResourceKind),

    // Record list
    NavigateUp,
    NavigateDown,
    NewRecord,
    EditRecord,
    DeleteRecord,
    ShareRecord,
    Refresh,

    // Form
    FocusNext,
    FocusPrevious,
    CycleNext,
    CyclePrevious,
    AddLineItem,
    RemoveLineItem,
    Submit,

    // Popups
    Confirm,
    ShareEmail,
    ShareSms,
    ShareCopy,
    Cancel,
}

/// Context a key press is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    /// Bindings that apply whenever no modal is open.
    Global,
    /// Dashboard screen.
    Dashboard,
    /// Record list screens.
    List,
    /// Create/edit form popup.
    Form,
    /// Delete confirmation popup.
    Confirm,
    /// Share popup.
    Share,
}

/// Key bound to an action, with the label shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key press that triggers the action.
    pub key: KeyEvent,
    /// Bound action.
    pub action: Action,
    /// Footer label.
    pub label: Cow<'static, str>,
}

impl Keybind {
    /// Creates a binding.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}
