use serde::{Deserialize, Serialize};

use crate::domain::ResourceKind;

/// Screen identifier persisted between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "screen", content = "kind")]
pub enum LastScreen {
    /// Dashboard.
    #[default]
    Dashboard,
    /// A resource list.
    Records(ResourceKind),
}

/// Session state configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Screen that was open on exit.
    #[serde(default)]
    pub last_screen: LastScreen,
}
