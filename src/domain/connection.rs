/// Reachability of the API backend, as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No health check has answered yet.
    #[default]
    Checking,
    /// The last health check succeeded.
    Online,
    /// The last health check failed.
    Offline,
}

impl ConnectionStatus {
    /// Lowercase label for the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}
