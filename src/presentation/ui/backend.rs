use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::dto::{DashboardStats, RecordForm, RecordSet, ShareMessage};
use crate::application::use_cases::{LoadDashboardUseCase, ManageRecordsUseCase};
use crate::domain::entities::ResourceKind;
use crate::domain::ports::{HealthPort, ServiceInfo, SharePort};

/// How a share message leaves the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    /// `mailto:` link.
    Email,
    /// `sms:` link.
    Sms,
    /// Plain text on the system clipboard.
    Clipboard,
}

impl ShareChannel {
    /// Name used in notifications.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "SMS",
            Self::Clipboard => "clipboard",
        }
    }
}

/// Results reported back to the UI loop.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum BackendEvent {
    ApiOnline(ServiceInfo),
    ApiOffline(String),
    DashboardLoaded(DashboardStats),
    DashboardLoadError(String),
    RecordsLoaded(RecordSet),
    RecordsLoadError {
        kind: ResourceKind,
        error: String,
    },
    RecordSaved {
        kind: ResourceKind,
        updated: bool,
    },
    RecordSaveError {
        kind: ResourceKind,
        error: String,
    },
    RecordDeleted {
        kind: ResourceKind,
        id: String,
    },
    RecordDeleteError {
        kind: ResourceKind,
        error: String,
    },
    Shared(ShareChannel),
    ShareFailed {
        channel: ShareChannel,
        error: String,
    },
}

/// Work the UI loop hands to the backend worker.
#[allow(missing_docs)]
pub enum BackendCommand {
    CheckHealth,
    LoadDashboard,
    LoadRecords(ResourceKind),
    SaveRecord {
        kind: ResourceKind,
        id: Option<String>,
        form: RecordForm,
    },
    DeleteRecord {
        kind: ResourceKind,
        id: String,
    },
    Share {
        message: ShareMessage,
        channel: ShareChannel,
    },
}

/// Services the backend worker drives.
#[derive(Clone)]
pub struct BackendServices {
    /// API reachability check.
    pub health: Arc<dyn HealthPort>,
    /// Email, SMS and clipboard hand-off.
    pub share: Arc<dyn SharePort>,
    /// Dashboard loader.
    pub dashboard: LoadDashboardUseCase,
    /// CRUD for every resource kind.
    pub records: ManageRecordsUseCase,
}

/// Runs commands one at a time and reports each outcome as a [`BackendEvent`].
pub struct Backend {
    services: BackendServices,
    command_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
}

impl Backend {
    /// Creates a worker reading `command_rx` and answering on `event_tx`.
    pub fn new(
        services: BackendServices,
        command_rx: mpsc::UnboundedReceiver<BackendCommand>,
        event_tx: mpsc::UnboundedSender<BackendEvent>,
    ) -> Self {
        Self {
            services,
            command_rx,
            event_tx,
        }
    }

    /// Processes commands until either channel closes.
    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(command) = self.command_rx.recv().await {
            let event = self.handle_command(command).await;
            if self.event_tx.send(event).is_err() {
                break;
            }
        }
        info!("Backend worker stopped");
    }

    async fn handle_command(&self, command: BackendCommand) -> BackendEvent {
        match command {
            BackendCommand::CheckHealth => match self.services.health.check().await {
                Ok(info) => {
                    info!(service = %info.message, version = %info.version, "API reachable");
                    BackendEvent::ApiOnline(info)
                }
                Err(e) => {
                    warn!(error = %e, "API health check failed");
                    BackendEvent::ApiOffline(e.to_string())
                }
            },
            BackendCommand::LoadDashboard => match self.services.dashboard.execute().await {
                Ok(stats) => BackendEvent::DashboardLoaded(stats),
                Err(e) => BackendEvent::DashboardLoadError(e.to_string()),
            },
            BackendCommand::LoadRecords(kind) => match self.services.records.load(kind).await {
                Ok(set) => BackendEvent::RecordsLoaded(set),
                Err(e) => BackendEvent::RecordsLoadError {
                    kind,
                    error: e.to_string(),
                },
            },
            BackendCommand::SaveRecord { kind, id, form } => {
                match self.services.records.save(kind, id.as_deref(), &form).await {
                    Ok(()) => BackendEvent::RecordSaved {
                        kind,
                        updated: id.is_some(),
                    },
                    Err(e) => BackendEvent::RecordSaveError {
                        kind,
                        error: e.to_string(),
                    },
                }
            }
            BackendCommand::DeleteRecord { kind, id } => {
                match self.services.records.delete(kind, &id).await {
                    Ok(()) => BackendEvent::RecordDeleted { kind, id },
                    Err(e) => BackendEvent::RecordDeleteError {
                        kind,
                        error: e.to_string(),
                    },
                }
            }
            BackendCommand::Share { message, channel } => {
                let result = match channel {
                    ShareChannel::Email => self.services.share.open_uri(&message.mailto_uri()).await,
                    ShareChannel::Sms => self.services.share.open_uri(&message.sms_uri()).await,
                    ShareChannel::Clipboard => {
                        self.services.share.copy_text(&message.clipboard).await
                    }
                };
                match result {
                    Ok(()) => {
                        debug!(channel = channel.label(), "Share handed off");
                        BackendEvent::Shared(channel)
                    }
                    Err(e) => {
                        warn!(channel = channel.label(), error = %e, "Share failed");
                        BackendEvent::ShareFailed {
                            channel,
                            error: e.to_string(),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::blank_form;
    use crate::application::use_cases::ResourcePorts;
    use crate::domain::ShareError;
    use crate::domain::entities::{Estimate, Invoice, Lead, Material, Project, Proposal};
    use crate::domain::ports::mocks::InMemoryResourcePort;
    use crate::domain::ports::{MockHealthPort, MockSharePort};

    fn services(share: MockSharePort, health: MockHealthPort) -> BackendServices {
        let projects = Arc::new(InMemoryResourcePort::<Project>::new(Vec::new()));
        let leads = Arc::new(InMemoryResourcePort::<Lead>::new(Vec::new()));
        let estimates = Arc::new(InMemoryResourcePort::<Estimate>::new(Vec::new()));
        let ports = ResourcePorts {
            projects: projects.clone(),
            leads: leads.clone(),
            estimates: estimates.clone(),
            materials: Arc::new(InMemoryResourcePort::<Material>::new(Vec::new())),
            proposals: Arc::new(InMemoryResourcePort::<Proposal>::new(Vec::new())),
            invoices: Arc::new(InMemoryResourcePort::<Invoice>::failing()),
        };
        BackendServices {
            health: Arc::new(health),
            share: Arc::new(share),
            dashboard: LoadDashboardUseCase::new(projects, leads, estimates),
            records: ManageRecordsUseCase::new(ports),
        }
    }

    fn message() -> ShareMessage {
        ShareMessage {
            label: "Invoice INV-1".into(),
            email_to: Some("a@b.co".into()),
            email_subject: "Invoice INV-1".into(),
            email_body: "Hello".into(),
            sms: "Invoice INV-1 is ready".into(),
            clipboard: "Invoice: INV-1".into(),
        }
    }

    async fn run_one(services: BackendServices, command: BackendCommand) -> BackendEvent {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(Backend::new(services, command_rx, event_tx).run());

        command_tx.send(command).unwrap();
        let event = event_rx.recv().await.unwrap();
        drop(command_tx);
        worker.await.unwrap();
        event
    }

    #[tokio::test]
    async fn test_clipboard_share_copies_clipboard_text() {
        let mut share = MockSharePort::new();
        share
            .expect_copy_text()
            .withf(|text| text == "Invoice: INV-1")
            .times(1)
            .returning(|_| Ok(()));

        let event = run_one(
            services(share, MockHealthPort::new()),
            BackendCommand::Share {
                message: message(),
                channel: ShareChannel::Clipboard,
            },
        )
        .await;

        assert!(matches!(event, BackendEvent::Shared(ShareChannel::Clipboard)));
    }

    #[tokio::test]
    async fn test_email_share_opens_mailto() {
        let mut share = MockSharePort::new();
        share
            .expect_open_uri()
            .withf(|uri| uri.starts_with("mailto:a@b.co?subject="))
            .times(1)
            .returning(|_| Ok(()));

        let event = run_one(
            services(share, MockHealthPort::new()),
            BackendCommand::Share {
                message: message(),
                channel: ShareChannel::Email,
            },
        )
        .await;

        assert!(matches!(event, BackendEvent::Shared(ShareChannel::Email)));
    }

    #[tokio::test]
    async fn test_share_failure_is_reported() {
        let mut share = MockSharePort::new();
        share
            .expect_open_uri()
            .returning(|uri| {
                Err(ShareError::Launch {
                    uri: uri.to_string(),
                    message: "no handler".into(),
                })
            });

        let event = run_one(
            services(share, MockHealthPort::new()),
            BackendCommand::Share {
                message: message(),
                channel: ShareChannel::Sms,
            },
        )
        .await;

        match event {
            BackendEvent::ShareFailed { channel, error } => {
                assert_eq!(channel, ShareChannel::Sms);
                assert!(error.contains("no handler"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_health_check_reports_banner() {
        let mut health = MockHealthPort::new();
        health.expect_check().returning(|| {
            Ok(ServiceInfo {
                message: "Crewlo API".into(),
                version: "1.0.0".into(),
            })
        });

        let event = run_one(
            services(MockSharePort::new(), health),
            BackendCommand::CheckHealth,
        )
        .await;

        assert!(matches!(event, BackendEvent::ApiOnline(info) if info.version == "1.0.0"));
    }

    #[tokio::test]
    async fn test_dashboard_over_empty_collections() {
        let event = run_one(
            services(MockSharePort::new(), MockHealthPort::new()),
            BackendCommand::LoadDashboard,
        )
        .await;

        assert!(matches!(event, BackendEvent::DashboardLoaded(stats) if stats.total_projects == 0));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_kind() {
        let event = run_one(
            services(MockSharePort::new(), MockHealthPort::new()),
            BackendCommand::SaveRecord {
                kind: ResourceKind::Invoices,
                id: None,
                form: blank_form(ResourceKind::Invoices),
            },
        )
        .await;

        assert!(matches!(
            event,
            BackendEvent::RecordSaveError {
                kind: ResourceKind::Invoices,
                ..
            }
        ));
    }
}
