use std::io::stdout;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crewlo::application::{LoadDashboardUseCase, ManageRecordsUseCase, ResourcePorts};
use crewlo::domain::{Entity, ResourcePort};
use crewlo::infrastructure::{
    ApiClient, AppConfig, CliArgs, InvoiceStore, StorageManager, SystemShare,
};
use crewlo::presentation::{App, BackendServices};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, Option<StorageManager>)> {
    // Lets CREWLO_BACKEND_URL come from a .env file.
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let storage = StorageManager::new().ok();
    let mut config = match &storage {
        Some(storage) => storage.load_config(args.config.as_deref())?,
        None => AppConfig::default(),
    };
    config.merge_with_args(args);

    Ok((config, storage))
}

fn http_port<E: Entity>(client: &ApiClient) -> Result<Arc<dyn ResourcePort<E>>> {
    let resource = client
        .resource::<E>()
        .ok_or_else(|| eyre!("{} have no API endpoint", E::KIND))?;
    Ok(Arc::new(resource))
}

fn create_services(config: &AppConfig) -> Result<BackendServices> {
    let client = ApiClient::new(&config.api_url)?;

    let ports = ResourcePorts {
        projects: http_port(&client)?,
        leads: http_port(&client)?,
        estimates: http_port(&client)?,
        materials: http_port(&client)?,
        proposals: http_port(&client)?,
        invoices: Arc::new(InvoiceStore::new()),
    };
    let dashboard = LoadDashboardUseCase::new(
        ports.projects.clone(),
        ports.leads.clone(),
        ports.estimates.clone(),
    );

    Ok(BackendServices {
        health: Arc::new(client),
        share: Arc::new(SystemShare::new()),
        dashboard,
        records: ManageRecordsUseCase::new(ports),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, storage) = load_config()?;
    init_logging(&config)?;
    if storage.is_none() {
        warn!("No config directory available, running with defaults");
    }

    info!(version = crewlo::VERSION, api_url = %config.api_url, "Starting Crewlo");

    let services = create_services(&config)?;
    let app = App::new(services, &config, storage);

    let mut terminal = ratatui::init();
    if config.mouse {
        crossterm::execute!(stdout(), EnableMouseCapture)?;
    }

    let result = app.run(&mut terminal).await;

    if config.mouse {
        crossterm::execute!(stdout(), DisableMouseCapture)?;
    }
    ratatui::restore();

    result
}
