use anyhow::{Error, Result};
use bellory_admin::{
    clients::{
        api::AdminApiClient, session::SessionStore, storage::LocalStorage, theme::ThemeStore,
    },
    config::{Config, LogFormat},
    format::{format_currency, format_number},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;

    init_tracing(config.log_format);

    let storage = LocalStorage::open(&config.storage_dir)?;
    let session = SessionStore::load(storage.clone())?;
    let theme = ThemeStore::load(storage, config.prefers_dark_theme)?;

    info!(theme = theme.theme().as_str(), "Admin console starting");

    let mut client = AdminApiClient::new(&config, session.clone())?;

    if !session.is_authenticated() {
        match (&config.admin_username, &config.admin_password) {
            (Some(username), Some(password)) => {
                client.login(username, password).await?;
            }
            _ => {
                warn!("No stored session and no admin credentials configured");
                return Ok(());
            }
        }
    }

    let dashboard = client.dashboard().await?;

    info!(
        organizations = %format_number(dashboard.total_organizations as f64),
        active = %format_number(dashboard.active_organizations as f64),
        appointments = %format_number(dashboard.total_appointments as f64),
        revenue = %format_currency(dashboard.total_revenue),
        "Dashboard loaded"
    );

    Ok(())
}
