use anyhow::{Context, Result};
use clap::Parser;

use hotel_admin::console::Console;
use hotel_admin::model::AdminConfig;
use hotel_admin::remote::RemoteClient;
use hotel_admin::store::{ConfigStore, URL_ENV, resolve_base_url};

use crate::Commands;

#[derive(Parser)]
#[command(name = "hotel-admin")]
#[command(about = "Operator console for the hotel listing backend", long_about = None)]
pub(crate) struct Cli {
    /// Backend base url (overrides HOTEL_ADMIN_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let session = load_session(cli.url.as_deref())?;
            let log_path = session.store.as_ref().map(|s| s.log_path());
            hotel_admin::logging::init_tui(log_path.as_deref())?;
            hotel_admin::tui::run_with_options(hotel_admin::tui::TuiRunOptions {
                base_url: session.base_url,
                verified_only: session.config.verified_only,
            })?;
        }
        Some(command) => {
            hotel_admin::logging::init_cli()?;
            crate::cli_exec::handle_command(command, cli.url)?
        }
    }

    Ok(())
}

/// Settings in effect for one invocation.
pub(crate) struct Session {
    pub(crate) store: Option<ConfigStore>,
    pub(crate) config: AdminConfig,
    pub(crate) base_url: String,
}

impl Session {
    pub(crate) fn client(&self) -> Result<RemoteClient> {
        RemoteClient::new(&self.base_url)
    }

    pub(crate) fn console(&self) -> Result<Console<RemoteClient>> {
        Ok(Console::new(self.client()?, self.config.verified_only))
    }
}

pub(crate) fn load_session(url: Option<&str>) -> Result<Session> {
    let cwd = std::env::current_dir().context("get current dir")?;
    let store = ConfigStore::discover(&cwd)?;
    let config = match &store {
        Some(s) => s.read_config()?,
        None => AdminConfig::default(),
    };
    let env = std::env::var(URL_ENV).ok();
    let base_url = resolve_base_url(url, env.as_deref(), store.as_ref().map(|_| &config));
    tracing::debug!(base_url = %base_url, "session loaded");
    Ok(Session {
        store,
        config,
        base_url,
    })
}

pub(crate) fn require_store(session: &Session) -> Result<&ConfigStore> {
    session
        .store
        .as_ref()
        .context("no .hotel-admin directory found (run `hotel-admin init`)")
}
