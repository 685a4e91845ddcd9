use std::path::PathBuf;

use hotel_admin::model::{AdminConfig, DEFAULT_BASE_URL};
use hotel_admin::store::ConfigStore;

use super::*;

pub(super) fn handle_init_command(
    force: bool,
    path: Option<PathBuf>,
    url: Option<String>,
) -> Result<()> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir().context("get current dir")?,
    };
    if let Some(u) = url.as_deref() {
        RemoteClient::new(u)?;
    }
    let cfg = AdminConfig {
        base_url: url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        ..AdminConfig::default()
    };
    let store = ConfigStore::init(&root, &cfg, force)?;
    println!("Initialized hotel-admin config at {}", store.root().display());
    Ok(())
}

pub(super) fn handle_config_command(
    session: &Session,
    command: ConfigCommands,
    url: Option<&str>,
) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            if json {
                let out = serde_json::json!({
                    "config": session.store.as_ref().map(|_| &session.config),
                    "effective_base_url": session.base_url,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&out).context("serialize config json")?
                );
            } else {
                match &session.store {
                    Some(store) => println!("config: {}", store.root().join("config.json").display()),
                    None => println!("config: (none, using defaults)"),
                }
                println!("base_url: {}", session.base_url);
                println!("verified_only: {}", session.config.verified_only);
            }
        }
        ConfigCommands::Set { verified_only } => {
            let store = require_store(session)?;
            if url.is_none() && verified_only.is_none() {
                anyhow::bail!("nothing to set (use --url and/or --verified-only)");
            }
            let mut cfg = store.read_config()?;
            if let Some(u) = url {
                RemoteClient::new(u)?;
                cfg.base_url = u.trim().to_string();
            }
            if let Some(v) = verified_only {
                cfg.verified_only = v;
            }
            store.write_config(&cfg)?;
            println!("Config updated");
        }
    }
    Ok(())
}
