use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{AdminConfig, DEFAULT_BASE_URL};

const STORE_DIR: &str = ".hotel-admin";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "hotel-admin.log";

pub const URL_ENV: &str = "HOTEL_ADMIN_URL";

/// The `.hotel-admin` directory: persisted console settings and the TUI log.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn store_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(project_root: &Path) -> Result<Self> {
        let root = Self::store_dir(project_root);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `hotel-admin init`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self { root })
    }

    pub fn init(project_root: &Path, cfg: &AdminConfig, force: bool) -> Result<Self> {
        let root = Self::store_dir(project_root);
        if root.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                root.display()
            ));
        }
        fs::create_dir_all(&root).with_context(|| format!("create {}", root.display()))?;
        let store = Self { root };
        store.write_config(cfg)?;
        Ok(store)
    }

    /// Walks up from `start` to the nearest directory holding a store.
    pub fn discover(start: &Path) -> Result<Option<Self>> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::store_dir(dir).is_dir() {
                return Self::open(dir).map(Some);
            }
        }
        Ok(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }

    pub fn read_config(&self) -> Result<AdminConfig> {
        let path = self.root.join(CONFIG_FILE);
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let cfg: AdminConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &AdminConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join(CONFIG_FILE), &bytes).context("write config.json")?;
        Ok(())
    }
}

/// Base url precedence: flag, then environment, then config file, then the
/// built-in default.
pub fn resolve_base_url(
    flag: Option<&str>,
    env: Option<&str>,
    cfg: Option<&AdminConfig>,
) -> String {
    let non_empty = |s: &&str| !s.trim().is_empty();
    flag.filter(non_empty)
        .or_else(|| env.filter(non_empty))
        .or_else(|| cfg.map(|c| c.base_url.as_str()).filter(non_empty))
        .unwrap_or(DEFAULT_BASE_URL)
        .trim()
        .to_string()
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
