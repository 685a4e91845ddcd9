use anyhow::{Context, Result};

use crate::model::{Hotel, HotelId};

mod api;
pub use self::api::HotelApi;

mod http_client;

mod types;
pub use self::types::*;
mod operations;

/// Blocking client for the hotel backend.
///
/// No retries and no client-side timeout: a request runs until the server
/// answers or the connection fails.
pub struct RemoteClient {
    base_url: reqwest::Url,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = reqwest::Url::parse(base_url.trim())
            .with_context(|| format!("parse base url `{}`", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("base url `{}` cannot carry a path", base_url);
        }
        let client = reqwest::blocking::Client::builder()
            .user_agent("hotel-admin")
            .build()
            .context("build reqwest client")?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}
