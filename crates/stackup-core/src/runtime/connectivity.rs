//! Package registry connectivity probe

use crate::product::GeneratorConfig;
use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// How long to wait for the registry before assuming offline
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Registry URL from the environment override or the product default
pub fn registry_url<C: GeneratorConfig>(config: &C) -> Result<Url> {
    let url_str = std::env::var(config.registry_url_env())
        .unwrap_or_else(|_| config.default_registry_url().to_string());
    Url::parse(&url_str).with_context(|| format!("Invalid registry URL: {}", url_str))
}

/// True if the registry answers within `timeout`.
///
/// Any HTTP response counts; only transport failures mean offline.
pub async fn probe_registry(url: &Url, user_agent: &str, timeout: Duration) -> bool {
    let client = match reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
    {
        Ok(client) => client,
        Err(_) => return false,
    };

    client.head(url.clone()).send().await.is_ok()
}
