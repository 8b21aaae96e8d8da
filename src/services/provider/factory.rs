//! Factory: build the provider client from application `Config`.
use std::sync::Arc;

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, Secret};

use crate::config::Config;
use crate::services::provider::GoTrueClient;

pub fn build_provider(config: &Config) -> Result<Arc<GoTrueClient>> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build auth provider http client")?;

    let client = GoTrueClient::new(
        config.supabase_url.clone(),
        Secret::new(config.service_role_key.expose_secret().clone()),
        http_client,
    );

    Ok(Arc::new(client))
}
