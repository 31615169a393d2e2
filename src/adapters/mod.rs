pub mod airvisual;
pub mod nominatim;
pub mod open_elevation;
pub mod telegram;
pub mod weather;

use crate::core::types::Config;
use anyhow::Result;
use std::time::Duration;

/// Client shared by the lookup adapters.
pub fn http_client(config: &Config) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?)
}
