use crate::core::types::*;
use crate::ports::elevation::ElevationFeed;
use anyhow::Result;
use async_trait::async_trait;

pub struct OpenElevationClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenElevationClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.open_elevation_url.clone(),
        }
    }
}

fn parse_elevation(data: &serde_json::Value) -> Option<f64> {
    data["results"].as_array()?.first()?["elevation"].as_f64()
}

#[async_trait]
impl ElevationFeed for OpenElevationClient {
    async fn elevation(&self, lat: f64, lon: f64) -> Result<Option<f64>> {
        let resp = self
            .client
            .get(format!("{}/api/v1/lookup", self.base_url))
            .query(&[("locations", format!("{},{}", lat, lon))])
            .send()
            .await?;

        if !resp.status().is_success() {
            tracing::warn!("Open-Elevation lookup -> {}", resp.status());
            return Ok(None);
        }

        let data: serde_json::Value = resp.json().await?;
        Ok(parse_elevation(&data))
    }
}
