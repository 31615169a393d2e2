use crate::core::types::*;
use crate::ports::air_quality::AirQualityFeed;
use anyhow::Result;
use async_trait::async_trait;

/// IQAir AirVisual `nearest_city` endpoint.
pub struct AirVisualClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AirVisualClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.airvisual_url.clone(),
            api_key: config.airvisual_api_key.clone(),
        }
    }
}

/// US AQI, pressure and humidity from a `nearest_city` payload.
/// Any missing field means the station has no usable reading.
fn parse_nearest(data: &serde_json::Value) -> Option<AirQuality> {
    if data["status"].as_str() != Some("success") {
        tracing::warn!("AirVisual status {}: {}", data["status"], data["data"]["message"]);
        return None;
    }

    let current = &data["data"]["current"];
    Some(AirQuality {
        aqi: current["pollution"]["aqius"].as_i64()?,
        pressure: current["weather"]["pr"].as_f64()?,
        humidity: current["weather"]["hu"].as_f64()?,
    })
}

#[async_trait]
impl AirQualityFeed for AirVisualClient {
    async fn nearest(&self, lat: f64, lon: f64) -> Result<Option<AirQuality>> {
        let resp = self
            .client
            .get(format!("{}/v2/nearest_city", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| e.without_url())?;

        // Failures come back as JSON with a non-2xx status, so parse either way.
        let data: serde_json::Value = resp.json().await.map_err(|e| e.without_url())?;
        Ok(parse_nearest(&data))
    }
}
