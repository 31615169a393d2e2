use crate::core::types::*;
use crate::ports::weather_feed::WeatherFeed;
use anyhow::Result;
use async_trait::async_trait;

/// Open-Meteo current conditions.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.open_meteo_url.clone(),
        }
    }
}

fn parse_current(data: &serde_json::Value) -> Result<Option<CurrentWeather>> {
    match data.get("current_weather") {
        Some(current) => Ok(Some(serde_json::from_value(current.clone())?)),
        None => Ok(None),
    }
}

#[async_trait]
impl WeatherFeed for WeatherClient {
    async fn current(&self, lat: f64, lon: f64) -> Result<Option<CurrentWeather>> {
        let resp = self
            .client
            .get(format!("{}/v1/forecast", self.base_url))
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            tracing::warn!("Open-Meteo forecast -> {}", resp.status());
            return Ok(None);
        }

        let data: serde_json::Value = resp.json().await?;
        parse_current(&data)
    }
}
