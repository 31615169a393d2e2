use crate::core::types::*;
use crate::ports::geocoder::Geocoder;
use anyhow::Result;
use async_trait::async_trait;

/// OpenStreetMap Nominatim search. Nominatim rejects requests without a
/// User-Agent, which the shared client sets.
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.nominatim_url.clone(),
        }
    }
}

/// First hit of a search response. Nominatim sends coordinates as strings.
fn parse_first_hit(data: &serde_json::Value) -> Result<Option<Place>> {
    let Some(hit) = data.as_array().and_then(|hits| hits.first()) else {
        return Ok(None);
    };

    let coord = |key: &str| -> Result<f64> {
        let raw = &hit[key];
        raw.as_str()
            .and_then(|s| s.parse().ok())
            .or_else(|| raw.as_f64())
            .ok_or_else(|| anyhow::anyhow!("Nominatim hit has no usable {}", key))
    };

    let display_name = hit["name"]
        .as_str()
        .filter(|n| !n.is_empty())
        .or_else(|| hit["display_name"].as_str())
        .unwrap_or_default()
        .to_string();

    Ok(Some(Place {
        latitude: coord("lat")?,
        longitude: coord("lon")?,
        display_name,
    }))
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn locate(&self, query: &str) -> Result<Option<Place>> {
        let resp = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("Nominatim search -> {}", resp.status());
        }

        let data: serde_json::Value = resp.json().await?;
        parse_first_hit(&data)
    }
}
