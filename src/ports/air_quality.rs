use crate::core::types::AirQuality;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AirQualityFeed: Send + Sync {
    /// Reading from the monitoring station closest to the coordinates.
    async fn nearest(&self, lat: f64, lon: f64) -> Result<Option<AirQuality>>;
}
