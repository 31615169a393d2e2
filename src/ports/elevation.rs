use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ElevationFeed: Send + Sync {
    /// Meters above sea level.
    async fn elevation(&self, lat: f64, lon: f64) -> Result<Option<f64>>;
}
