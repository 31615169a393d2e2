use crate::core::types::CurrentWeather;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WeatherFeed: Send + Sync {
    async fn current(&self, lat: f64, lon: f64) -> Result<Option<CurrentWeather>>;
}
