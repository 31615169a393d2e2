use crate::core::types::Place;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for a free-text place name, `None` if nothing matched.
    async fn locate(&self, query: &str) -> Result<Option<Place>>;
}
