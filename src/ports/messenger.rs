use crate::core::types::IncomingMessage;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Messenger: Send + Sync {
    /// Blocks until messages newer than `offset` arrive or the poll times out.
    async fn updates(&self, offset: Option<i64>) -> Result<Vec<IncomingMessage>>;
    async fn send(&self, chat_id: i64, text: &str) -> Result<()>;
}
