use crate::core::types::*;
use crate::ports::messenger::Messenger;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Telegram Bot API over long polling.
///
/// Request URLs embed the bot token, so reqwest errors are stripped of
/// their URL before they reach a log line.
pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    poll_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Update {
    update_id: i64,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

impl TelegramClient {
    pub fn new(config: &Config) -> Result<Self> {
        // getUpdates holds the connection open for the whole poll timeout.
        let timeout = Duration::from_secs(config.poll_timeout_secs + config.http_timeout_secs);
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: format!("{}/bot{}", config.telegram_api_url, config.telegram_token),
            poll_timeout_secs: config.poll_timeout_secs,
        })
    }
}

fn unwrap_response<T>(resp: ApiResponse<T>, method: &str) -> Result<T> {
    if !resp.ok {
        anyhow::bail!(
            "Telegram {} failed: {}",
            method,
            resp.description.unwrap_or_else(|| "no description".into())
        );
    }
    resp.result
        .ok_or_else(|| anyhow::anyhow!("Telegram {} returned no result", method))
}

fn into_messages(updates: Vec<Update>) -> Vec<IncomingMessage> {
    updates
        .into_iter()
        .map(|u| match u.message {
            Some(m) => IncomingMessage {
                update_id: u.update_id,
                chat_id: m.chat.id,
                text: m.text,
            },
            // Non-message updates still advance the offset.
            None => IncomingMessage {
                update_id: u.update_id,
                chat_id: 0,
                text: None,
            },
        })
        .collect()
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn updates(&self, offset: Option<i64>) -> Result<Vec<IncomingMessage>> {
        let mut query = vec![
            ("timeout", self.poll_timeout_secs.to_string()),
            ("allowed_updates", r#"["message"]"#.to_string()),
        ];
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }

        let resp: ApiResponse<Vec<Update>> = self
            .client
            .get(format!("{}/getUpdates", self.base_url))
            .query(&query)
            .send()
            .await
            .map_err(|e| e.without_url())?
            .json()
            .await
            .map_err(|e| e.without_url())?;

        Ok(into_messages(unwrap_response(resp, "getUpdates")?))
    }

    async fn send(&self, chat_id: i64, text: &str) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });

        let resp: ApiResponse<serde_json::Value> = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| e.without_url())?
            .json()
            .await
            .map_err(|e| e.without_url())?;

        unwrap_response(resp, "sendMessage")?;
        Ok(())
    }
}
