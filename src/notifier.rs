use anyhow::{Result, bail};
use serde_json::json;

use crate::TELEGRAM_API_BASE;

/// Sends notification messages to a Telegram chat via the Bot API.
pub struct TelegramNotifier {
    token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String, client: reqwest::Client) -> Self {
        Self {
            token,
            chat_id,
            client,
        }
    }

    /// Deliver one HTML-formatted message. Any non-200 response or
    /// transport failure is an error; the caller decides whether to care.
    pub async fn notify(&self, message: &str) -> Result<()> {
        let url = format!("{TELEGRAM_API_BASE}/bot{}/sendMessage", self.token);
        let resp = self
            .client
            .post(&url)
            .json(&json!({
                "text": message,
                "chat_id": self.chat_id,
                "parse_mode": "HTML",
            }))
            .send()
            .await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            bail!("telegram sendMessage returned {status}");
        }
        Ok(())
    }
}
