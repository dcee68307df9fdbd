use anyhow::{Result, bail};

/// Default wallet list path, relative to the working directory.
pub const WALLETS_PATH: &str = "wallets.txt";

/// Runtime configuration, read from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token.
    pub bot_token: String,
    /// Destination Telegram chat id.
    pub chat_id: String,
    /// Path to the newline-delimited wallet list.
    pub wallets_file: String,
}

impl Config {
    /// Load config from the environment, after `dotenvy` has had a chance
    /// to populate it from a `.env` file. Missing or empty required values
    /// are fatal.
    pub fn from_env() -> Result<Self> {
        Self::build(
            env_var("TG_BOT_TOKEN"),
            env_var("CHAT_ID"),
            env_var("WALLETS_FILE"),
        )
    }

    /// Validate raw config values. Values are trimmed; the required token
    /// and chat id must be non-empty, the wallet file path defaults to
    /// [`WALLETS_PATH`].
    fn build(bot_token: String, chat_id: String, wallets_file: String) -> Result<Self> {
        let bot_token = bot_token.trim().to_string();
        let chat_id = chat_id.trim().to_string();
        if bot_token.is_empty() || chat_id.is_empty() {
            bail!("TG_BOT_TOKEN or CHAT_ID is empty");
        }

        let wallets_file = match wallets_file.trim() {
            "" => WALLETS_PATH.to_string(),
            path => path.to_string(),
        };

        Ok(Self {
            bot_token,
            chat_id,
            wallets_file,
        })
    }
}

fn env_var(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}
