use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use polymarket_wallet_monitor::api::ACTIVITY_LIMIT;
use polymarket_wallet_monitor::cache::RecencyCache;
use polymarket_wallet_monitor::config::Config;
use polymarket_wallet_monitor::monitor;
use polymarket_wallet_monitor::notifier::TelegramNotifier;
use polymarket_wallet_monitor::wallets::read_wallets;

/// Timeout for every outbound HTTP request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A missing .env is fine; required vars may come from the environment.
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let wallets = read_wallets(Path::new(&config.wallets_file))?;
    if wallets.is_empty() {
        anyhow::bail!("wallet list {} is empty", config.wallets_file);
    }
    info!("Loaded {} wallet(s) from {}", wallets.len(), config.wallets_file);

    let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
    let notifier = TelegramNotifier::new(config.bot_token, config.chat_id, client.clone());
    let mut cache = RecencyCache::new(ACTIVITY_LIMIT);

    monitor::init(&client, &wallets, &mut cache).await?;
    monitor::run(&client, &notifier, &wallets, &mut cache).await;

    Ok(())
}
