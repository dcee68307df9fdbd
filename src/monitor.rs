use std::time::Duration;

use anyhow::{Result, bail};
use tracing::{error, info};

use crate::api::{self, Activity};
use crate::cache::RecencyCache;
use crate::message;
use crate::notifier::TelegramNotifier;

/// Pause after a wallet's poll completes.
pub const POLL_DELAY: Duration = Duration::from_secs(5);

/// Pause after a failed fetch, longer than the normal delay.
pub const ERROR_DELAY: Duration = Duration::from_secs(15);

/// Seed the recency cache from each wallet's current activity so that
/// historical records never flood the chat on startup.
///
/// A wallet whose fetch fails is logged and skipped; it gets seeded later by
/// the run loop on its first successful fetch. Fails only if no wallet at
/// all could be fetched — then there is nothing meaningful to monitor.
pub async fn init(
    client: &reqwest::Client,
    wallets: &[String],
    cache: &mut RecencyCache,
) -> Result<()> {
    for wallet in wallets {
        match api::fetch_activity(client, wallet).await {
            Ok(activity) => {
                cache.seed(wallet, activity.into_iter().map(|a| a.transaction_hash));
            }
            Err(e) => {
                error!("Failed to fetch wallet {wallet} activity: {e:#}");
            }
        }
    }

    if cache.is_empty() {
        bail!("failed to initialize monitor: no wallet activity could be fetched");
    }
    info!(
        "Initialized successfully, {} wallet(s)",
        cache.wallet_count()
    );
    Ok(())
}

/// Diff one fetched batch against the cache and return the messages to
/// dispatch, in the batch's own order (most-recent-first per the fetcher's
/// contract).
///
/// Every unknown id is recorded whether or not it produced a message, so a
/// suppressed record (or a failed dispatch later on) is never revisited. A
/// wallet the cache has never seen is seeded from this batch instead of
/// being diffed — treating it as "all new" would replay its history.
pub fn collect_notifications(
    cache: &mut RecencyCache,
    wallet: &str,
    records: &[Activity],
) -> Vec<String> {
    if !cache.contains_wallet(wallet) {
        cache.seed(wallet, records.iter().map(|r| r.transaction_hash.clone()));
        return Vec::new();
    }

    let mut messages = Vec::new();
    for record in records {
        if cache.is_known(wallet, &record.transaction_hash) {
            continue;
        }
        if let Some(msg) = message::build_message(record) {
            messages.push(msg);
        }
        cache.record(wallet, record.transaction_hash.clone());
    }
    messages
}

/// One poll pass for a single wallet: fetch, diff, dispatch.
///
/// Dispatch failures are logged and swallowed — the record is already marked
/// seen and will not be retried. A fetch failure propagates so the caller
/// can back off; the wallet's cache is left untouched in that case.
async fn poll_wallet(
    client: &reqwest::Client,
    notifier: &TelegramNotifier,
    cache: &mut RecencyCache,
    wallet: &str,
) -> Result<()> {
    let records = api::fetch_activity(client, wallet).await?;
    let messages = collect_notifications(cache, wallet, &records);
    if !messages.is_empty() {
        info!("Wallet {wallet}: {} new notification(s)", messages.len());
    }
    for msg in &messages {
        if let Err(e) = notifier.notify(msg).await {
            error!("Error while sending message to telegram: {e:#}");
        }
    }
    Ok(())
}

/// Main monitoring loop: visit every wallet in order, forever, one blocking
/// poll at a time. Returns only on shutdown signal.
pub async fn run(
    client: &reqwest::Client,
    notifier: &TelegramNotifier,
    wallets: &[String],
    cache: &mut RecencyCache,
) {
    info!(
        "Entering polling loop over {} wallet(s) (poll: {:?}, error backoff: {:?}). Press Ctrl+C to stop.",
        wallets.len(),
        POLL_DELAY,
        ERROR_DELAY,
    );

    loop {
        for wallet in wallets {
            let delay = match poll_wallet(client, notifier, cache, wallet).await {
                Ok(()) => POLL_DELAY,
                Err(e) => {
                    error!(
                        "Error while polling wallet {wallet}: {e:#} | backing off {ERROR_DELAY:?}"
                    );
                    ERROR_DELAY
                }
            };
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}
