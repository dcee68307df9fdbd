use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::DATA_API_BASE;

/// Number of activity records requested per fetch. The recency cache uses
/// the same value as its per-wallet capacity.
pub const ACTIVITY_LIMIT: usize = 20;

/// One on-chain activity record from the data API activity feed.
///
/// `transaction_hash` uniquely identifies a record within a wallet's feed
/// and is the sole key used for deduplication.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Record kind, e.g. "TRADE" or "REWARD".
    #[serde(rename = "type", default)]
    pub activity_type: String,
    /// Shares/units traded.
    #[serde(default)]
    pub size: f64,
    /// USD-denominated trade size.
    #[serde(default)]
    pub usdc_size: f64,
    /// Probability-style price in [0, 1].
    #[serde(default)]
    pub price: f64,
    /// "BUY" or "SELL"; empty for non-trade records.
    #[serde(default)]
    pub side: String,
    /// Market title.
    #[serde(default)]
    pub title: String,
    /// Market slug.
    #[serde(default)]
    pub slug: String,
    /// Event slug.
    #[serde(default)]
    pub event_slug: String,
    /// Outcome bought/sold, e.g. "Yes".
    #[serde(default)]
    pub outcome: String,
    /// Wallet owner display name.
    #[serde(default)]
    pub name: String,
    /// Unique transaction hash — dedup key.
    #[serde(default)]
    pub transaction_hash: String,
}

/// Fetch the most recent [`ACTIVITY_LIMIT`] activity records for a wallet.
///
/// Precondition the monitor relies on: the API returns records sorted by
/// timestamp descending (most-recent-first). Should upstream ever change
/// that ordering, the diff pass in `monitor` must sort by timestamp itself.
///
/// Does not retry — retry/backoff policy belongs to the caller.
pub async fn fetch_activity(client: &reqwest::Client, wallet: &str) -> Result<Vec<Activity>> {
    let url = format!(
        "{DATA_API_BASE}/activity?limit={ACTIVITY_LIMIT}&sortBy=TIMESTAMP&sortDirection=DESC&user={wallet}"
    );
    let activity: Vec<Activity> = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("activity request failed for wallet {wallet}"))?
        .error_for_status()
        .with_context(|| format!("activity request rejected for wallet {wallet}"))?
        .json()
        .await
        .with_context(|| format!("failed to decode activity for wallet {wallet}"))?;
    debug!("Fetched {} activity records for {wallet}", activity.len());
    Ok(activity)
}
