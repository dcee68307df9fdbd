pub mod api;
pub mod cache;
pub mod config;
pub mod message;
pub mod monitor;
pub mod notifier;
pub mod wallets;

/// Polymarket data API base URL (public, no auth required)
pub const DATA_API_BASE: &str = "https://data-api.polymarket.com";

/// Public market page base URL (event + market slugs appended)
pub const EVENT_URL: &str = "https://polymarket.com/event";

/// Public profile page base URL (display name appended)
pub const PROFILE_URL: &str = "https://polymarket.com/@";

/// Telegram Bot API base URL (bot token appended)
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
