pub mod api;
pub mod codec;
pub mod config;
pub mod display;
pub mod mock;
pub mod placement;
pub mod reporter;
pub mod types;

/// Polymarket event page base; the raw condition id is appended as a path segment.
pub const POLYMARKET_EVENT_BASE: &str = "https://polymarket.com/event";

/// CoinGecko coin page base; the raw coin id is appended as a path segment.
pub const COINGECKO_COIN_BASE: &str = "https://www.coingecko.com/en/coins";

/// Platform API base URL used when the config does not set one.
pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";

/// Environment variable overriding the API base URL.
pub const API_BASE_VAR: &str = "MARKETID_API_BASE";
