use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// External platform a raw market identifier belongs to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Polymarket,
    CoinGecko,
}

impl DataSource {
    pub const ALL: [DataSource; 2] = [DataSource::Polymarket, DataSource::CoinGecko];

    /// Canonical lowercase tag used in encoded identifiers.
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Polymarket => "polymarket",
            DataSource::CoinGecko => "coingecko",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a market's outcome gets settled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMethod {
    /// Human/keeper vote.
    #[default]
    Keeper,
    /// Automatic rule-based resolution.
    Deterministic,
}

impl ResolutionMethod {
    pub const ALL: [ResolutionMethod; 2] =
        [ResolutionMethod::Keeper, ResolutionMethod::Deterministic];

    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionMethod::Keeper => "keeper",
            ResolutionMethod::Deterministic => "deterministic",
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A market identifier split into its source, resolution method and raw id.
///
/// Always produced by [`crate::codec::parse_market_id`]; never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMarketId {
    pub data_source: DataSource,
    pub resolution_method: ResolutionMethod,
    /// Platform-native identifier. May itself contain `:`.
    pub raw_id: String,
    /// String form that reproduces this record when parsed again.
    pub full_encoded: String,
}

/// Static presentation metadata for a source or resolution method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub label: &'static str,
    pub icon: &'static str,
    /// Background classes (light and dark theme).
    pub bg_color: &'static str,
    /// Text classes (light and dark theme).
    pub text_color: &'static str,
}

/// Position indicator as it arrives from upstream: a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PositionInput {
    Number(f64),
    Text(String),
}

impl From<i64> for PositionInput {
    fn from(v: i64) -> Self {
        PositionInput::Number(v as f64)
    }
}

impl From<i32> for PositionInput {
    fn from(v: i32) -> Self {
        PositionInput::Number(f64::from(v))
    }
}

impl From<f64> for PositionInput {
    fn from(v: f64) -> Self {
        PositionInput::Number(v)
    }
}

impl From<&str> for PositionInput {
    fn from(v: &str) -> Self {
        PositionInput::Text(v.to_string())
    }
}

impl From<String> for PositionInput {
    fn from(v: String) -> Self {
        PositionInput::Text(v)
    }
}

// ── Bet data ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Pending,
    Matched,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetOutcome {
    Won,
    Lost,
}

/// A single bet placed by a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    /// Market identifier, canonical or legacy.
    pub id: String,
    /// Number of markets in the bet's portfolio.
    pub portfolio_size: u32,
    /// Wagered amount in USD.
    pub amount: Decimal,
    /// Signed profit/loss in USD.
    pub pnl: Decimal,
    pub status: BetStatus,
    /// Only present once the bet is settled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<BetOutcome>,
    pub created_at: DateTime<Utc>,
}

/// A page of bets plus the total number the wallet has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetsPage {
    pub bets: Vec<BetRecord>,
    pub total: u64,
}

// ── Bet placement ──────────────────────────────────────────────────

/// A request to place a bet on a market.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRequest {
    pub market_id: String,
    pub amount: Decimal,
    pub position: u8,
}

/// Outcome of a successful placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReceipt {
    pub tx_hash: String,
    pub bet_id: String,
}
