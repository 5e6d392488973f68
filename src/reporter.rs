use serde::Serialize;

use crate::display::{get_market_url, get_resolution_badge, get_source_badge};
use crate::types::{Badge, BetsPage, ParsedMarketId};

/// A parsed identifier together with everything derived from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketReport<'a> {
    #[serde(flatten)]
    pub parsed: &'a ParsedMarketId,
    pub url: String,
    pub source_badge: Badge,
    pub resolution_badge: Badge,
}

impl<'a> MarketReport<'a> {
    pub fn new(parsed: &'a ParsedMarketId) -> Self {
        Self {
            parsed,
            url: get_market_url(parsed),
            source_badge: get_source_badge(parsed.data_source),
            resolution_badge: get_resolution_badge(parsed.resolution_method),
        }
    }
}

/// Emit a parsed market as a single JSON line to stdout.
pub fn report_market(parsed: &ParsedMarketId) {
    if let Ok(json) = serde_json::to_string(&MarketReport::new(parsed)) {
        println!("{json}");
    }
}

/// Emit a bets page as pretty-printed JSON to stdout.
pub fn report_bets(page: &BetsPage) {
    if let Ok(json) = serde_json::to_string_pretty(page) {
        println!("{json}");
    }
}
