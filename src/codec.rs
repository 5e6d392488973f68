use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::types::{DataSource, ParsedMarketId, ResolutionMethod};

/// Separator between the source, resolution method and raw id fields.
pub const DELIMITER: char = ':';

/// Map a source tag to a `DataSource`, case-insensitively.
///
/// Anything unrecognized (typos, empty string, unrelated text) resolves to
/// `Polymarket`.
pub fn parse_data_source(tag: &str) -> DataSource {
    if tag.eq_ignore_ascii_case("coingecko") {
        DataSource::CoinGecko
    } else {
        if !tag.eq_ignore_ascii_case("polymarket") {
            trace!("Unrecognized data source {tag:?}, defaulting to polymarket");
        }
        DataSource::Polymarket
    }
}

/// Map a resolution tag to a `ResolutionMethod`, case-insensitively.
///
/// Anything unrecognized resolves to `Keeper`.
pub fn parse_resolution_method(tag: &str) -> ResolutionMethod {
    if tag.eq_ignore_ascii_case("deterministic") {
        ResolutionMethod::Deterministic
    } else {
        if !tag.eq_ignore_ascii_case("keeper") {
            trace!("Unrecognized resolution method {tag:?}, defaulting to keeper");
        }
        ResolutionMethod::Keeper
    }
}

/// Build the canonical `source:method:raw_id` string.
///
/// `raw_id` is not checked for the delimiter; parsing rejoins trailing
/// segments so colons inside it survive a round trip.
pub fn encode_market_id(source: DataSource, method: ResolutionMethod, raw_id: &str) -> String {
    format!("{source}{DELIMITER}{method}{DELIMITER}{raw_id}")
}

/// Parse a market identifier. Never fails.
///
/// Three or more `:`-separated segments are read as `source:method:raw_id`,
/// with every segment past the second belonging to `raw_id`; the input is kept
/// verbatim as `full_encoded`. Anything shorter is a legacy bare id and is
/// assumed to be a Polymarket keeper market, with `full_encoded` set to its
/// canonical form.
pub fn parse_market_id(market_id: &str) -> ParsedMarketId {
    let mut parts = market_id.splitn(3, DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(source), Some(method), Some(raw_id)) => ParsedMarketId {
            data_source: parse_data_source(source),
            resolution_method: parse_resolution_method(method),
            raw_id: raw_id.to_string(),
            full_encoded: market_id.to_string(),
        },
        _ => {
            trace!("Legacy market id {market_id:?}");
            ParsedMarketId {
                data_source: DataSource::Polymarket,
                resolution_method: ResolutionMethod::Keeper,
                raw_id: market_id.to_string(),
                full_encoded: encode_market_id(
                    DataSource::Polymarket,
                    ResolutionMethod::Keeper,
                    market_id,
                ),
            }
        }
    }
}

/// Canonical form to persist for an identifier. Legacy ids gain the
/// `polymarket:keeper:` prefix; prefixed ids come back unchanged.
pub fn canonicalize_market_id(market_id: &str) -> String {
    parse_market_id(market_id).full_encoded
}

pub fn is_polymarket(market_id: &str) -> bool {
    parse_market_id(market_id).data_source == DataSource::Polymarket
}

pub fn is_coingecko(market_id: &str) -> bool {
    parse_market_id(market_id).data_source == DataSource::CoinGecko
}

impl ParsedMarketId {
    pub fn new(source: DataSource, method: ResolutionMethod, raw_id: impl Into<String>) -> Self {
        let raw_id = raw_id.into();
        let full_encoded = encode_market_id(source, method, &raw_id);
        Self {
            data_source: source,
            resolution_method: method,
            raw_id,
            full_encoded,
        }
    }
}

impl FromStr for ParsedMarketId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_market_id(s))
    }
}

impl fmt::Display for ParsedMarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_encoded)
    }
}
