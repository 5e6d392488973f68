//! Presentation lookups derived from a parsed market identifier: outbound
//! links, source/resolution badges and outcome labels.

use crate::types::{Badge, DataSource, ParsedMarketId, PositionInput, ResolutionMethod};
use crate::{COINGECKO_COIN_BASE, POLYMARKET_EVENT_BASE};

/// Link target used when no platform page exists.
pub const PLACEHOLDER_URL: &str = "#";

const POLYMARKET_BADGE: Badge = Badge {
    label: "Polymarket",
    icon: "🔮",
    bg_color: "bg-blue-100 dark:bg-blue-900/30",
    text_color: "text-blue-700 dark:text-blue-300",
};

const COINGECKO_BADGE: Badge = Badge {
    label: "CoinGecko",
    icon: "🦎",
    bg_color: "bg-green-100 dark:bg-green-900/30",
    text_color: "text-green-700 dark:text-green-300",
};

const KEEPER_BADGE: Badge = Badge {
    label: "Keeper Vote",
    icon: "🗳️",
    bg_color: "bg-purple-100 dark:bg-purple-900/30",
    text_color: "text-purple-700 dark:text-purple-300",
};

const DETERMINISTIC_BADGE: Badge = Badge {
    label: "Auto-Resolve",
    icon: "⚡",
    bg_color: "bg-amber-100 dark:bg-amber-900/30",
    text_color: "text-amber-700 dark:text-amber-300",
};

const UNKNOWN_BADGE: Badge = Badge {
    label: "Unknown",
    icon: "❓",
    bg_color: "bg-gray-100 dark:bg-gray-800",
    text_color: "text-gray-700 dark:text-gray-300",
};

/// External page for a parsed market. `raw_id` is embedded verbatim.
pub fn get_market_url(parsed: &ParsedMarketId) -> String {
    match parsed.data_source {
        DataSource::Polymarket => format!("{POLYMARKET_EVENT_BASE}/{}", parsed.raw_id),
        DataSource::CoinGecko => format!("{COINGECKO_COIN_BASE}/{}", parsed.raw_id),
    }
}

/// External page for a raw source tag as it arrives from an upstream payload.
///
/// Unlike [`crate::codec::parse_data_source`] this does not default: an unrecognized tag
/// yields [`PLACEHOLDER_URL`].
pub fn market_url_for_tag(source_tag: &str, raw_id: &str) -> String {
    match known_source(source_tag) {
        Some(source) => get_market_url(&ParsedMarketId::new(
            source,
            ResolutionMethod::default(),
            raw_id,
        )),
        None => PLACEHOLDER_URL.to_string(),
    }
}

pub fn get_source_badge(source: DataSource) -> Badge {
    match source {
        DataSource::Polymarket => POLYMARKET_BADGE,
        DataSource::CoinGecko => COINGECKO_BADGE,
    }
}

pub fn get_resolution_badge(method: ResolutionMethod) -> Badge {
    match method {
        ResolutionMethod::Keeper => KEEPER_BADGE,
        ResolutionMethod::Deterministic => DETERMINISTIC_BADGE,
    }
}

/// Source badge for a raw tag; unrecognized tags get the neutral badge.
pub fn source_badge_for_tag(tag: &str) -> Badge {
    known_source(tag).map_or(UNKNOWN_BADGE, get_source_badge)
}

/// Resolution badge for a raw tag; unrecognized tags get the neutral badge.
pub fn resolution_badge_for_tag(tag: &str) -> Badge {
    known_method(tag).map_or(UNKNOWN_BADGE, get_resolution_badge)
}

/// Label for a position indicator.
///
/// Only a value equal to the number 1 is the positive side. Strings are
/// coerced numerically (surrounding whitespace ignored, empty means 0,
/// `0x`/`0o`/`0b` prefixes honoured), so `"1"`, `"1.0"` and `"0x1"` count
/// while `"abc"` does not. CoinGecko markets are
/// directional (`LONG`/`SHORT`); everything else is binary (`YES`/`NO`).
pub fn format_position(position: impl Into<PositionInput>, source: DataSource) -> &'static str {
    let is_positive = position_value(&position.into()) == 1.0;
    match (source, is_positive) {
        (DataSource::CoinGecko, true) => "LONG",
        (DataSource::CoinGecko, false) => "SHORT",
        (_, true) => "YES",
        (_, false) => "NO",
    }
}

fn position_value(position: &PositionInput) -> f64 {
    match position {
        PositionInput::Number(n) => *n,
        PositionInput::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return 0.0;
            }
            match radix_literal(trimmed) {
                Some((digits, _)) if digits.starts_with('+') => f64::NAN,
                Some((digits, radix)) => u64::from_str_radix(digits, radix)
                    .map(|v| v as f64)
                    .unwrap_or(f64::NAN),
                None => trimmed.parse().unwrap_or(f64::NAN),
            }
        }
    }
}

/// Split an unsigned `0x`/`0o`/`0b` literal into its digits and radix.
fn radix_literal(s: &str) -> Option<(&str, u32)> {
    let prefix = s.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((&s[2..], radix))
}

fn known_source(tag: &str) -> Option<DataSource> {
    DataSource::ALL
        .into_iter()
        .find(|s| s.as_str().eq_ignore_ascii_case(tag))
}

fn known_method(tag: &str) -> Option<ResolutionMethod> {
    ResolutionMethod::ALL
        .into_iter()
        .find(|m| m.as_str().eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_market_id;

    // ── get_market_url ─────────────────────────────────────────────

    #[test]
    fn url_polymarket_event() {
        let p = parse_market_id("polymarket:keeper:0xabc123");
        assert_eq!(get_market_url(&p), "https://polymarket.com/event/0xabc123");
    }

    #[test]
    fn url_coingecko_coin() {
        let p = parse_market_id("coingecko:deterministic:bitcoin");
        assert_eq!(
            get_market_url(&p),
            "https://www.coingecko.com/en/coins/bitcoin"
        );
    }

    #[test]
    fn url_embeds_raw_id_verbatim() {
        let p = parse_market_id("polymarket:keeper:0xabc:def ghi");
        assert!(get_market_url(&p).ends_with("/event/0xabc:def ghi"));
    }

    #[test]
    fn url_legacy_is_polymarket() {
        let p = parse_market_id("0x1234");
        assert_eq!(get_market_url(&p), "https://polymarket.com/event/0x1234");
    }

    #[test]
    fn url_for_unknown_tag_is_placeholder() {
        assert_eq!(market_url_for_tag("kalshi", "x"), PLACEHOLDER_URL);
        assert_eq!(market_url_for_tag("", "x"), PLACEHOLDER_URL);
        assert_eq!(
            market_url_for_tag("CoinGecko", "eth"),
            "https://www.coingecko.com/en/coins/eth"
        );
    }

    // ── badges ─────────────────────────────────────────────────────

    #[test]
    fn source_badges() {
        assert_eq!(get_source_badge(DataSource::Polymarket).label, "Polymarket");
        assert_eq!(get_source_badge(DataSource::CoinGecko).label, "CoinGecko");
        assert_eq!(source_badge_for_tag("nope"), UNKNOWN_BADGE);
        assert_eq!(source_badge_for_tag("POLYMARKET"), POLYMARKET_BADGE);
    }

    #[test]
    fn resolution_badges() {
        assert_eq!(get_resolution_badge(ResolutionMethod::Keeper).label, "Keeper Vote");
        assert_eq!(
            get_resolution_badge(ResolutionMethod::Deterministic).label,
            "Auto-Resolve"
        );
        assert_eq!(resolution_badge_for_tag("oracle"), UNKNOWN_BADGE);
        assert_eq!(resolution_badge_for_tag("deterministic"), DETERMINISTIC_BADGE);
    }

    #[test]
    fn badges_carry_dark_theme_classes() {
        for badge in [
            POLYMARKET_BADGE,
            COINGECKO_BADGE,
            KEEPER_BADGE,
            DETERMINISTIC_BADGE,
            UNKNOWN_BADGE,
        ] {
            assert!(badge.bg_color.contains("dark:"), "{}", badge.label);
            assert!(badge.text_color.contains("dark:"), "{}", badge.label);
        }
    }

    // ── format_position ────────────────────────────────────────────

    #[test]
    fn position_coingecko_directional() {
        assert_eq!(format_position(1, DataSource::CoinGecko), "LONG");
        assert_eq!(format_position(0, DataSource::CoinGecko), "SHORT");
        assert_eq!(format_position(-1, DataSource::CoinGecko), "SHORT");
    }

    #[test]
    fn position_polymarket_binary() {
        assert_eq!(format_position("1", DataSource::Polymarket), "YES");
        assert_eq!(format_position("abc", DataSource::Polymarket), "NO");
        assert_eq!(format_position("0", DataSource::Polymarket), "NO");
        assert_eq!(format_position(2, DataSource::Polymarket), "NO");
    }

    #[test]
    fn position_string_coercion() {
        assert_eq!(format_position(" 1 ", DataSource::Polymarket), "YES");
        assert_eq!(format_position("1.0", DataSource::CoinGecko), "LONG");
        assert_eq!(format_position("", DataSource::Polymarket), "NO");
        assert_eq!(format_position("1abc", DataSource::Polymarket), "NO");
        assert_eq!(format_position(1.0, DataSource::Polymarket), "YES");
    }

    #[test]
    fn position_radix_prefixes() {
        assert_eq!(format_position("0x1", DataSource::Polymarket), "YES");
        assert_eq!(format_position("0X01", DataSource::CoinGecko), "LONG");
        assert_eq!(format_position("0b1", DataSource::Polymarket), "YES");
        assert_eq!(format_position("0o1", DataSource::Polymarket), "YES");
        assert_eq!(format_position("0x0", DataSource::Polymarket), "NO");
        assert_eq!(format_position("0x", DataSource::Polymarket), "NO");
        assert_eq!(format_position("0b2", DataSource::Polymarket), "NO");
        assert_eq!(format_position("-0x1", DataSource::CoinGecko), "SHORT");
        assert_eq!(format_position("0x+1", DataSource::Polymarket), "NO");
    }

    #[test]
    fn position_input_deserializes_either_shape() {
        let n: PositionInput = serde_json::from_str("1").unwrap();
        let s: PositionInput = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(format_position(n, DataSource::CoinGecko), "LONG");
        assert_eq!(format_position(s, DataSource::CoinGecko), "LONG");
    }
}
