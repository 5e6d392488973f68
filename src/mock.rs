//! Deterministic synthetic bet history.
//!
//! Used when the platform API is unreachable. Output is a pure function of
//! `(address, limit)`, so the UI sees the same history on every fallback.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::codec::encode_market_id;
use crate::types::{BetOutcome, BetRecord, BetStatus, BetsPage, DataSource, ResolutionMethod};

/// Timestamp (unix seconds) the newest mock bet is created at: 2025-01-01T00:00:00Z.
pub const MOCK_ANCHOR_SECS: i64 = 1_735_689_600;

const MIN_TOTAL: u64 = 8;
const TOTAL_SPREAD: u64 = 17;

const COINS: [&str; 8] = [
    "bitcoin",
    "ethereum",
    "solana",
    "dogecoin",
    "chainlink",
    "avalanche-2",
    "polkadot",
    "uniswap",
];

/// FNV-1a over the lowercased address.
fn seed_for(address: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    address
        .to_ascii_lowercase()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME))
}

/// SplitMix64 finalizer, used to derive independent values per record.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Generate the synthetic bet page for a wallet.
pub fn generate_bets(address: &str, limit: u32) -> BetsPage {
    let seed = seed_for(address);
    let total = MIN_TOTAL + seed % TOTAL_SPREAD;
    let count = total.min(u64::from(limit));

    let anchor = DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(MOCK_ANCHOR_SECS);
    let mut created_at = anchor;
    let mut bets = Vec::with_capacity(count as usize);

    for i in 0..count {
        let h = mix(seed ^ i.wrapping_mul(0x2545_f491_4f6c_dd1d));
        bets.push(mock_bet(i, h, created_at));
        created_at -= Duration::hours(3 + (h >> 40) as i64 % 7);
    }

    BetsPage { bets, total }
}

fn mock_bet(index: u64, h: u64, created_at: DateTime<Utc>) -> BetRecord {
    let id = if index % 2 == 0 {
        let raw = format!(
            "0x{:016x}{:016x}{:016x}{:016x}",
            h,
            mix(h),
            mix(h ^ 1),
            mix(h ^ 2)
        );
        encode_market_id(DataSource::Polymarket, ResolutionMethod::Keeper, &raw)
    } else {
        let coin = COINS[(h % COINS.len() as u64) as usize];
        encode_market_id(DataSource::CoinGecko, ResolutionMethod::Deterministic, coin)
    };

    // 5.00 ..= 500.00 USD
    let amount = Decimal::new(500 + ((h >> 4) % 49_501) as i64, 2);
    let portfolio_size = 1 + ((h >> 20) % 10) as u32;

    let (status, outcome) = match (h >> 8) % 3 {
        0 => (BetStatus::Pending, None),
        1 => (BetStatus::Matched, None),
        _ if (h >> 16) & 1 == 0 => (BetStatus::Settled, Some(BetOutcome::Won)),
        _ => (BetStatus::Settled, Some(BetOutcome::Lost)),
    };

    let pnl = match outcome {
        // Payout factor 0.50 ..= 1.50
        Some(BetOutcome::Won) => amount * Decimal::new(50 + ((h >> 24) % 101) as i64, 2),
        Some(BetOutcome::Lost) => -amount,
        // Mark-to-market -25% ..= +25%
        None => amount * Decimal::new(((h >> 24) % 51) as i64 - 25, 2),
    }
    .round_dp(2);

    BetRecord {
        id,
        portfolio_size,
        amount,
        pnl,
        status,
        outcome,
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_market_id;

    const ADDR: &str = "0xdb27bf2ac5d428a9c63dbc914611036855a6c56e";

    #[test]
    fn same_inputs_same_output() {
        assert_eq!(generate_bets(ADDR, 50), generate_bets(ADDR, 50));
    }

    #[test]
    fn address_case_does_not_matter() {
        assert_eq!(
            generate_bets(ADDR, 10),
            generate_bets(&ADDR.to_uppercase(), 10)
        );
    }

    #[test]
    fn limit_caps_returned_bets() {
        let page = generate_bets(ADDR, 3);
        assert_eq!(page.bets.len(), 3);
        assert!(page.total >= MIN_TOTAL);

        let all = generate_bets(ADDR, 1_000);
        assert_eq!(all.bets.len() as u64, all.total);
        assert!(all.total < MIN_TOTAL + TOTAL_SPREAD);
        assert_eq!(&all.bets[..3], &page.bets[..]);
    }

    #[test]
    fn zero_limit_still_reports_total() {
        let page = generate_bets(ADDR, 0);
        assert!(page.bets.is_empty());
        assert!(page.total >= MIN_TOTAL);
    }

    #[test]
    fn outcome_only_when_settled() {
        for addr in [ADDR, "0x1", "0xabc", ""] {
            for bet in generate_bets(addr, 100).bets {
                assert_eq!(bet.outcome.is_some(), bet.status == BetStatus::Settled);
            }
        }
    }

    #[test]
    fn pnl_sign_matches_outcome() {
        for bet in generate_bets(ADDR, 100).bets {
            match bet.outcome {
                Some(BetOutcome::Won) => assert!(bet.pnl > Decimal::ZERO),
                Some(BetOutcome::Lost) => assert_eq!(bet.pnl, -bet.amount),
                None => {
                    assert!(bet.pnl.abs() <= bet.amount / Decimal::from(4) + Decimal::new(1, 2))
                }
            }
        }
    }

    #[test]
    fn amounts_and_sizes_in_range() {
        for bet in generate_bets("0xfeedface", 100).bets {
            assert!(bet.amount >= Decimal::new(500, 2));
            assert!(bet.amount <= Decimal::new(50_000, 2));
            assert!((1..=10).contains(&bet.portfolio_size));
        }
    }

    #[test]
    fn ids_are_canonical() {
        for bet in generate_bets(ADDR, 100).bets {
            let parsed = parse_market_id(&bet.id);
            assert_eq!(parsed.full_encoded, bet.id);
            assert_eq!(bet.id.split(':').count(), 3);
        }
    }

    #[test]
    fn newest_first() {
        let bets = generate_bets(ADDR, 100).bets;
        assert_eq!(bets[0].created_at.timestamp(), MOCK_ANCHOR_SECS);
        assert!(bets.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }
}
