use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, warn};

use market_id_codec::api::BetsClient;
use market_id_codec::codec::{
    canonicalize_market_id, encode_market_id, parse_data_source, parse_market_id,
    parse_resolution_method,
};
use market_id_codec::config::{AppConfig, CONFIG_PATH};
use market_id_codec::display::format_position;
use market_id_codec::placement::BetPlacement;
use market_id_codec::reporter;
use market_id_codec::types::{BetRequest, PositionInput};
use market_id_codec::API_BASE_VAR;

#[derive(Parser)]
#[command(name = "marketid", about = "Market identifier codec and bet history tool")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an identifier and print it with its link and badges
    Parse {
        id: String,
    },
    /// Build a canonical identifier from its parts
    Encode {
        source: String,
        method: String,
        raw_id: String,
    },
    /// Print the canonical form of an identifier (upgrades legacy ids)
    Canonical {
        id: String,
    },
    /// Print the outcome label for a position on a market
    Position {
        value: String,
        /// Market identifier the position belongs to
        #[arg(long)]
        id: String,
    },
    /// Fetch a wallet's bet history (falls back to mock data)
    Bets {
        #[arg(long)]
        address: String,
        /// Number of bets to return (defaults to config)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Attempt to place a bet
    Place {
        #[arg(long)]
        id: String,
        /// Amount in USD
        #[arg(long)]
        amount: Decimal,
        /// 1 for YES/LONG, 0 for NO/SHORT
        #[arg(long, default_value_t = 1)]
        position: u8,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Parse { id } => {
            reporter::report_market(&parse_market_id(&id));
        }
        Command::Encode {
            source,
            method,
            raw_id,
        } => {
            let encoded = encode_market_id(
                parse_data_source(&source),
                parse_resolution_method(&method),
                &raw_id,
            );
            println!("{encoded}");
        }
        Command::Canonical { id } => {
            println!("{}", canonicalize_market_id(&id));
        }
        Command::Position { value, id } => {
            let parsed = parse_market_id(&id);
            println!(
                "{}",
                format_position(PositionInput::Text(value), parsed.data_source)
            );
        }
        Command::Bets { address, limit } => {
            let mut config = AppConfig::load_or_default(&args.config)?;
            if let Ok(base) = std::env::var(API_BASE_VAR) {
                info!("Using API base from {API_BASE_VAR}: {base}");
                config.api.base_url = base;
                config.validate()?;
            }
            let limit = limit.unwrap_or(config.bets.default_limit);
            if limit == 0 {
                anyhow::bail!("--limit must be positive");
            }

            info!("Fetching up to {limit} bets for {address}");
            let client = BetsClient::new(&config.api)?;
            let page = client.fetch_user_bets(&address, limit).await;
            reporter::report_bets(&page);
        }
        Command::Place {
            id,
            amount,
            position,
        } => {
            let request = BetRequest {
                market_id: canonicalize_market_id(&id),
                amount,
                position,
            };
            let mut placement = BetPlacement::new();
            match placement.place_bet(&request) {
                Ok(receipt) => {
                    println!("{}", serde_json::to_string(&receipt)?);
                }
                Err(e) => {
                    warn!("Placement failed: {e}");
                    placement.reset();
                    anyhow::bail!(e);
                }
            }
        }
    }

    Ok(())
}
