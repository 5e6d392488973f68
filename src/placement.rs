use thiserror::Error;
use tracing::info;

use crate::codec::parse_market_id;
use crate::types::{BetRequest, PlacementReceipt};

/// Message shown for every rejected placement.
pub const UNAVAILABLE_MESSAGE: &str = "Bet placement is not available yet";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable,
}

/// Bet placement entry point. Placement is currently disabled: every attempt
/// is rejected and no transaction hash or bet id is ever produced.
#[derive(Debug, Default)]
pub struct BetPlacement {
    last_error: Option<PlacementError>,
}

impl BetPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place_bet(&mut self, request: &BetRequest) -> Result<PlacementReceipt, PlacementError> {
        let market = parse_market_id(&request.market_id);
        info!(
            "Rejecting bet of ${} on {} ({})",
            request.amount, market.full_encoded, market.data_source
        );
        let err = PlacementError::Unavailable;
        self.last_error = Some(err.clone());
        Err(err)
    }

    /// Error from the most recent attempt, if any.
    pub fn last_error(&self) -> Option<&PlacementError> {
        self.last_error.as_ref()
    }

    /// Always `None` while placement is disabled.
    pub fn tx_hash(&self) -> Option<&str> {
        None
    }

    /// Always `None` while placement is disabled.
    pub fn bet_id(&self) -> Option<&str> {
        None
    }

    /// Kept for symmetry with the placement flow; there is nothing to reset.
    pub fn reset(&mut self) {}
}
