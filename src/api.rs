use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::mock;
use crate::types::{BetStatus, BetsPage};

/// Client for the platform's bet history endpoint.
pub struct BetsClient {
    http: reqwest::Client,
    base_url: String,
}

impl BetsClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the most recent bets for a wallet.
    ///
    /// Never fails: any transport, status or decode error is logged and the
    /// deterministic mock history for `address` is returned instead.
    pub async fn fetch_user_bets(&self, address: &str, limit: u32) -> BetsPage {
        match self.try_fetch_user_bets(address, limit).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Bet fetch for {address} failed, using mock data: {e:#}");
                mock::generate_bets(address, limit)
            }
        }
    }

    /// Fetch bets without the mock fallback.
    pub async fn try_fetch_user_bets(&self, address: &str, limit: u32) -> Result<BetsPage> {
        let url = self.bets_url(address, limit)?;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .context("bets request failed")?
            .error_for_status()
            .context("bets endpoint returned an error status")?;
        let page: BetsPage = resp.json().await.context("failed to decode bets response")?;
        let page = normalize_page(page, limit);
        debug!("Fetched {} of {} bets for {address}", page.bets.len(), page.total);
        Ok(page)
    }

    fn bets_url(&self, address: &str, limit: u32) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/bets"))
            .with_context(|| format!("invalid API base URL {:?}", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

/// Enforce the page contract on upstream data: at most `limit` bets, and an
/// outcome only on settled bets.
fn normalize_page(mut page: BetsPage, limit: u32) -> BetsPage {
    page.bets.truncate(limit as usize);
    for bet in &mut page.bets {
        if bet.status != BetStatus::Settled && bet.outcome.take().is_some() {
            debug!("Dropping outcome on unsettled bet {}", bet.id);
        }
    }
    page.total = page.total.max(page.bets.len() as u64);
    page
}
