use anyhow::Result;
use async_trait::async_trait;

use crate::config::NSE;
use crate::data::{GlobalRateLimiter, nse};
use crate::domain::PriceSeries;

/// Session metadata reported by the exchange alongside the series.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMeta {
    pub last_update_time: String,
}

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the current session's raw price series for a symbol.
    async fn fetch_session_series(&self, symbol: &str) -> Result<PriceSeries>;

    /// Fetch the session metadata record for a symbol.
    async fn fetch_session_meta(&self, symbol: &str) -> Result<SessionMeta>;
}

pub struct NseProvider {
    client: reqwest::Client,
    limiter: GlobalRateLimiter,
}

impl NseProvider {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: nse::build_client()?,
            limiter: GlobalRateLimiter::new(NSE.limits.weight_limit_minute),
        })
    }

    /// Warm up the cookie jar before the first API call. Must run once per
    /// provider; the exchange rejects cookie-less API requests.
    pub async fn prime_session(&self) -> Result<()> {
        nse::prime_session(&self.client).await
    }
}

#[async_trait]
impl MarketDataProvider for NseProvider {
    async fn fetch_session_series(&self, symbol: &str) -> Result<PriceSeries> {
        nse::load_chart_series(&self.client, symbol, &self.limiter).await
    }

    async fn fetch_session_meta(&self, symbol: &str) -> Result<SessionMeta> {
        nse::load_quote_meta(&self.client, symbol, &self.limiter).await
    }
}
