use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use futures::{StreamExt, stream};

use crate::analysis::{Resampler, classify_summary};
use crate::config::{SESSION_WINDOW, scan};
use crate::data::MarketDataProvider;
use crate::domain::PatternResult;
use crate::utils::epoch_ms_to_utc;

/// Per-symbol results of one batch pass, in completion order.
///
/// Logically a symbol-to-result mapping; iteration order carries no meaning
/// downstream.
#[derive(Debug, Default)]
pub struct BatchResult {
    results: Vec<PatternResult>,
}

impl BatchResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternResult> {
        self.results.iter()
    }

    pub fn get(&self, symbol: &str) -> Option<&PatternResult> {
        self.results.iter().find(|r| r.symbol() == symbol)
    }
}

impl FromIterator<PatternResult> for BatchResult {
    fn from_iter<I: IntoIterator<Item = PatternResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

/// Fans the fetch -> resample -> classify pipeline out across the symbol
/// universe with a bounded worker pool.
pub struct BatchScanner {
    provider: Arc<dyn MarketDataProvider>,
    resampler: Resampler,
    concurrency: usize,
    symbol_timeout: Duration,
}

impl BatchScanner {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_limits(
            provider,
            Resampler::new(Some(SESSION_WINDOW)),
            scan::CONCURRENT_TASKS,
            scan::SYMBOL_TIMEOUT,
        )
    }

    pub fn with_limits(
        provider: Arc<dyn MarketDataProvider>,
        resampler: Resampler,
        concurrency: usize,
        symbol_timeout: Duration,
    ) -> Self {
        Self {
            provider,
            resampler,
            concurrency,
            symbol_timeout,
        }
    }

    /// Run one pass over `symbols`.
    ///
    /// A symbol whose pipeline errors or times out is logged and dropped;
    /// nothing a single symbol does can fail the batch.
    pub async fn run_batch(&self, symbols: &[&str]) -> BatchResult {
        let outcomes = stream::iter(symbols.iter().map(|&symbol| async move {
            match tokio::time::timeout(self.symbol_timeout, self.scan_symbol(symbol)).await {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(e)) => {
                    log::warn!("{symbol}: dropped from batch: {e:#}");
                    None
                }
                Err(_) => {
                    log::warn!(
                        "{symbol}: pipeline exceeded {:?}, dropped from batch",
                        self.symbol_timeout
                    );
                    None
                }
            }
        }))
        .buffer_unordered(self.concurrency)
        .collect::<Vec<_>>()
        .await;

        // Merge strictly after the join barrier; no shared accumulator.
        outcomes.into_iter().flatten().collect()
    }

    async fn scan_symbol(&self, symbol: &str) -> Result<Option<PatternResult>> {
        let series = self
            .provider
            .fetch_session_series(symbol)
            .await
            .context("session series fetch failed")?;

        let bars = self.resampler.resample(&series)?;

        let meta = self
            .provider
            .fetch_session_meta(symbol)
            .await
            .context("session meta fetch failed")?;

        let summary = self
            .resampler
            .summarize(symbol, &bars, meta.last_update_time);

        match classify_summary(&summary) {
            Some(pattern_type) => {
                log::debug!(
                    "{symbol}: {} candle, last bar {}",
                    pattern_type,
                    epoch_ms_to_utc(bars.last().map(|b| b.bucket_start_ms).unwrap_or_default())
                );
                Ok(Some(PatternResult {
                    summary,
                    pattern_type,
                }))
            }
            None => Ok(None),
        }
    }
}
