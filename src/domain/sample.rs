use serde::{Deserialize, Serialize};

/// A single traded price observation from the intraday feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub timestamp_ms: i64,
    pub price: f64,
}

impl PriceSample {
    pub fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }
}

/// One symbol's raw price series for a single trading session.
///
/// Sample order follows the feed. Timestamps are usually non-decreasing but
/// the exchange does not guarantee it; consumers must sort before bucketing.
/// Duplicate timestamps are possible and kept.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    pub symbol: String,
    pub samples: Vec<PriceSample>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, samples: Vec<PriceSample>) -> Self {
        Self {
            symbol: symbol.into(),
            samples,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}
