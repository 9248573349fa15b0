use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::SessionSummary;

/// How many of the half-range tests the session satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum PatternType {
    Single,
    Both,
}

/// A symbol whose session candle matched the alert rule.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternResult {
    pub summary: SessionSummary,
    pub pattern_type: PatternType,
}

impl PatternResult {
    pub fn symbol(&self) -> &str {
        &self.summary.symbol
    }
}
