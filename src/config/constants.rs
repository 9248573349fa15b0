use crate::domain::SessionWindow;

// Top Level Constants

/// Body-to-wick multiplier of the alert rule: a session matches when
/// `body * 2.5` fits inside a half-range (high-center or center-low).
pub const WICK_BODY_MULTIPLIER: f64 = 2.5;

pub const IST_UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// NSE cash session, 09:15-15:00 IST, both bounds inclusive.
pub const SESSION_WINDOW: SessionWindow =
    SessionWindow::new(9 * 3600 + 15 * 60, 15 * 3600, IST_UTC_OFFSET_SECS);

/// Fewest hourly bars a session may collapse to. A 09:15-15:00 window spans at
/// most 7 calendar-hour buckets; classification wants an open and a close from
/// distinct bars, so a single-bar session is rejected.
pub const MIN_SESSION_BARS: usize = 2;

pub mod scan {
    use std::time::Duration;

    /// Concurrent per-symbol pipelines in one batch pass.
    pub const CONCURRENT_TASKS: usize = 10;

    /// Upper bound on one symbol's fetch+resample+classify pipeline.
    pub const SYMBOL_TIMEOUT: Duration = Duration::from_secs(30);
}
