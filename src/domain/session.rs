use chrono::{DateTime, FixedOffset, Timelike, Utc};

use crate::domain::HourlyBar;
use crate::utils::TimeUtils;

/// Daily trading window in exchange-local wall-clock seconds, plus the fixed
/// UTC offset of the exchange. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionWindow {
    pub open_secs: u32,
    pub close_secs: u32,
    pub utc_offset_secs: i32,
}

impl SessionWindow {
    pub const fn new(open_secs: u32, close_secs: u32, utc_offset_secs: i32) -> Self {
        Self {
            open_secs,
            close_secs,
            utc_offset_secs,
        }
    }

    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).expect("session UTC offset out of range")
    }

    /// True when the instant's local time-of-day falls inside the window.
    pub fn contains(&self, timestamp_ms: i64) -> bool {
        let Some(utc) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
            return false;
        };
        let local = utc.with_timezone(&self.offset());
        let secs_of_day = local.num_seconds_from_midnight();
        self.open_secs <= secs_of_day && secs_of_day <= self.close_secs
    }

    /// Start of the local calendar hour containing the instant, as epoch ms.
    pub fn hour_bucket_start_ms(&self, timestamp_ms: i64) -> i64 {
        let offset_ms = self.utc_offset_secs as i64 * TimeUtils::MS_IN_S;
        let shifted = timestamp_ms + offset_ms;
        shifted - shifted.rem_euclid(TimeUtils::MS_IN_H) - offset_ms
    }
}

/// Whole-session aggregate derived from the hourly bars.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub symbol: String,
    pub open_price: f64,
    pub close_price: f64,
    pub low_price: f64,
    pub high_price: f64,
    pub center: f64,
    pub last_update_time: String,
}

impl SessionSummary {
    /// Collapse a non-empty bar sequence: open from the first bar, close from
    /// the last, high/low across all bars.
    pub fn from_bars(
        symbol: impl Into<String>,
        bars: &[HourlyBar],
        last_update_time: String,
    ) -> Self {
        let first = bars.first().expect("session summary requires bars");
        let last = bars.last().expect("session summary requires bars");

        let open_price = first.open;
        let close_price = last.close;
        let low_price = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let high_price = bars
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            symbol: symbol.into(),
            open_price,
            close_price,
            low_price,
            high_price,
            center: (open_price + close_price) / 2.0,
            last_update_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SESSION_WINDOW;
    use chrono::TimeZone;

    fn ist_ms(h: u32, m: u32, s: u32) -> i64 {
        FixedOffset::east_opt(5 * 3600 + 1800)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 5, h, m, s)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        assert!(SESSION_WINDOW.contains(ist_ms(9, 15, 0)), "open bound");
        assert!(SESSION_WINDOW.contains(ist_ms(15, 0, 0)), "close bound");
        assert!(SESSION_WINDOW.contains(ist_ms(12, 30, 45)));

        assert!(!SESSION_WINDOW.contains(ist_ms(9, 14, 59)), "pre-market");
        assert!(!SESSION_WINDOW.contains(ist_ms(15, 0, 1)), "post-market");
    }

    #[test]
    fn test_bucket_start_aligns_to_local_hour() {
        // 10:42 IST belongs to the 10:00 IST bucket even though IST hour
        // boundaries sit at :30 in UTC.
        let bucket = SESSION_WINDOW.hour_bucket_start_ms(ist_ms(10, 42, 17));
        assert_eq!(bucket, ist_ms(10, 0, 0));

        // An exact bucket start maps to itself.
        let exact = SESSION_WINDOW.hour_bucket_start_ms(ist_ms(13, 0, 0));
        assert_eq!(exact, ist_ms(13, 0, 0));
    }

    #[test]
    fn test_summary_from_bars() {
        let bars = vec![
            HourlyBar::new(0, 100.0, 104.0, 99.0, 103.0),
            HourlyBar::new(3_600_000, 103.0, 120.0, 80.0, 95.0),
            HourlyBar::new(7_200_000, 95.0, 111.0, 94.0, 110.0),
        ];
        let summary = SessionSummary::from_bars("ACC", &bars, "05-Jan-2024 09:07:00".into());

        assert_eq!(summary.open_price, 100.0);
        assert_eq!(summary.close_price, 110.0);
        assert_eq!(summary.high_price, 120.0);
        assert_eq!(summary.low_price, 80.0);
        assert_eq!(summary.center, 105.0);
    }
}
