use itertools::Itertools;
use std::{error::Error, fmt};

use crate::config::MIN_SESSION_BARS;
use crate::domain::{HourlyBar, PriceSample, PriceSeries, SessionSummary, SessionWindow};
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleError {
    EmptySeries,
    InsufficientBars { got: usize },
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            ResampleError::EmptySeries => write!(f, "no samples inside the session window"),
            ResampleError::InsufficientBars { got } => {
                write!(f, "only {} hourly bar(s), need {}", got, MIN_SESSION_BARS)
            }
        }
    }
}

impl Error for ResampleError {}

/// Collapses a raw intraday series into hourly OHLC bars.
pub struct Resampler {
    window: Option<SessionWindow>,
}

impl Resampler {
    /// `window = None` disables the session filter; buckets then align to UTC
    /// hours instead of exchange-local ones.
    pub fn new(window: Option<SessionWindow>) -> Self {
        Self { window }
    }

    pub fn resample(&self, series: &PriceSeries) -> Result<Vec<HourlyBar>, ResampleError> {
        let mut samples: Vec<PriceSample> = match &self.window {
            Some(w) => series
                .samples
                .iter()
                .copied()
                .filter(|s| w.contains(s.timestamp_ms))
                .collect(),
            None => series.samples.clone(),
        };

        if samples.is_empty() {
            return Err(ResampleError::EmptySeries);
        }

        // Stable sort: equal timestamps keep feed order, so bucket open/close
        // follow arrival order even when the feed is unsorted.
        samples.sort_by_key(|s| s.timestamp_ms);

        let grouped = samples
            .iter()
            .chunk_by(|s| self.bucket_start_ms(s.timestamp_ms));
        let bars: Vec<HourlyBar> = grouped
            .into_iter()
            .map(|(bucket_start_ms, bucket)| collapse_bucket(bucket_start_ms, bucket))
            .collect();

        if bars.len() < MIN_SESSION_BARS {
            return Err(ResampleError::InsufficientBars { got: bars.len() });
        }

        Ok(bars)
    }

    /// Session aggregate for a resampled bar sequence.
    pub fn summarize(
        &self,
        symbol: &str,
        bars: &[HourlyBar],
        last_update_time: String,
    ) -> SessionSummary {
        SessionSummary::from_bars(symbol, bars, last_update_time)
    }

    fn bucket_start_ms(&self, timestamp_ms: i64) -> i64 {
        match &self.window {
            Some(w) => w.hour_bucket_start_ms(timestamp_ms),
            None => timestamp_ms - timestamp_ms.rem_euclid(TimeUtils::MS_IN_H),
        }
    }
}

fn collapse_bucket<'a>(
    bucket_start_ms: i64,
    bucket: impl Iterator<Item = &'a PriceSample>,
) -> HourlyBar {
    let mut bucket = bucket;
    let first = bucket.next().expect("hour buckets are never empty");

    let mut bar = HourlyBar::new(
        bucket_start_ms,
        first.price,
        first.price,
        first.price,
        first.price,
    );
    for sample in bucket {
        bar.high = bar.high.max(sample.price);
        bar.low = bar.low.min(sample.price);
        bar.close = sample.price;
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SESSION_WINDOW;
    use chrono::{FixedOffset, TimeZone};

    fn ist_ms(h: u32, m: u32, s: u32) -> i64 {
        FixedOffset::east_opt(5 * 3600 + 1800)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 5, h, m, s)
            .unwrap()
            .timestamp_millis()
    }

    fn series(points: &[(i64, f64)]) -> PriceSeries {
        PriceSeries::new(
            "TEST",
            points
                .iter()
                .map(|&(ts, p)| PriceSample::new(ts, p))
                .collect(),
        )
    }

    fn session_resampler() -> Resampler {
        Resampler::new(Some(SESSION_WINDOW))
    }

    #[test]
    fn test_bars_are_hour_aligned_and_strictly_increasing() {
        let input = series(&[
            (ist_ms(9, 20, 0), 100.0),
            (ist_ms(9, 45, 0), 101.0),
            (ist_ms(10, 5, 0), 102.0),
            (ist_ms(12, 30, 0), 99.0),
            (ist_ms(14, 50, 0), 103.0),
        ]);

        let bars = session_resampler().resample(&input).unwrap();
        assert_eq!(bars.len(), 4);

        // 09:20 and 09:45 collapse into the 09:00 bucket, which starts before
        // the session window opens; alignment is to the calendar hour.
        assert_eq!(bars[0].bucket_start_ms, ist_ms(9, 0, 0));
        assert_eq!(bars[1].bucket_start_ms, ist_ms(10, 0, 0));
        assert_eq!(bars[2].bucket_start_ms, ist_ms(12, 0, 0));
        assert_eq!(bars[3].bucket_start_ms, ist_ms(14, 0, 0));

        for pair in bars.windows(2) {
            assert!(
                pair[0].bucket_start_ms < pair[1].bucket_start_ms,
                "bucket starts must be strictly increasing"
            );
        }

        assert_eq!(bars[0].open, 100.0);
        assert_eq!(bars[0].close, 101.0);
        assert_eq!(bars[0].high, 101.0);
        assert_eq!(bars[0].low, 100.0);
    }

    #[test]
    fn test_unsorted_feed_is_sorted_before_bucketing() {
        // Buffer order reversed: the 10:40 print arrives before the 10:05 one.
        let input = series(&[
            (ist_ms(10, 40, 0), 105.0),
            (ist_ms(10, 5, 0), 101.0),
            (ist_ms(11, 10, 0), 103.0),
        ]);

        let bars = session_resampler().resample(&input).unwrap();
        assert_eq!(bars[0].open, 101.0, "open must follow timestamp order");
        assert_eq!(bars[0].close, 105.0, "close must follow timestamp order");
    }

    #[test]
    fn test_pre_and_post_market_samples_are_dropped() {
        let input = series(&[
            (ist_ms(9, 0, 0), 90.0),   // pre-market
            (ist_ms(9, 15, 0), 100.0), // open bound, kept
            (ist_ms(15, 0, 0), 110.0), // close bound, kept
            (ist_ms(15, 20, 0), 120.0), // post-market
        ]);

        let bars = session_resampler().resample(&input).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].open, 100.0);
        assert_eq!(bars[1].close, 110.0);
    }

    #[test]
    fn test_empty_series_is_rejected() {
        assert_eq!(
            session_resampler().resample(&series(&[])),
            Err(ResampleError::EmptySeries)
        );

        // Samples exist but all fall outside the session window.
        let pre_market_only = series(&[(ist_ms(8, 30, 0), 90.0), (ist_ms(9, 5, 0), 91.0)]);
        assert_eq!(
            session_resampler().resample(&pre_market_only),
            Err(ResampleError::EmptySeries)
        );
    }

    #[test]
    fn test_single_bucket_is_rejected() {
        let input = series(&[(ist_ms(11, 5, 0), 100.0), (ist_ms(11, 40, 0), 101.0)]);
        assert_eq!(
            session_resampler().resample(&input),
            Err(ResampleError::InsufficientBars { got: 1 })
        );
    }

    #[test]
    fn test_resample_is_idempotent_on_bucketed_input() {
        // One sample exactly at each bucket start, all inside the window.
        let input = series(&[
            (ist_ms(10, 0, 0), 100.0),
            (ist_ms(11, 0, 0), 101.0),
            (ist_ms(12, 0, 0), 102.0),
            (ist_ms(13, 0, 0), 103.0),
            (ist_ms(14, 0, 0), 104.0),
        ]);

        let resampler = session_resampler();
        let bars = resampler.resample(&input).unwrap();

        let derived = series(
            &bars
                .iter()
                .map(|b| (b.bucket_start_ms, b.open))
                .collect::<Vec<_>>(),
        );
        let rebars = resampler.resample(&derived).unwrap();

        assert_eq!(bars, rebars);
    }

    #[test]
    fn test_no_window_aligns_to_utc_hours() {
        let resampler = Resampler::new(None);
        let input = series(&[
            (ist_ms(8, 30, 0), 90.0), // 03:00 UTC; kept because filtering is off
            (ist_ms(9, 40, 0), 95.0), // 04:10 UTC
        ]);

        let bars = resampler.resample(&input).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].bucket_start_ms % TimeUtils::MS_IN_H, 0);
        assert_eq!(bars[1].bucket_start_ms % TimeUtils::MS_IN_H, 0);
    }
}
