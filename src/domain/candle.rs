// Define the CandleType enum
#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One hour of session trading collapsed to OHLC.
///
/// `bucket_start_ms` is aligned to an exchange-local calendar hour, not to the
/// first sample inside the bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyBar {
    pub bucket_start_ms: i64,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl HourlyBar {
    // A constructor for convenience
    pub fn new(bucket_start_ms: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        HourlyBar {
            bucket_start_ms,
            open,
            high,
            low,
            close,
        }
    }

    // A method to determine the type of candle
    pub fn get_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    /// Absolute size of the candle body.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_type_and_body() {
        let up = HourlyBar::new(0, 100.0, 106.0, 99.0, 104.0);
        assert_eq!(up.get_type(), CandleType::Bullish);
        assert_eq!(up.body(), 4.0);

        let down = HourlyBar::new(0, 104.0, 106.0, 99.0, 100.0);
        assert_eq!(down.get_type(), CandleType::Bearish);
        assert_eq!(down.body(), 4.0);
    }
}
