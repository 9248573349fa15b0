use crate::config::WICK_BODY_MULTIPLIER;
use crate::domain::{PatternType, SessionSummary};

/// Candle-shape rule over a whole session.
///
/// A session matches when 2.5x the body fits inside a half-range measured
/// from the body center (`high - center` above, `center - low` below).
/// Matching one half-range yields `Single`, matching both yields `Both`.
/// Comparisons are inclusive: an exact fit counts.
pub fn classify(open: f64, close: f64, low: f64, high: f64) -> Option<PatternType> {
    let center = (open + close) / 2.0;
    let scaled_body = (close - open).abs() * WICK_BODY_MULTIPLIER;

    let green_upper = scaled_body <= high - center;
    let green_lower = scaled_body <= center - low;
    // The bearish tests measure the body as an absolute difference too, so
    // they evaluate identically to the bullish pair.
    let red_upper = scaled_body <= high - center;
    let red_lower = scaled_body <= center - low;

    if green_upper || green_lower {
        Some(pattern_for(green_upper, green_lower))
    } else if red_upper || red_lower {
        Some(pattern_for(red_upper, red_lower))
    } else {
        None
    }
}

fn pattern_for(upper: bool, lower: bool) -> PatternType {
    if upper && lower {
        PatternType::Both
    } else {
        PatternType::Single
    }
}

/// Convenience wrapper over a derived session summary.
pub fn classify_summary(summary: &SessionSummary) -> Option<PatternType> {
    classify(
        summary.open_price,
        summary.close_price,
        summary.low_price,
        summary.high_price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_wick_dominant_session_is_single() {
        // center = 105, body = 10, scaled = 25; high-center = 15 fails,
        // center-low = 25 passes exactly.
        assert_eq!(
            classify(100.0, 110.0, 80.0, 120.0),
            Some(PatternType::Single)
        );
    }

    #[test]
    fn test_both_half_ranges_match() {
        // center = 102, body = 4, scaled = 10; high-center = 12, center-low = 12.
        assert_eq!(
            classify(100.0, 104.0, 90.0, 114.0),
            Some(PatternType::Both)
        );
    }

    #[test]
    fn test_exact_equality_is_inclusive() {
        // center = 102, scaled body = 10, high-center = 10 exactly; the lower
        // half-range (7) fails, so the exact upper fit alone decides.
        assert_eq!(
            classify(100.0, 104.0, 95.0, 112.0),
            Some(PatternType::Single)
        );

        // Exact on both sides at once.
        assert_eq!(
            classify(100.0, 104.0, 92.0, 112.0),
            Some(PatternType::Both)
        );
    }

    #[test]
    fn test_tall_body_matches_nothing() {
        // center = 102.5, body = 5, scaled = 12.5; both half-ranges are 7.5.
        assert_eq!(classify(100.0, 105.0, 95.0, 110.0), None);

        // Nearly all body, no wicks to speak of.
        assert_eq!(classify(100.0, 110.0, 98.0, 112.0), None);
    }

    #[test]
    fn test_family_outcome_ignores_candle_direction() {
        // Swapping open and close flips bullish/bearish but not the geometry.
        let green = classify(100.0, 104.0, 90.0, 114.0);
        let red = classify(104.0, 100.0, 90.0, 114.0);
        assert_eq!(green, red);

        let green = classify(100.0, 110.0, 80.0, 120.0);
        let red = classify(110.0, 100.0, 80.0, 120.0);
        assert_eq!(green, red);
    }

    #[test]
    fn test_doji_with_long_wicks_is_both() {
        // Zero body: any wick at all satisfies both inclusive tests.
        assert_eq!(
            classify(100.0, 100.0, 95.0, 105.0),
            Some(PatternType::Both)
        );
    }
}
