use crate::engine::BatchResult;

pub const ALERT_HEADER: &str = "Stock patterns detected:";

/// One line per matched symbol under a fixed header. Returns `None` for an
/// empty batch; no message is sent in that case.
pub fn format_alert(batch: &BatchResult) -> Option<String> {
    if batch.is_empty() {
        return None;
    }

    let mut lines = vec![ALERT_HEADER.to_string()];
    for result in batch.iter() {
        lines.push(format!("{}: {} candle", result.symbol(), result.pattern_type));
    }
    Some(lines.join("\n"))
}
