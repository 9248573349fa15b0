mod message;
mod sink;

pub use message::{ALERT_HEADER, format_alert};
pub use sink::{DeliveryError, NotificationSink, VonageSmsSink};
