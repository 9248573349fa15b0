mod time_utils;

pub use time_utils::TimeUtils;

pub(crate) use time_utils::epoch_ms_to_utc;
