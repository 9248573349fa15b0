//! Configuration module for the candle-scout scanner.

// Can all be private now because we have a public re-export.
mod nse;
mod settings;
mod vonage;

// Public
pub mod constants;
pub mod symbols;

// Re-export commonly used items
pub use constants::{MIN_SESSION_BARS, SESSION_WINDOW, WICK_BODY_MULTIPLIER, scan};
pub use nse::{NSE, NseConfig};
pub use settings::Settings;
pub use symbols::SYMBOLS;
pub use vonage::{VONAGE, VonageConfig};
