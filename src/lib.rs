#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod notify;
pub mod utils;

// Re-export commonly used types outside of crate
pub use config::{SYMBOLS, Settings};
pub use data::{MarketDataProvider, NseProvider};
pub use engine::{BatchResult, BatchScanner};
pub use notify::{NotificationSink, VonageSmsSink, format_alert};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the alert body instead of sending the SMS
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
