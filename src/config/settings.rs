use anyhow::{Context, Result};
use std::env;

/// Credentials and destination numbers for one batch run.
///
/// Read once at startup and passed down explicitly; no module-level state.
#[derive(Debug, Clone)]
pub struct Settings {
    pub vonage_api_key: String,
    pub vonage_api_secret: String,
    pub from_phone_number: String,
    pub to_phone_number: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            vonage_api_key: require("VONAGE_API_KEY")?,
            vonage_api_secret: require("VONAGE_API_SECRET")?,
            from_phone_number: require("FROM_PHONE_NUMBER")?,
            to_phone_number: require("TO_PHONE_NUMBER")?,
        })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} is not set"))
}
