use {
    anyhow::{Context, Result},
    async_trait::async_trait,
    serde::Deserialize,
    std::{error::Error, fmt, time::Duration},
};

use crate::config::{Settings, VONAGE};

/// Notification delivery failed. Unlike per-symbol data errors this is fatal
/// for the run; the caller reports it and exits nonzero.
#[derive(Debug)]
pub enum DeliveryError {
    Transport(String),
    Rejected { status: String, detail: String },
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            DeliveryError::Transport(msg) => write!(f, "SMS transport failed: {}.", msg),
            DeliveryError::Rejected { status, detail } => {
                write!(f, "SMS rejected by gateway (status {}): {}", status, detail)
            }
        }
    }
}

impl Error for DeliveryError {}

/// Abstract interface for delivering the aggregated alert.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver `body` to `destination`. One attempt; failure is final.
    async fn send(&self, destination: &str, body: &str) -> Result<(), DeliveryError>;
}

#[derive(Debug, Deserialize)]
struct SmsResponse {
    messages: Vec<SmsMessageStatus>,
}

#[derive(Debug, Deserialize)]
struct SmsMessageStatus {
    status: String,
    #[serde(rename = "error-text")]
    error_text: Option<String>,
}

pub struct VonageSmsSink {
    client: reqwest::Client,
    api_key: String,
    api_secret: String,
    from: String,
}

impl VonageSmsSink {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(VONAGE.sms.timeout_ms))
            .build()
            .context("building SMS HTTP client failed")?;

        Ok(Self {
            client,
            api_key: settings.vonage_api_key.clone(),
            api_secret: settings.vonage_api_secret.clone(),
            from: settings.from_phone_number.clone(),
        })
    }
}

#[async_trait]
impl NotificationSink for VonageSmsSink {
    async fn send(&self, destination: &str, body: &str) -> Result<(), DeliveryError> {
        let form = [
            ("api_key", self.api_key.as_str()),
            ("api_secret", self.api_secret.as_str()),
            ("from", self.from.as_str()),
            ("to", destination),
            ("text", body),
        ];

        let response = self
            .client
            .post(VONAGE.sms.url)
            .form(&form)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let parsed: SmsResponse = response
            .json()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        delivery_outcome(parsed)
    }
}

/// The gateway reports acceptance as status "0" on the first message part.
fn delivery_outcome(response: SmsResponse) -> Result<(), DeliveryError> {
    let Some(first) = response.messages.first() else {
        return Err(DeliveryError::Rejected {
            status: "?".to_string(),
            detail: "empty messages array".to_string(),
        });
    };

    if first.status == "0" {
        Ok(())
    } else {
        Err(DeliveryError::Rejected {
            status: first.status.clone(),
            detail: first
                .error_text
                .clone()
                .unwrap_or_else(|| "no error text".to_string()),
        })
    }
}
