use {
    anyhow::{Context, Result},
    reqwest::header,
    serde::Deserialize,
    std::{error::Error, fmt, time::Duration},
};

use crate::config::NSE;
use crate::data::GlobalRateLimiter;
use crate::data::provider::SessionMeta;
use crate::domain::{PriceSample, PriceSeries};

#[derive(Debug)]
pub enum NseError {
    RequestFailed(String),
    InvalidPayload(String),
    MissingField(&'static str),
}

impl fmt::Display for NseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            NseError::RequestFailed(msg) => write!(f, "NSE API request failed: {}.", msg),
            NseError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            NseError::MissingField(field) => write!(f, "Missing field: {}", field),
        }
    }
}

impl Error for NseError {}

/// Intraday chart payload. The field really is spelled `grapthData` on the
/// wire; each entry is an `[epoch_ms, price]` pair.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    #[serde(rename = "grapthData")]
    graph_data: Vec<(i64, f64)>,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "preOpenMarket")]
    pre_open_market: Option<PreOpenMarket>,
}

#[derive(Debug, Deserialize)]
struct PreOpenMarket {
    #[serde(rename = "lastUpdateTime")]
    last_update_time: Option<String>,
}

pub(crate) fn build_client() -> Result<reqwest::Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(
        header::REFERER,
        header::HeaderValue::from_static("https://www.nseindia.com/"),
    );

    reqwest::Client::builder()
        .user_agent(NSE.client.user_agent)
        .default_headers(headers)
        .cookie_store(true)
        .timeout(Duration::from_millis(NSE.client.timeout_ms))
        .build()
        .context("building NSE HTTP client failed")
}

/// Hit the site root once so the cookie jar holds a valid session; the API
/// endpoints return 401 for cookie-less clients.
pub(crate) async fn prime_session(client: &reqwest::Client) -> Result<()> {
    client
        .get(NSE.endpoints.site_root)
        .send()
        .await
        .map_err(|e| anyhow::Error::new(describe_request_error("warm-up", &e)))?
        .error_for_status()
        .map_err(|e| anyhow::Error::new(describe_request_error("warm-up", &e)))?;
    Ok(())
}

pub(crate) async fn load_chart_series(
    client: &reqwest::Client,
    symbol: &str,
    limiter: &GlobalRateLimiter,
) -> Result<PriceSeries> {
    limiter.acquire(NSE.limits.chart_call_weight, symbol).await;

    let url = format!("{}?index={}EQN", NSE.endpoints.chart_data, symbol);
    let body = fetch_body(client, &url, symbol).await?;

    let samples = parse_chart_payload(&body)
        .map_err(anyhow::Error::new)
        .with_context(|| format!("chart payload invalid for {symbol}"))?;

    #[cfg(debug_assertions)]
    log::debug!("{symbol}: {} intraday samples", samples.len());

    Ok(PriceSeries::new(symbol, samples))
}

pub(crate) async fn load_quote_meta(
    client: &reqwest::Client,
    symbol: &str,
    limiter: &GlobalRateLimiter,
) -> Result<SessionMeta> {
    limiter.acquire(NSE.limits.quote_call_weight, symbol).await;

    let url = format!("{}?symbol={}", NSE.endpoints.quote_equity, symbol);
    let body = fetch_body(client, &url, symbol).await?;

    parse_quote_payload(&body)
        .map_err(anyhow::Error::new)
        .with_context(|| format!("quote payload invalid for {symbol}"))
}

async fn fetch_body(client: &reqwest::Client, url: &str, symbol: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| anyhow::Error::new(describe_request_error(symbol, &e)))?
        .error_for_status()
        .map_err(|e| anyhow::Error::new(describe_request_error(symbol, &e)))?;

    response
        .text()
        .await
        .map_err(|e| anyhow::Error::new(describe_request_error(symbol, &e)))
}

/// Log the transport failure at the right level and collapse it into the
/// typed error carried up to the orchestrator.
fn describe_request_error(context: &str, e: &reqwest::Error) -> NseError {
    if e.is_timeout() {
        log::warn!("{} request timed out. {}", context, e);
    } else if e.is_connect() {
        log::error!("{} connection failed: check network reachability. {}", context, e);
    } else if let Some(status) = e.status() {
        if status.as_u16() == 429 {
            log::warn!("{} rate limited by the exchange ({}).", context, status);
        } else {
            log::error!("{} server returned {}.", context, status);
        }
    } else {
        log::error!("Unexpected transport error for {}: {}", context, e);
    }
    NseError::RequestFailed(e.to_string())
}

pub(crate) fn parse_chart_payload(body: &str) -> Result<Vec<PriceSample>, NseError> {
    let parsed: ChartResponse =
        serde_json::from_str(body).map_err(|e| NseError::InvalidPayload(e.to_string()))?;

    Ok(parsed
        .graph_data
        .into_iter()
        .map(|(timestamp_ms, price)| PriceSample::new(timestamp_ms, price))
        .collect())
}

pub(crate) fn parse_quote_payload(body: &str) -> Result<SessionMeta, NseError> {
    let parsed: QuoteResponse =
        serde_json::from_str(body).map_err(|e| NseError::InvalidPayload(e.to_string()))?;

    let last_update_time = parsed
        .pre_open_market
        .and_then(|m| m.last_update_time)
        .ok_or(NseError::MissingField("preOpenMarket.lastUpdateTime"))?;

    Ok(SessionMeta { last_update_time })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_payload_parses_graph_data() {
        let body = r#"{
            "identifier": "ACCEQN",
            "name": "ACC",
            "grapthData": [[1704425700000, 2250.5], [1704425760000, 2251.0]],
            "closePrice": 2249.9
        }"#;

        let samples = parse_chart_payload(body).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0], PriceSample::new(1704425700000, 2250.5));
        assert_eq!(samples[1].price, 2251.0);
    }

    #[test]
    fn test_chart_payload_without_graph_data_is_invalid() {
        let body = r#"{"identifier": "ACCEQN", "name": "ACC"}"#;
        assert!(matches!(
            parse_chart_payload(body),
            Err(NseError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_quote_payload_extracts_last_update_time() {
        let body = r#"{
            "info": {"symbol": "ACC"},
            "preOpenMarket": {"IEP": 2250.0, "lastUpdateTime": "05-Jan-2024 09:07:00"}
        }"#;

        let meta = parse_quote_payload(body).unwrap();
        assert_eq!(meta.last_update_time, "05-Jan-2024 09:07:00");
    }

    #[test]
    fn test_quote_payload_missing_update_time_errors() {
        let body = r#"{"preOpenMarket": {"IEP": 2250.0}}"#;
        assert!(matches!(
            parse_quote_payload(body),
            Err(NseError::MissingField("preOpenMarket.lastUpdateTime"))
        ));

        let body = r#"{"info": {"symbol": "ACC"}}"#;
        assert!(matches!(
            parse_quote_payload(body),
            Err(NseError::MissingField(_))
        ));
    }
}
