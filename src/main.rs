use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use candle_scout::{
    BatchScanner, Cli, NotificationSink, NseProvider, SYMBOLS, Settings, VonageSmsSink,
    format_alert,
};

#[tokio::main]
async fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Debug)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("candle_scout"), my_code_level)
        .init();

    let args = Cli::parse();

    // Resolve credentials up front so a misconfigured run fails before any
    // market-data traffic.
    let settings = if args.dry_run {
        None
    } else {
        Some(Settings::from_env().context("notification settings incomplete")?)
    };

    let provider = NseProvider::new().context("building NSE client failed")?;
    provider
        .prime_session()
        .await
        .context("priming NSE session failed")?;

    let scanner = BatchScanner::new(Arc::new(provider));
    let batch = scanner.run_batch(SYMBOLS).await;

    let Some(body) = format_alert(&batch) else {
        log::info!(
            "Scan complete: {} symbols, no patterns detected.",
            SYMBOLS.len()
        );
        return Ok(());
    };

    log::info!(
        "Scan complete: {} of {} symbols matched.",
        batch.len(),
        SYMBOLS.len()
    );

    match settings {
        Some(settings) => {
            let sink = VonageSmsSink::new(&settings)?;
            sink.send(&settings.to_phone_number, &body).await?;
            log::info!("Alert delivered to {}.", settings.to_phone_number);
        }
        None => println!("{body}"),
    }

    Ok(())
}
