//! Batch signal worker
//!
//! Reads a market snapshot (JSON array of price series, produced by the
//! external data source), evaluates every instrument concurrently and writes
//! the assembled signals to stdout as JSON.

use futrix::config::Config;
use futrix::core::runtime::evaluate_batch;
use futrix::instruments;
use futrix::logging;
use futrix::models::series::PriceSeries;
use futrix::signals::engine::SignalEngine;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "snapshot.json".to_string());

    info!(path = %path, "worker: loading market snapshot from {}", path);

    let file = File::open(&path)?;
    let snapshot: Vec<PriceSeries> = serde_json::from_reader(BufReader::new(file))?;

    // Misaligned series are the data source's breach of contract: skip the
    // instrument for this cycle instead of feeding the engine bad input.
    let (batch, skipped): (Vec<_>, Vec<_>) =
        snapshot.into_iter().partition(|series| series.is_aligned());

    for series in &skipped {
        warn!(
            symbol = %series.symbol,
            "worker: skipping {}: misaligned high/low/close lengths",
            series.symbol
        );
    }

    for series in &batch {
        if instruments::find(&series.symbol).is_none() {
            warn!(
                symbol = %series.symbol,
                "worker: {} is not in the tracked catalog",
                series.symbol
            );
        }
    }

    info!(
        instrument_count = batch.len(),
        skipped = skipped.len(),
        threshold = config.confluence_threshold,
        "worker: evaluating {} instruments",
        batch.len()
    );

    let engine = Arc::new(SignalEngine::new(config));
    let signals = evaluate_batch(engine, batch).await;

    for signal in &signals {
        let decimals = instruments::price_decimals(&signal.symbol);
        info!(
            symbol = %signal.symbol,
            direction = ?signal.direction,
            confidence = ?signal.confidence,
            score = signal.confluence_score,
            "worker: {} {:?} ({}/{} factors) @ {:.prec$}",
            signal.symbol,
            signal.direction,
            signal.confluence_score,
            signal.total_factors,
            signal.price,
            prec = decimals,
        );
    }

    println!("{}", serde_json::to_string_pretty(&signals)?);

    Ok(())
}
