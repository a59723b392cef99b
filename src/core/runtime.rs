//! Concurrent batch evaluation across instruments
//!
//! Signal computation is independent per instrument: every task reads only
//! its own series plus the engine's immutable config, so the batch fans out
//! one task per instrument with no ordering constraints.

use crate::models::series::PriceSeries;
use crate::models::signal::Signal;
use crate::signals::engine::SignalEngine;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, error};

/// Evaluate a batch of price series concurrently, one task per instrument
///
/// Results keep the input order. A panicked task is logged and dropped from
/// the output rather than failing the whole batch.
pub async fn evaluate_batch(engine: Arc<SignalEngine>, batch: Vec<PriceSeries>) -> Vec<Signal> {
    debug!(
        instrument_count = batch.len(),
        "runtime: evaluating {} instruments",
        batch.len()
    );

    let handles: Vec<_> = batch
        .into_iter()
        .map(|series| {
            let engine = engine.clone();
            tokio::spawn(async move { engine.evaluate(&series) })
        })
        .collect();

    let mut signals = Vec::with_capacity(handles.len());
    for result in join_all(handles).await {
        match result {
            Ok(signal) => signals.push(signal),
            Err(e) => {
                error!(error = %e, "runtime: evaluation task failed: {}", e);
            }
        }
    }

    signals
}
