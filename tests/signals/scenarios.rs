//! Market scenario tests for the full evaluation pipeline

use futrix::config::Config;
use futrix::models::series::PriceSeries;
use futrix::models::signal::{Confidence, SignalDirection};
use futrix::signals::engine::SignalEngine;

fn series_from_closes(
    symbol: &str,
    closes: Vec<f64>,
    highs: Vec<f64>,
    lows: Vec<f64>,
) -> PriceSeries {
    let current = *closes.last().unwrap();
    let previous = closes[closes.len() - 2];
    PriceSeries::new(symbol, closes, highs, lows, current, previous)
}

fn strong_uptrend(bars: usize) -> PriceSeries {
    let closes: Vec<f64> = (0..bars)
        .map(|i| 100.0 * 1.005f64.powi(i as i32))
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c * 1.002).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c * 0.99).collect();
    series_from_closes("ES=F", closes, highs, lows)
}

fn accelerating_downtrend(bars: usize) -> PriceSeries {
    // Quadratic decline: the drop steepens bar over bar, with the close
    // pinned near the bottom of each bar's range.
    let closes: Vec<f64> = (0..bars)
        .map(|i| 1000.0 - 0.01 * (i as f64) * (i as f64))
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c * 1.004).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c * 0.998).collect();
    series_from_closes("CL=F", closes, highs, lows)
}

fn ranging_market(bars: usize, min: f64, max: f64) -> PriceSeries {
    let closes: Vec<f64> = (0..bars)
        .map(|i| {
            let cycle = (i % 20) as f64 / 20.0;
            min + (max - min) * cycle
        })
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.4).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.4).collect();
    series_from_closes("ZC=F", closes, highs, lows)
}

#[test]
fn strong_uptrend_goes_long() {
    let engine = SignalEngine::new(Config::default());
    let signal = engine.evaluate(&strong_uptrend(250));
    assert_eq!(signal.direction, SignalDirection::Long);
    assert_eq!(signal.confidence, Confidence::High);
    assert!(signal.levels.sl.is_some());
}

#[test]
fn accelerating_downtrend_goes_short() {
    let engine = SignalEngine::new(Config::default());
    let signal = engine.evaluate(&accelerating_downtrend(250));
    assert_eq!(signal.direction, SignalDirection::Short);
    assert_eq!(signal.confidence, Confidence::Moderate);
    assert_eq!(signal.bearish_count, 4);
    assert_eq!(signal.bullish_count, 1);
    let sl = signal.levels.sl.unwrap();
    assert!(sl > signal.price);
    assert!(signal.levels.tp1.unwrap() < signal.price);
}

#[test]
fn ranging_market_keeps_vote_invariants() {
    let engine = SignalEngine::new(Config::default());
    let signal = engine.evaluate(&ranging_market(250, 95.0, 105.0));

    assert!(signal.bullish_count + signal.bearish_count <= signal.total_factors);
    assert_eq!(
        signal.confluence_score,
        signal.bullish_count.max(signal.bearish_count)
    );
    assert_eq!(signal.factors.len(), 6);
    if signal.direction == SignalDirection::Neutral {
        assert_eq!(signal.confidence, Confidence::Low);
        assert_eq!(signal.levels.sl, None);
    }
}

#[test]
fn every_scenario_reports_all_six_factors() {
    let engine = SignalEngine::new(Config::default());
    for series in [
        strong_uptrend(250),
        accelerating_downtrend(250),
        ranging_market(250, 95.0, 105.0),
    ] {
        let signal = engine.evaluate(&series);
        assert_eq!(signal.total_factors, 6);
        assert_eq!(signal.factors.len(), 6);
        assert_eq!(signal.price, series.current_price);
    }
}
