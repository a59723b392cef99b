//! Unit tests for SuperTrend

use futrix::config::SuperTrendSettings;
use futrix::indicators::structure::calculate_supertrend;
use futrix::models::indicators::Bias;

fn flat_bars(bars: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let closes = vec![100.0; bars];
    let highs = vec![100.1; bars];
    let lows = vec![99.9; bars];
    (highs, lows, closes)
}

#[test]
fn insufficient_history_is_neutral() {
    let (highs, lows, closes) = flat_bars(5);
    let st = calculate_supertrend(&highs, &lows, &closes, &SuperTrendSettings::default());
    assert_eq!(st.trend, Bias::Neutral);
    assert_eq!(st.value, 0.0);
}

#[test]
fn close_above_band_midpoint_is_bullish() {
    let closes = vec![100.0; 40];
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.2).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.8).collect();
    let st = calculate_supertrend(&highs, &lows, &closes, &SuperTrendSettings::default());
    assert_eq!(st.trend, Bias::Bullish);
    assert_eq!(st.value, st.lower_band);
}

#[test]
fn close_below_band_midpoint_is_bearish() {
    let closes = vec![100.0; 40];
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.8).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.2).collect();
    let st = calculate_supertrend(&highs, &lows, &closes, &SuperTrendSettings::default());
    assert_eq!(st.trend, Bias::Bearish);
    assert_eq!(st.value, st.upper_band);
}

#[test]
fn breakout_above_upper_band_anchors_at_lower_band() {
    // Tight range, then a wide expansion bar closing on its high: the close
    // clears hl2 + 3 * ATR because the single bar barely moves the ATR.
    let (mut highs, mut lows, mut closes) = flat_bars(30);
    highs.push(103.0);
    lows.push(100.0);
    closes.push(103.0);
    let st = calculate_supertrend(&highs, &lows, &closes, &SuperTrendSettings::default());
    assert_eq!(st.trend, Bias::Bullish);
    assert_eq!(st.value, st.lower_band);
    assert!(closes.last().copied().unwrap() > st.upper_band);
}

#[test]
fn breakdown_below_lower_band_anchors_at_upper_band() {
    let (mut highs, mut lows, mut closes) = flat_bars(30);
    highs.push(100.0);
    lows.push(97.0);
    closes.push(97.0);
    let st = calculate_supertrend(&highs, &lows, &closes, &SuperTrendSettings::default());
    assert_eq!(st.trend, Bias::Bearish);
    assert_eq!(st.value, st.upper_band);
    assert!(closes.last().copied().unwrap() < st.lower_band);
}
