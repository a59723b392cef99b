//! Unit tests for the RSI indicator wrapper

use futrix::config::RsiSettings;
use futrix::indicators::momentum::calculate_rsi;

#[test]
fn rsi_records_the_configured_period() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i % 5) as f64).collect();
    let rsi = calculate_rsi(&closes, &RsiSettings::default()).unwrap();
    assert_eq!(rsi.period, 14);
    assert!((0.0..=100.0).contains(&rsi.value));
}

#[test]
fn rsi_is_none_below_minimum_history() {
    let closes = vec![100.0; 10];
    assert!(calculate_rsi(&closes, &RsiSettings::default()).is_none());
}

#[test]
fn rsi_saturates_at_100_without_losses() {
    let closes: Vec<f64> = (0..30).map(|i| 50.0 + i as f64 * 0.25).collect();
    let rsi = calculate_rsi(&closes, &RsiSettings::default()).unwrap();
    assert_eq!(rsi.value, 100.0);
}
