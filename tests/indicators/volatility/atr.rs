//! Unit tests for the ATR indicator wrapper

use futrix::config::AtrSettings;
use futrix::indicators::volatility::calculate_atr;

#[test]
fn atr_records_the_configured_period() {
    let closes = vec![100.0; 30];
    let highs = vec![101.5; 30];
    let lows = vec![99.5; 30];
    let atr = calculate_atr(&highs, &lows, &closes, &AtrSettings::default()).unwrap();
    assert_eq!(atr.period, 14);
    assert!((atr.value - 2.0).abs() < 1e-9);
}

#[test]
fn atr_is_none_below_minimum_history() {
    let closes = vec![100.0; 14];
    let highs = vec![101.0; 14];
    let lows = vec![99.0; 14];
    assert!(calculate_atr(&highs, &lows, &closes, &AtrSettings::default()).is_none());
}
