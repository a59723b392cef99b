//! Unit tests for series-math primitives

use futrix::common::math;

#[test]
fn ema_of_constant_series_is_constant() {
    let values = vec![5.0; 30];
    let ema = math::ema(&values, 10);
    assert_eq!(ema.len(), 21);
    for value in ema {
        assert!((value - 5.0).abs() < 1e-9);
    }
}

#[test]
fn ema_short_input_returns_empty() {
    let values = vec![1.0, 2.0, 3.0];
    assert!(math::ema(&values, 5).is_empty());
}

#[test]
fn ema_output_starts_at_seed_bar() {
    let values: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    assert_eq!(math::ema(&values, 12).len(), 40 - 12 + 1);
}

#[test]
fn rsi_of_strictly_rising_closes_is_100() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    assert_eq!(math::rsi(&closes, 14), Some(100.0));
}

#[test]
fn rsi_of_strictly_falling_closes_is_0() {
    // Zero average gain with positive average loss sits on the other boundary.
    let closes: Vec<f64> = (0..30).map(|i| 100.0 - i as f64 * 0.5).collect();
    let rsi = math::rsi(&closes, 14).unwrap();
    assert!(rsi.abs() < 1e-9);
}

#[test]
fn rsi_requires_period_plus_one_closes() {
    assert!(math::rsi(&vec![100.0; 14], 14).is_none());
    assert!(math::rsi(&vec![100.0; 15], 14).is_some());
}

#[test]
fn rsi_stays_within_bounds_on_mixed_closes() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + (i % 7) as f64 - (i % 3) as f64 * 1.5)
        .collect();
    let rsi = math::rsi(&closes, 14).unwrap();
    assert!((0.0..=100.0).contains(&rsi));
}

#[test]
fn atr_is_never_negative() {
    let closes: Vec<f64> = (0..50).map(|i| 100.0 - (i % 9) as f64).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 1.5).collect();
    let atr = math::atr(&highs, &lows, &closes, 14).unwrap();
    assert!(atr >= 0.0);
}

#[test]
fn atr_of_constant_range_bars_equals_the_range() {
    let closes = vec![100.0; 40];
    let highs = vec![101.0; 40];
    let lows = vec![99.0; 40];
    let atr = math::atr(&highs, &lows, &closes, 14).unwrap();
    assert!((atr - 2.0).abs() < 1e-9);
}

#[test]
fn atr_requires_period_plus_one_bars() {
    let closes = vec![100.0; 14];
    let highs = vec![101.0; 14];
    let lows = vec![99.0; 14];
    assert!(math::atr(&highs, &lows, &closes, 14).is_none());
}

#[test]
fn true_range_accounts_for_gaps() {
    // Gap down: the previous close dominates both intra-bar spans.
    assert_eq!(math::true_range(105.0, 100.0, 110.0), 10.0);
    assert_eq!(math::true_range(105.0, 100.0, 102.0), 5.0);
}

#[test]
fn mean_of_empty_slice_is_none() {
    assert!(math::mean(&[]).is_none());
    assert_eq!(math::mean(&[2.0, 4.0]), Some(3.0));
}
