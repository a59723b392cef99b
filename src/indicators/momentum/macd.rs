//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::config::MacdSettings;
use crate::models::indicators::MacdIndicator;

/// Calculate MACD from closes
///
/// MACD line = EMA(fast) - EMA(slow), aligned on the tail: the fast EMA is
/// offset by `slow - fast` samples so both sequences end on the same bar.
/// Signal line = EMA(signal) of the MACD line; histogram = MACD - signal.
/// Returns the all-zero record when either EMA is empty.
pub fn calculate_macd(closes: &[f64], settings: &MacdSettings) -> MacdIndicator {
    let fast_ema = math::ema(closes, settings.fast);
    let slow_ema = math::ema(closes, settings.slow);

    if fast_ema.is_empty() || slow_ema.is_empty() {
        return MacdIndicator::default();
    }

    let offset = settings.slow - settings.fast;
    let macd_line: Vec<f64> = slow_ema
        .iter()
        .enumerate()
        .map(|(i, slow)| fast_ema[i + offset] - slow)
        .collect();

    let signal_line = math::ema(&macd_line, settings.signal);

    let macd = macd_line.last().copied().unwrap_or(0.0);
    let signal = signal_line.last().copied().unwrap_or(0.0);

    MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
    }
}
