//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::config::RsiSettings;
use crate::models::indicators::RsiIndicator;

/// Calculate RSI for the configured period
///
/// Returns `None` with fewer than `period + 1` closes.
pub fn calculate_rsi(closes: &[f64], settings: &RsiSettings) -> Option<RsiIndicator> {
    let value = math::rsi(closes, settings.period)?;

    Some(RsiIndicator {
        value,
        period: settings.period as u32,
    })
}
