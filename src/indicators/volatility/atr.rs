//! ATR (Average True Range) indicator

use crate::common::math;
use crate::config::AtrSettings;
use crate::models::indicators::AtrIndicator;

/// Calculate ATR for the configured period
///
/// Returns `None` with fewer than `period + 1` bars.
pub fn calculate_atr(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    settings: &AtrSettings,
) -> Option<AtrIndicator> {
    let value = math::atr(highs, lows, closes, settings.period)?;

    Some(AtrIndicator {
        value,
        period: settings.period as u32,
    })
}
