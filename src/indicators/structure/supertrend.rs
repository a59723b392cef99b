//! SuperTrend band-flip indicator

use crate::common::math;
use crate::config::SuperTrendSettings;
use crate::models::indicators::{Bias, SuperTrendIndicator};

/// Classify the latest close against ATR bands around the last bar's midpoint
///
/// Bands sit at (lastHigh+lastLow)/2 ± multiplier * ATR(period). A close above
/// the upper band is bullish anchored at the lower band; below the lower band
/// is bearish anchored at the upper band. Between the bands the close is
/// classified by which side of the band midpoint it sits on. Returns the
/// neutral/zero record when ATR cannot be computed.
pub fn calculate_supertrend(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    settings: &SuperTrendSettings,
) -> SuperTrendIndicator {
    let atr = match math::atr(highs, lows, closes, settings.period) {
        Some(atr) => atr,
        None => return SuperTrendIndicator::neutral(),
    };

    let last_close = closes.last().copied().unwrap_or(0.0);
    let last_high = highs.last().copied().unwrap_or(0.0);
    let last_low = lows.last().copied().unwrap_or(0.0);
    let hl2 = (last_high + last_low) / 2.0;

    let upper_band = hl2 + settings.multiplier * atr;
    let lower_band = hl2 - settings.multiplier * atr;

    if last_close > upper_band {
        return SuperTrendIndicator {
            trend: Bias::Bullish,
            value: lower_band,
            upper_band,
            lower_band,
        };
    }
    if last_close < lower_band {
        return SuperTrendIndicator {
            trend: Bias::Bearish,
            value: upper_band,
            upper_band,
            lower_band,
        };
    }

    let mid_point = (upper_band + lower_band) / 2.0;
    if last_close > mid_point {
        SuperTrendIndicator {
            trend: Bias::Bullish,
            value: lower_band,
            upper_band,
            lower_band,
        }
    } else {
        SuperTrendIndicator {
            trend: Bias::Bearish,
            value: upper_band,
            upper_band,
            lower_band,
        }
    }
}
