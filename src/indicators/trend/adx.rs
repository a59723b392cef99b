//! ADX (Average Directional Index) with +DI/-DI

use crate::common::math;
use crate::config::AdxSettings;
use crate::models::indicators::AdxIndicator;

/// Calculate ADX and the directional indicators
///
/// Directional movement per bar: +DM is the up-move when it exceeds the
/// down-move and is positive, else 0 (symmetric for -DM). TR, +DM and -DM are
/// Wilder-smoothed as running sums (`s = s - s/period + x`), seeded with the
/// plain sum of the first `period` values. DX = 100 * |+DI - -DI| / (+DI + -DI),
/// reported as the ADX value with 25 substituted when it degenerates to zero.
///
/// With fewer than `2 * period` bars the history is too short to smooth, and
/// the function returns the fixed `{ adx: 25, trending: true }` default.
pub fn calculate_adx(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    settings: &AdxSettings,
) -> AdxIndicator {
    let period = settings.period;

    if highs.len() < period * 2 {
        return AdxIndicator {
            value: 25.0,
            plus_di: 0.0,
            minus_di: 0.0,
            trending: true,
        };
    }

    let mut true_ranges = Vec::with_capacity(highs.len() - 1);
    let mut plus_dm = Vec::with_capacity(highs.len() - 1);
    let mut minus_dm = Vec::with_capacity(highs.len() - 1);

    for i in 1..highs.len() {
        true_ranges.push(math::true_range(highs[i], lows[i], closes[i - 1]));

        let up_move = highs[i] - highs[i - 1];
        let down_move = lows[i - 1] - lows[i];

        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    let mut smoothed_tr: f64 = true_ranges[..period].iter().sum();
    let mut smoothed_plus_dm: f64 = plus_dm[..period].iter().sum();
    let mut smoothed_minus_dm: f64 = minus_dm[..period].iter().sum();

    for i in period..true_ranges.len() {
        smoothed_tr = smoothed_tr - (smoothed_tr / period as f64) + true_ranges[i];
        smoothed_plus_dm = smoothed_plus_dm - (smoothed_plus_dm / period as f64) + plus_dm[i];
        smoothed_minus_dm = smoothed_minus_dm - (smoothed_minus_dm / period as f64) + minus_dm[i];
    }

    let plus_di = if smoothed_tr > 0.0 {
        (smoothed_plus_dm / smoothed_tr) * 100.0
    } else {
        0.0
    };
    let minus_di = if smoothed_tr > 0.0 {
        (smoothed_minus_dm / smoothed_tr) * 100.0
    } else {
        0.0
    };

    let di_sum = plus_di + minus_di;
    let dx = if di_sum > 0.0 {
        ((plus_di - minus_di).abs() / di_sum) * 100.0
    } else {
        0.0
    };

    AdxIndicator {
        value: if dx > 0.0 { dx } else { 25.0 },
        plus_di,
        minus_di,
        trending: dx > settings.threshold,
    }
}
