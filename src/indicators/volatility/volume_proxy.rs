//! Range-based volume proxy
//!
//! The upstream feed carries no volume, so recent bar ranges stand in as a
//! liquidity/participation gauge: average high-low range over the most recent
//! 5 bars compared against the preceding 15.

use crate::common::math;
use crate::models::indicators::{VolumeIndicator, VolumeState};

const RECENT_BARS: usize = 5;
const LOOKBACK_BARS: usize = 20;

/// Classify recent range expansion against the prior baseline
///
/// ratio > 1.2 reads as high activity, < 0.8 as low, otherwise normal;
/// `expanding` is any ratio above 1. Requires at least 20 bars, else returns
/// the neutral record with strength 50.
pub fn analyze_volume_proxy(closes: &[f64], highs: &[f64], lows: &[f64]) -> VolumeIndicator {
    if closes.len() < LOOKBACK_BARS {
        return VolumeIndicator {
            signal: VolumeState::Neutral,
            strength: 50.0,
            expanding: false,
        };
    }

    let n = closes.len();
    let ranges: Vec<f64> = (n - LOOKBACK_BARS..n).map(|i| highs[i] - lows[i]).collect();
    let (older, recent) = ranges.split_at(LOOKBACK_BARS - RECENT_BARS);

    let recent_avg = math::mean(recent).unwrap_or(0.0);
    let older_avg = math::mean(older).unwrap_or(0.0);

    let ratio = recent_avg / older_avg;
    let strength = (ratio * 50.0).clamp(0.0, 100.0);

    let signal = if ratio > 1.2 {
        VolumeState::High
    } else if ratio < 0.8 {
        VolumeState::Low
    } else {
        VolumeState::Normal
    };

    VolumeIndicator {
        signal,
        strength,
        expanding: ratio > 1.0,
    }
}
