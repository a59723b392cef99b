//! EMA stack classification across the four configured periods

use crate::common::math;
use crate::config::EmaSettings;
use crate::models::indicators::{Bias, EmaStackIndicator};

/// Classify the EMA stack against the latest close
///
/// Bullish when the EMAs are strictly ordered fastest-over-slowest and price
/// sits above all four; bearish for the mirror. Anything in between falls back
/// to comparing price against the second EMA (the 21-period in the default
/// stack). An EMA whose period exceeds the history length falls back to the
/// last close.
pub fn analyze_ema_stack(closes: &[f64], settings: &EmaSettings) -> EmaStackIndicator {
    let price = closes.last().copied().unwrap_or(0.0);

    let mut periods = [0u32; 4];
    let mut values = [0.0f64; 4];
    for (i, &period) in settings.periods.iter().enumerate() {
        periods[i] = period as u32;
        values[i] = math::ema(closes, period).last().copied().unwrap_or(price);
    }

    let bullish_stack = values[0] > values[1] && values[1] > values[2] && values[2] > values[3];
    let bearish_stack = values[0] < values[1] && values[1] < values[2] && values[2] < values[3];
    let price_above_all = values.iter().all(|&ema| price > ema);
    let price_below_all = values.iter().all(|&ema| price < ema);

    let signal = if bullish_stack && price_above_all {
        Bias::Bullish
    } else if bearish_stack && price_below_all {
        Bias::Bearish
    } else if price > values[1] {
        Bias::Bullish
    } else if price < values[1] {
        Bias::Bearish
    } else {
        Bias::Neutral
    };

    EmaStackIndicator {
        signal,
        periods,
        values,
        bullish_stack,
        bearish_stack,
    }
}
