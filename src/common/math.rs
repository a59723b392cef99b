//! Series math primitives: EMA, RSI, ATR
//!
//! All functions operate on chronological slices (oldest first) and signal
//! insufficient input with an empty sequence or `None` rather than an error.

/// Arithmetic mean of a slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// True range of a single bar against the previous close
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Exponential moving average over the full series
///
/// Seeds with the simple average of the first `period` values, then applies
/// the smoothing factor k = 2/(period+1) to each subsequent sample. The output
/// starts at index `period - 1` of the input; returns an empty vector when the
/// input is shorter than `period`.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed = values[..period].iter().sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(values.len() - period + 1);
    let mut prev = seed;
    out.push(seed);

    for &value in &values[period..] {
        prev = value * k + prev * (1.0 - k);
        out.push(prev);
    }

    out
}

/// Relative Strength Index (Wilder's smoothing)
///
/// Seeds average gain/loss with the simple average over the first `period`
/// deltas, then smooths with `avg = (avg * (period - 1) ± delta) / period`.
/// Returns `None` with fewer than `period + 1` closes. A zero average loss
/// yields exactly 100.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;

    for i in 1..=period {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;

    for i in period + 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            avg_gain = (avg_gain * (period as f64 - 1.0) + change) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0)) / period as f64;
        } else {
            avg_gain = (avg_gain * (period as f64 - 1.0)) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0) - change) / period as f64;
        }
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Average True Range (Wilder's smoothing)
///
/// True range per bar is the greatest of high-low, |high-prevClose| and
/// |low-prevClose|; seeded as the simple average of the first `period` true
/// ranges and Wilder-smoothed afterwards. Returns `None` with fewer than
/// `period + 1` bars.
pub fn atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || highs.len() < period + 1 {
        return None;
    }

    let mut true_ranges = Vec::with_capacity(highs.len() - 1);
    for i in 1..highs.len() {
        true_ranges.push(true_range(highs[i], lows[i], closes[i - 1]));
    }

    let mut atr = mean(&true_ranges[..period])?;
    for &tr in &true_ranges[period..] {
        atr = (atr * (period as f64 - 1.0) + tr) / period as f64;
    }

    Some(atr)
}
