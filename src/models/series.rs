//! Price series boundary contract supplied by the external data source.

use serde::{Deserialize, Serialize};

/// Chronological OHLC history for one instrument, oldest bar first
///
/// The data source is responsible for filtering out null samples and supplying
/// equal-length close/high/low sequences; [`is_aligned`](Self::is_aligned) lets
/// callers verify that before handing the series to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub current_price: f64,
    pub previous_close: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
}

impl PriceSeries {
    /// Build a series, deriving change and change-percent from the last trade
    /// and previous close
    pub fn new(
        symbol: impl Into<String>,
        closes: Vec<f64>,
        highs: Vec<f64>,
        lows: Vec<f64>,
        current_price: f64,
        previous_close: f64,
    ) -> Self {
        let change = current_price - previous_close;
        let change_percent = if previous_close != 0.0 {
            (change / previous_close) * 100.0
        } else {
            0.0
        };

        Self {
            symbol: symbol.into(),
            closes,
            highs,
            lows,
            current_price,
            previous_close,
            change,
            change_percent,
        }
    }

    /// Number of bars in the series
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Whether high/low/close sequences have matching lengths
    pub fn is_aligned(&self) -> bool {
        self.highs.len() == self.closes.len() && self.lows.len() == self.closes.len()
    }
}
