//! Per-indicator result records, recomputed fresh every cycle.

use serde::{Deserialize, Serialize};

/// Directional bias reported by an individual indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

/// Activity regime reported by the volume proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeState {
    High,
    Low,
    Normal,
    Neutral,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

/// EMA stack snapshot: one value per configured period, fastest first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaStackIndicator {
    pub signal: Bias,
    pub periods: [u32; 4],
    pub values: [f64; 4],
    pub bullish_stack: bool,
    pub bearish_stack: bool,
}

/// SuperTrend band classification; `value` is the trailing anchor band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuperTrendIndicator {
    pub trend: Bias,
    pub value: f64,
    pub upper_band: f64,
    pub lower_band: f64,
}

impl SuperTrendIndicator {
    /// Neutral record used when ATR cannot be computed
    pub fn neutral() -> Self {
        Self {
            trend: Bias::Neutral,
            value: 0.0,
            upper_band: 0.0,
            lower_band: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub value: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub trending: bool,
}

/// Volatility-based liquidity proxy (true volume is not available upstream)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeIndicator {
    pub signal: VolumeState,
    pub strength: f64,
    pub expanding: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: u32,
}

/// Full indicator snapshot carried on every assembled signal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_stack: Option<EmaStackIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supertrend: Option<SuperTrendIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adx: Option<AdxIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<AtrIndicator>,
}

impl IndicatorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ema_stack(mut self, ema_stack: EmaStackIndicator) -> Self {
        self.ema_stack = Some(ema_stack);
        self
    }

    pub fn with_rsi(mut self, rsi: RsiIndicator) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_supertrend(mut self, supertrend: SuperTrendIndicator) -> Self {
        self.supertrend = Some(supertrend);
        self
    }

    pub fn with_adx(mut self, adx: AdxIndicator) -> Self {
        self.adx = Some(adx);
        self
    }

    pub fn with_volume(mut self, volume: VolumeIndicator) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_atr(mut self, atr: AtrIndicator) -> Self {
        self.atr = Some(atr);
        self
    }
}
