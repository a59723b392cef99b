//! Engine configuration: technical-analysis parameters and risk settings
//!
//! All tunables are passed explicitly into the engine rather than read from
//! ambient state, so evaluation stays a pure function of series + config.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Name of the environment the process runs in ("production", "sandbox", ...)
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// EMA stack periods, fastest first
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmaSettings {
    pub periods: [usize; 4],
}

impl Default for EmaSettings {
    fn default() -> Self {
        Self {
            periods: [9, 21, 50, 200],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiSettings {
    pub period: usize,
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for RsiSettings {
    fn default() -> Self {
        Self {
            period: 14,
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdSettings {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdSettings {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SuperTrendSettings {
    pub period: usize,
    pub multiplier: f64,
}

impl Default for SuperTrendSettings {
    fn default() -> Self {
        Self {
            period: 10,
            multiplier: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdxSettings {
    pub period: usize,
    pub threshold: f64,
}

impl Default for AdxSettings {
    fn default() -> Self {
        Self {
            period: 14,
            threshold: 25.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtrSettings {
    pub period: usize,
}

impl Default for AtrSettings {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// Technical-analysis parameter block
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TaSettings {
    pub ema: EmaSettings,
    pub rsi: RsiSettings,
    pub macd: MacdSettings,
    pub supertrend: SuperTrendSettings,
    pub adx: AdxSettings,
    pub atr: AtrSettings,
}

/// ATR multiples for stop-loss and the three take-profit targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskRewardSettings {
    pub sl_multiplier: f64,
    pub tp1_multiplier: f64,
    pub tp2_multiplier: f64,
    pub tp3_multiplier: f64,
}

impl Default for RiskRewardSettings {
    fn default() -> Self {
        Self {
            sl_multiplier: 1.0,
            tp1_multiplier: 1.5,
            tp2_multiplier: 2.5,
            tp3_multiplier: 4.0,
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ta: TaSettings,
    pub confluence_threshold: u32,
    pub risk_reward: RiskRewardSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ta: TaSettings::default(),
            confluence_threshold: 4,
            risk_reward: RiskRewardSettings::default(),
        }
    }
}

impl Config {
    /// Build a config from defaults plus environment overrides
    ///
    /// `CONFLUENCE_THRESHOLD` accepts 1..=6; anything else is logged and
    /// ignored. TA parameters and risk multiples are fixed constants.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("CONFLUENCE_THRESHOLD") {
            match raw.parse::<u32>() {
                Ok(value) if (1..=6).contains(&value) => {
                    config.confluence_threshold = value;
                }
                _ => {
                    warn!(
                        value = %raw,
                        "config: ignoring invalid CONFLUENCE_THRESHOLD '{}'",
                        raw
                    );
                }
            }
        }

        config
    }
}
