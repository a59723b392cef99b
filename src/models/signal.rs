//! Assembled signal output and its building blocks.

use crate::models::indicators::IndicatorSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directional call emitted per instrument per refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Long,
    Short,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

/// Identity of a confluence factor; the order here is the vote order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    EmaStack,
    SuperTrend,
    Rsi,
    Macd,
    Adx,
    Volume,
}

/// Classification a factor contributes to the vote
///
/// `Confirming` is the volume proxy's agreement state and counts bullish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorValue {
    Bullish,
    Bearish,
    Neutral,
    Confirming,
}

/// One named vote with its fixed weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub name: FactorKind,
    pub value: FactorValue,
    pub weight: u32,
}

/// Entry/stop/target prices; non-entry levels are absent for NEUTRAL calls
/// or when ATR is unavailable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Levels {
    pub entry: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp3: Option<f64>,
}

impl Levels {
    /// Levels with only the entry pinned to the given price
    pub fn entry_only(price: f64) -> Self {
        Self {
            entry: price,
            sl: None,
            tp1: None,
            tp2: None,
            tp3: None,
        }
    }
}

/// The assembled output of one evaluation cycle for one instrument
///
/// Immutable once created; the next cycle supersedes it rather than updating
/// it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub direction: SignalDirection,
    pub confidence: Confidence,
    pub confluence_score: u32,
    pub total_factors: u32,
    pub bullish_count: u32,
    pub bearish_count: u32,
    pub factors: Vec<Factor>,
    pub indicators: IndicatorSnapshot,
    pub levels: Levels,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
