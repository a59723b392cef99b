//! Confluence engine: six independent factors voting on direction
//!
//! Every factor carries weight 1; the vote is a plain tally with the decision
//! rule gated on ADX trend strength. The factor order is fixed so repeated
//! evaluations serialize identically.

use crate::config::Config;
use crate::models::indicators::{
    AdxIndicator, Bias, EmaStackIndicator, MacdIndicator, SuperTrendIndicator, VolumeIndicator,
};
use crate::models::signal::{Confidence, Factor, FactorKind, FactorValue, SignalDirection};

/// Number of factors in the vote
pub const TOTAL_FACTORS: u32 = 6;

/// Winning count at which confidence is graded high
pub const HIGH_CONFIDENCE_COUNT: u32 = 5;

/// Outcome of one confluence vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfluenceVote {
    pub factors: [Factor; TOTAL_FACTORS as usize],
    pub bullish_count: u32,
    pub bearish_count: u32,
    pub confluence_score: u32,
    pub direction: SignalDirection,
    pub confidence: Confidence,
}

/// Run the confluence vote over the computed indicator records
pub fn evaluate(
    ema_stack: &EmaStackIndicator,
    supertrend: &SuperTrendIndicator,
    rsi: Option<f64>,
    macd: &MacdIndicator,
    adx: &AdxIndicator,
    volume: &VolumeIndicator,
    config: &Config,
) -> ConfluenceVote {
    let factors = [
        factor(FactorKind::EmaStack, classify_bias(ema_stack.signal)),
        factor(FactorKind::SuperTrend, classify_supertrend(supertrend)),
        factor(FactorKind::Rsi, classify_rsi(rsi, config)),
        factor(FactorKind::Macd, classify_macd(macd)),
        factor(FactorKind::Adx, classify_adx(adx)),
        factor(FactorKind::Volume, classify_volume(volume)),
    ];

    let mut bullish_count = 0u32;
    let mut bearish_count = 0u32;
    for f in &factors {
        match f.value {
            FactorValue::Bullish | FactorValue::Confirming => bullish_count += 1,
            FactorValue::Bearish => bearish_count += 1,
            FactorValue::Neutral => {}
        }
    }

    let confluence_score = bullish_count.max(bearish_count);
    let threshold = config.confluence_threshold;

    let (direction, confidence) =
        if bullish_count >= threshold && bullish_count > bearish_count && adx.trending {
            (SignalDirection::Long, grade(bullish_count))
        } else if bearish_count >= threshold && bearish_count > bullish_count && adx.trending {
            (SignalDirection::Short, grade(bearish_count))
        } else {
            (SignalDirection::Neutral, Confidence::Low)
        };

    ConfluenceVote {
        factors,
        bullish_count,
        bearish_count,
        confluence_score,
        direction,
        confidence,
    }
}

fn factor(name: FactorKind, value: FactorValue) -> Factor {
    Factor {
        name,
        value,
        weight: 1,
    }
}

fn grade(winning_count: u32) -> Confidence {
    if winning_count >= HIGH_CONFIDENCE_COUNT {
        Confidence::High
    } else {
        Confidence::Moderate
    }
}

fn classify_bias(bias: Bias) -> FactorValue {
    match bias {
        Bias::Bullish => FactorValue::Bullish,
        Bias::Bearish => FactorValue::Bearish,
        Bias::Neutral => FactorValue::Neutral,
    }
}

// A non-bullish SuperTrend counts bearish; the neutral record only occurs for
// histories too short to reach the engine in the first place.
fn classify_supertrend(supertrend: &SuperTrendIndicator) -> FactorValue {
    if supertrend.trend == Bias::Bullish {
        FactorValue::Bullish
    } else {
        FactorValue::Bearish
    }
}

fn classify_rsi(rsi: Option<f64>, config: &Config) -> FactorValue {
    match rsi {
        Some(value) if value < config.ta.rsi.oversold => FactorValue::Bullish,
        Some(value) if value > config.ta.rsi.overbought => FactorValue::Bearish,
        _ => FactorValue::Neutral,
    }
}

// MACD has no neutral state: the histogram is either above zero or not.
fn classify_macd(macd: &MacdIndicator) -> FactorValue {
    if macd.histogram > 0.0 {
        FactorValue::Bullish
    } else {
        FactorValue::Bearish
    }
}

fn classify_adx(adx: &AdxIndicator) -> FactorValue {
    if !adx.trending {
        return FactorValue::Neutral;
    }
    if adx.plus_di > adx.minus_di {
        FactorValue::Bullish
    } else {
        FactorValue::Bearish
    }
}

fn classify_volume(volume: &VolumeIndicator) -> FactorValue {
    if volume.expanding {
        FactorValue::Confirming
    } else {
        FactorValue::Neutral
    }
}
