//! Signal assembler: orchestrates indicators, confluence and levels per
//! instrument.

use crate::config::Config;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::structure::calculate_supertrend;
use crate::indicators::trend::{analyze_ema_stack, calculate_adx};
use crate::indicators::volatility::{analyze_volume_proxy, calculate_atr};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::series::PriceSeries;
use crate::models::signal::{Confidence, Levels, Signal, SignalDirection};
use crate::signals::{confluence, levels};
use chrono::Utc;

/// Minimum bars required before any indicator is computed
pub const MIN_BARS: usize = 50;

/// Deterministic, side-effect-free signal evaluator
///
/// Holds the shared immutable configuration; each call reads only its own
/// series, so one engine can serve any number of concurrent evaluations.
pub struct SignalEngine {
    config: Config,
}

impl SignalEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate one instrument's series into a fully populated signal
    ///
    /// Histories below [`MIN_BARS`] short-circuit to a NEUTRAL
    /// insufficient-data signal without computing any indicator.
    pub fn evaluate(&self, series: &PriceSeries) -> Signal {
        if series.closes.len() < MIN_BARS {
            return self.insufficient_data(series);
        }

        let ta = &self.config.ta;

        let ema_stack = analyze_ema_stack(&series.closes, &ta.ema);
        let rsi = calculate_rsi(&series.closes, &ta.rsi);
        let macd = calculate_macd(&series.closes, &ta.macd);
        let supertrend =
            calculate_supertrend(&series.highs, &series.lows, &series.closes, &ta.supertrend);
        let adx = calculate_adx(&series.highs, &series.lows, &series.closes, &ta.adx);
        let volume = analyze_volume_proxy(&series.closes, &series.highs, &series.lows);
        let atr = calculate_atr(&series.highs, &series.lows, &series.closes, &ta.atr);

        let vote = confluence::evaluate(
            &ema_stack,
            &supertrend,
            rsi.map(|r| r.value),
            &macd,
            &adx,
            &volume,
            &self.config,
        );

        let levels = levels::calculate(
            series.current_price,
            atr.map(|a| a.value),
            vote.direction,
            &self.config.risk_reward,
        );

        let mut snapshot = IndicatorSnapshot::new()
            .with_ema_stack(ema_stack)
            .with_macd(macd)
            .with_supertrend(supertrend)
            .with_adx(adx)
            .with_volume(volume);
        if let Some(rsi) = rsi {
            snapshot = snapshot.with_rsi(rsi);
        }
        if let Some(atr) = atr {
            snapshot = snapshot.with_atr(atr);
        }

        Signal {
            symbol: series.symbol.clone(),
            direction: vote.direction,
            confidence: vote.confidence,
            confluence_score: vote.confluence_score,
            total_factors: confluence::TOTAL_FACTORS,
            bullish_count: vote.bullish_count,
            bearish_count: vote.bearish_count,
            factors: vote.factors.to_vec(),
            indicators: snapshot,
            levels,
            price: series.current_price,
            change: series.change,
            change_percent: series.change_percent,
            timestamp: Utc::now(),
            reason: None,
        }
    }

    /// Degenerate NEUTRAL signal for histories below the minimum
    fn insufficient_data(&self, series: &PriceSeries) -> Signal {
        Signal {
            symbol: series.symbol.clone(),
            direction: SignalDirection::Neutral,
            confidence: Confidence::Low,
            confluence_score: 0,
            total_factors: confluence::TOTAL_FACTORS,
            bullish_count: 0,
            bearish_count: 0,
            factors: Vec::new(),
            indicators: IndicatorSnapshot::default(),
            levels: Levels::entry_only(series.current_price),
            price: series.current_price,
            change: series.change,
            change_percent: series.change_percent,
            timestamp: Utc::now(),
            reason: Some("Insufficient data".to_string()),
        }
    }
}
