//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod series;
pub mod signal;

pub use indicators::{
    AdxIndicator, AtrIndicator, Bias, EmaStackIndicator, IndicatorSnapshot, MacdIndicator,
    RsiIndicator, SuperTrendIndicator, VolumeIndicator, VolumeState,
};
pub use series::PriceSeries;
pub use signal::{Confidence, Factor, FactorKind, FactorValue, Levels, Signal, SignalDirection};
