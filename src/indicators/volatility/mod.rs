//! Volatility indicators: ATR, range-based volume proxy

pub mod atr;
pub mod volume_proxy;

pub use atr::*;
pub use volume_proxy::*;
