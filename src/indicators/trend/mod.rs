//! Trend indicators: EMA stack, ADX

pub mod adx;
pub mod ema_stack;

pub use adx::*;
pub use ema_stack::*;
