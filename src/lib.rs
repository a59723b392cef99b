//! Futures trading signal engine.
//!
//! Computes directional signals for a fixed catalog of futures contracts from
//! historical OHLC series: technical indicators feed a six-factor confluence
//! vote, which is turned into a LONG/SHORT/NEUTRAL call with ATR-derived
//! entry/stop/target levels. Price data acquisition, persistence and delivery
//! of the resulting signals live outside this crate.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod instruments;
pub mod logging;
pub mod models;
pub mod signals;
