//! Trade level calculator: entry, stop and targets from ATR risk multiples

use crate::config::RiskRewardSettings;
use crate::models::signal::{Levels, SignalDirection};

/// Derive entry/stop/target prices from the current price and ATR
///
/// One ATR is the risk unit: the stop sits one `sl_multiplier` away and the
/// three targets at the fixed tp multiples in the trade direction. NEUTRAL
/// calls and missing ATR pin the entry and leave every other level empty.
pub fn calculate(
    price: f64,
    atr: Option<f64>,
    direction: SignalDirection,
    risk_reward: &RiskRewardSettings,
) -> Levels {
    let atr = match (atr, direction) {
        (Some(atr), SignalDirection::Long | SignalDirection::Short) => atr,
        _ => return Levels::entry_only(price),
    };

    match direction {
        SignalDirection::Long => Levels {
            entry: price,
            sl: Some(price - atr * risk_reward.sl_multiplier),
            tp1: Some(price + atr * risk_reward.tp1_multiplier),
            tp2: Some(price + atr * risk_reward.tp2_multiplier),
            tp3: Some(price + atr * risk_reward.tp3_multiplier),
        },
        SignalDirection::Short => Levels {
            entry: price,
            sl: Some(price + atr * risk_reward.sl_multiplier),
            tp1: Some(price - atr * risk_reward.tp1_multiplier),
            tp2: Some(price - atr * risk_reward.tp2_multiplier),
            tp3: Some(price - atr * risk_reward.tp3_multiplier),
        },
        SignalDirection::Neutral => Levels::entry_only(price),
    }
}
