//! Records of the older `sets/` schema
//!
//! EURUSD M1 and M30 also exist in the canonical schema with different
//! fields; both are kept and reported by `PresetTable::schema_conflicts`.

use crate::params::{AppliedPrice, LegacySetParams};
use crate::types::{Symbol, Timeframe};

fn price_limit(
    timeframe: Timeframe,
    period: u32,
    close_method: i32,
    max_spread: f64,
) -> LegacySetParams {
    LegacySetParams {
        symbol: Symbol::new("EURUSD"),
        timeframe,
        period,
        applied_price: AppliedPrice::Low,
        shift: 0,
        signal_open_method: 0,
        signal_open_level: 36.0,
        signal_close_method: close_method,
        signal_close_level: 36.0,
        max_spread,
        price_limit_method: Some(0),
        price_limit_level: Some(0.0),
        trailing_stop_method: None,
        trailing_profit_method: None,
        signal_base_method: None,
        signal_open_method2: None,
        signal_close_method2: None,
    }
}

fn m30() -> LegacySetParams {
    LegacySetParams {
        symbol: Symbol::new("EURUSD"),
        timeframe: Timeframe::M30,
        period: 2,
        applied_price: AppliedPrice::Low,
        shift: 0,
        signal_open_method: 195,
        signal_open_level: 36.0,
        signal_close_method: 1,
        signal_close_level: 36.0,
        max_spread: 5.0,
        price_limit_method: None,
        price_limit_level: None,
        trailing_stop_method: Some(6),
        trailing_profit_method: Some(11),
        signal_base_method: Some(0),
        signal_open_method2: Some(0),
        signal_close_method2: Some(0),
    }
}

pub fn records() -> Vec<LegacySetParams> {
    vec![
        price_limit(Timeframe::M1, 32, 0, 2.0),
        m30(),
        price_limit(Timeframe::H1, 2, 1, 6.0),
    ]
}
