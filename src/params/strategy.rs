//! Stochastic strategy parameter set
//!
//! Method fields are opaque integer codes. This crate stores them; the
//! external strategy runtime decides what each code means.

use serde::{Deserialize, Serialize};

/// Strategy-level parameters for one symbol/timeframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StgParams {
    /// Fixed lot size (0 lets the runtime size positions)
    pub lot_size: f64,
    pub signal_open_method: i32,
    pub signal_open_filter: i32,
    pub signal_open_level: f64,
    pub signal_open_boost: i32,
    pub signal_close_method: i32,
    pub signal_close_level: f64,
    pub price_profit_method: i32,
    pub price_profit_level: f64,
    pub price_stop_method: i32,
    pub price_stop_level: f64,
    pub tick_filter_method: i32,
    /// Maximum spread in pips (0 disables the filter)
    pub max_spread: f64,
}

impl Default for StgParams {
    fn default() -> Self {
        Self {
            lot_size: 0.0,
            signal_open_method: 0,
            signal_open_filter: 1,
            signal_open_level: 0.0,
            signal_open_boost: 0,
            signal_close_method: 0,
            signal_close_level: 0.0,
            price_profit_method: 0,
            price_profit_level: 0.0,
            price_stop_method: 0,
            price_stop_level: 2.0,
            tick_filter_method: 1,
            max_spread: 0.0,
        }
    }
}

impl StgParams {
    /// Open and close signal method/level in one step
    pub fn with_signals(self, open: (i32, f64), close: (i32, f64)) -> Self {
        Self {
            signal_open_method: open.0,
            signal_open_level: open.1,
            signal_close_method: close.0,
            signal_close_level: close.1,
            ..self
        }
    }

    pub fn with_price_stop(self, method: i32, level: f64) -> Self {
        Self {
            price_stop_method: method,
            price_stop_level: level,
            ..self
        }
    }

    pub fn with_price_profit(self, method: i32, level: f64) -> Self {
        Self {
            price_profit_method: method,
            price_profit_level: level,
            ..self
        }
    }

    pub fn with_max_spread(self, max_spread: f64) -> Self {
        Self { max_spread, ..self }
    }
}
