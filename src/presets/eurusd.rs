//! EURUSD records
//!
//! H4, H8 and M30 only pin `shift` and otherwise keep the indicator's
//! framework defaults.

use crate::params::{MaMethod, StoPrice, StgParams, StochParams};
use crate::table::{Preset, PresetKey};
use crate::types::Timeframe;

const SYMBOL: &str = "EURUSD";

fn flat_strategy() -> StgParams {
    StgParams::default()
        .with_signals((0, 0.0), (0, 0.0))
        .with_price_stop(0, 2.0)
        .with_max_spread(0.0)
}

fn m1() -> Preset {
    Preset::new(
        PresetKey::new(SYMBOL, Timeframe::M1),
        StochParams::defaults(Timeframe::M1)
            .with_periods(5, 3, 11)
            .with_ma_method(MaMethod::Sma)
            .with_price_field(StoPrice::LowHigh)
            .with_shift(0),
        flat_strategy(),
    )
}

fn m15() -> Preset {
    Preset::new(
        PresetKey::new(SYMBOL, Timeframe::M15),
        StochParams::defaults(Timeframe::M15)
            .with_periods(5, 3, 3)
            .with_ma_method(MaMethod::Sma)
            .with_price_field(StoPrice::LowHigh)
            .with_shift(0),
        flat_strategy(),
    )
}

fn m30() -> Preset {
    Preset::new(
        PresetKey::new(SYMBOL, Timeframe::M30),
        StochParams::defaults(Timeframe::M30).with_shift(0),
        flat_strategy(),
    )
}

fn h4() -> Preset {
    Preset::new(
        PresetKey::new(SYMBOL, Timeframe::H4),
        StochParams::defaults(Timeframe::H4).with_shift(0),
        flat_strategy(),
    )
}

fn h8() -> Preset {
    Preset::new(
        PresetKey::new(SYMBOL, Timeframe::H8),
        StochParams::defaults(Timeframe::H8).with_shift(0),
        flat_strategy(),
    )
}

pub fn records() -> Vec<Preset> {
    vec![m1(), m15(), m30(), h4(), h8()]
}
