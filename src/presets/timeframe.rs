//! Symbol-less records used when no exact symbol/timeframe record exists

use crate::params::{MaMethod, StoPrice, StgParams, StochParams};
use crate::table::{Preset, PresetKey};
use crate::types::Timeframe;

fn m15() -> Preset {
    Preset::new(
        PresetKey::timeframe_default(Timeframe::M15),
        StochParams::defaults(Timeframe::M15)
            .with_periods(5, 3, 17)
            .with_ma_method(MaMethod::Smma)
            .with_price_field(StoPrice::LowHigh)
            .with_shift(0),
        StgParams::default()
            .with_signals((2, 20.0), (2, 20.0))
            .with_price_profit(60, 6.0)
            .with_price_stop(60, 6.0),
    )
}

pub fn records() -> Vec<Preset> {
    vec![m15()]
}
