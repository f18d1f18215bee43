//! Stochastic indicator parameter set

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PresetError;
use crate::types::Timeframe;

/// Smoothing method applied to %D
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaMethod {
    #[default]
    Sma,
    Ema,
    Smma,
    Lwma,
}

impl MaMethod {
    pub fn code(self) -> i32 {
        match self {
            MaMethod::Sma => 0,
            MaMethod::Ema => 1,
            MaMethod::Smma => 2,
            MaMethod::Lwma => 3,
        }
    }
}

impl TryFrom<i32> for MaMethod {
    type Error = PresetError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MaMethod::Sma),
            1 => Ok(MaMethod::Ema),
            2 => Ok(MaMethod::Smma),
            3 => Ok(MaMethod::Lwma),
            _ => Err(PresetError::InvalidCode {
                kind: "moving average method",
                code,
            }),
        }
    }
}

impl fmt::Display for MaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaMethod::Sma => "SMA",
            MaMethod::Ema => "EMA",
            MaMethod::Smma => "SMMA",
            MaMethod::Lwma => "LWMA",
        };
        f.pad(name)
    }
}

/// Price field the oscillator range is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoPrice {
    /// High/low range
    #[default]
    LowHigh,
    /// Close/close range
    CloseClose,
}

impl StoPrice {
    pub fn code(self) -> i32 {
        match self {
            StoPrice::LowHigh => 0,
            StoPrice::CloseClose => 1,
        }
    }
}

impl TryFrom<i32> for StoPrice {
    type Error = PresetError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(StoPrice::LowHigh),
            1 => Ok(StoPrice::CloseClose),
            _ => Err(PresetError::InvalidCode {
                kind: "stochastic price field",
                code,
            }),
        }
    }
}

impl fmt::Display for StoPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoPrice::LowHigh => f.pad("Low/High"),
            StoPrice::CloseClose => f.pad("Close/Close"),
        }
    }
}

/// Parameters handed to the external Stochastic indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochParams {
    pub timeframe: Timeframe,
    /// %K lookback period
    pub kperiod: u32,
    /// %D smoothing period
    pub dperiod: u32,
    pub slowing: u32,
    pub ma_method: MaMethod,
    pub price_field: StoPrice,
    /// Bars back from the current one the value is read at
    pub shift: u32,
}

impl StochParams {
    /// Framework defaults for the given timeframe
    pub fn defaults(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            kperiod: 5,
            dperiod: 3,
            slowing: 3,
            ma_method: MaMethod::Sma,
            price_field: StoPrice::LowHigh,
            shift: 0,
        }
    }

    pub fn with_periods(self, kperiod: u32, dperiod: u32, slowing: u32) -> Self {
        Self {
            kperiod,
            dperiod,
            slowing,
            ..self
        }
    }

    pub fn with_ma_method(self, ma_method: MaMethod) -> Self {
        Self { ma_method, ..self }
    }

    pub fn with_price_field(self, price_field: StoPrice) -> Self {
        Self {
            price_field,
            ..self
        }
    }

    pub fn with_shift(self, shift: u32) -> Self {
        Self { shift, ..self }
    }

    /// Same parameters re-keyed to another timeframe
    pub fn with_timeframe(self, timeframe: Timeframe) -> Self {
        Self { timeframe, ..self }
    }
}
