//! Older `sets/` parameter schema
//!
//! These records predate the split into indicator and strategy parameter
//! sets. Two layouts exist: one carries a price-limit method/level, the
//! other carries trailing stop/profit methods and secondary signal methods.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PresetError;
use crate::types::{Symbol, Timeframe};

/// Price series the legacy oscillator is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedPrice {
    #[default]
    Close,
    Open,
    High,
    Low,
    /// (high + low) / 2
    Median,
    /// (high + low + close) / 3
    Typical,
    /// (high + low + 2 * close) / 4
    Weighted,
}

impl AppliedPrice {
    pub fn code(self) -> i32 {
        match self {
            AppliedPrice::Close => 0,
            AppliedPrice::Open => 1,
            AppliedPrice::High => 2,
            AppliedPrice::Low => 3,
            AppliedPrice::Median => 4,
            AppliedPrice::Typical => 5,
            AppliedPrice::Weighted => 6,
        }
    }
}

impl TryFrom<i32> for AppliedPrice {
    type Error = PresetError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AppliedPrice::Close),
            1 => Ok(AppliedPrice::Open),
            2 => Ok(AppliedPrice::High),
            3 => Ok(AppliedPrice::Low),
            4 => Ok(AppliedPrice::Median),
            5 => Ok(AppliedPrice::Typical),
            6 => Ok(AppliedPrice::Weighted),
            _ => Err(PresetError::InvalidCode {
                kind: "applied price",
                code,
            }),
        }
    }
}

/// Which optional field group a legacy record uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyLayout {
    PriceLimit,
    Trailing,
}

impl fmt::Display for LegacyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyLayout::PriceLimit => f.pad("price-limit"),
            LegacyLayout::Trailing => f.pad("trailing"),
        }
    }
}

/// One record of the `sets/` schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacySetParams {
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub period: u32,
    pub applied_price: AppliedPrice,
    pub shift: u32,
    pub signal_open_method: i32,
    pub signal_open_level: f64,
    pub signal_close_method: i32,
    pub signal_close_level: f64,
    pub max_spread: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_limit_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_limit_level: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_stop_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_profit_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_base_method: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_open_method2: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_close_method2: Option<i32>,
}

impl LegacySetParams {
    pub(crate) fn has_price_limit_fields(&self) -> bool {
        self.price_limit_method.is_some() || self.price_limit_level.is_some()
    }

    pub(crate) fn has_trailing_fields(&self) -> bool {
        self.trailing_stop_method.is_some()
            || self.trailing_profit_method.is_some()
            || self.signal_base_method.is_some()
            || self.signal_open_method2.is_some()
            || self.signal_close_method2.is_some()
    }

    /// Layout of this record. Only meaningful for records that pass
    /// `validate()`, which rejects records with neither group or both.
    pub fn layout(&self) -> LegacyLayout {
        if self.has_trailing_fields() {
            LegacyLayout::Trailing
        } else {
            LegacyLayout::PriceLimit
        }
    }

    /// True when fields from both layouts are set
    pub fn is_mixed(&self) -> bool {
        self.has_price_limit_fields() && self.has_trailing_fields()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> LegacySetParams {
        LegacySetParams {
            symbol: Symbol::new("EURUSD"),
            timeframe: Timeframe::H1,
            period: 2,
            applied_price: AppliedPrice::Low,
            shift: 0,
            signal_open_method: 0,
            signal_open_level: 36.0,
            signal_close_method: 1,
            signal_close_level: 36.0,
            max_spread: 6.0,
            price_limit_method: None,
            price_limit_level: None,
            trailing_stop_method: None,
            trailing_profit_method: None,
            signal_base_method: None,
            signal_open_method2: None,
            signal_close_method2: None,
        }
    }

    #[test]
    fn test_layout_detection() {
        let mut p = base();
        assert_eq!(p.layout(), LegacyLayout::PriceLimit);

        p.trailing_stop_method = Some(6);
        assert_eq!(p.layout(), LegacyLayout::Trailing);
        assert!(!p.is_mixed());

        p.price_limit_method = Some(0);
        assert!(p.is_mixed());
    }

    #[test]
    fn test_applied_price_codes() {
        assert_eq!(AppliedPrice::try_from(3).unwrap(), AppliedPrice::Low);
        assert_eq!(AppliedPrice::Weighted.code(), 6);
        assert!(AppliedPrice::try_from(7).is_err());
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let json = serde_json::to_value(base()).unwrap();
        assert!(json.get("trailing_stop_method").is_none());
        assert_eq!(json["applied_price"], "low");
    }
}
