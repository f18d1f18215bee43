//! Domain checks for parameter sets
//!
//! Enumerated fields are valid by construction, so only numeric ranges are
//! checked here. Each `validate` stops at the first violation.

use crate::error::ValidationError;
use crate::params::{LegacySetParams, StgParams, StochParams};

fn period(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value < 1 {
        return Err(ValidationError::NonPositivePeriod { field, value });
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn non_negative_code(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeCode { field, value });
    }
    Ok(())
}

impl StochParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        period("kperiod", self.kperiod)?;
        period("dperiod", self.dperiod)?;
        period("slowing", self.slowing)?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl StgParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        non_negative("lot_size", self.lot_size)?;
        finite("signal_open_level", self.signal_open_level)?;
        finite("signal_close_level", self.signal_close_level)?;
        non_negative_code("signal_open_boost", self.signal_open_boost)?;
        non_negative("price_profit_level", self.price_profit_level)?;
        non_negative("price_stop_level", self.price_stop_level)?;
        non_negative_code("tick_filter_method", self.tick_filter_method)?;
        non_negative("max_spread", self.max_spread)?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl LegacySetParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        period("period", self.period)?;
        finite("signal_open_level", self.signal_open_level)?;
        finite("signal_close_level", self.signal_close_level)?;
        non_negative("max_spread", self.max_spread)?;
        if let Some(level) = self.price_limit_level {
            non_negative("price_limit_level", level)?;
        }
        if self.is_mixed() {
            return Err(ValidationError::MixedLegacyLayout);
        }
        if !self.has_price_limit_fields() && !self.has_trailing_fields() {
            return Err(ValidationError::MissingLegacyLayout);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::AppliedPrice;
    use crate::types::{Symbol, Timeframe};

    fn legacy_price_limit() -> LegacySetParams {
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
            price_limit_method: Some(0),
            price_limit_level: Some(0.0),
            trailing_stop_method: None,
            trailing_profit_method: None,
            signal_base_method: None,
            signal_open_method2: None,
            signal_close_method2: None,
        }
    }

    #[test]
    fn test_zero_period_rejected() {
        let p = StochParams::defaults(Timeframe::M5).with_periods(0, 3, 3);
        assert_eq!(
            p.validate(),
            Err(ValidationError::NonPositivePeriod {
                field: "kperiod",
                value: 0
            })
        );

        let p = StochParams::defaults(Timeframe::M5).with_periods(5, 3, 0);
        assert!(matches!(
            p.validate(),
            Err(ValidationError::NonPositivePeriod { field: "slowing", .. })
        ));
    }

    #[test]
    fn test_negative_spread_rejected() {
        let p = StgParams::default().with_max_spread(-1.0);
        assert_eq!(
            p.validate(),
            Err(ValidationError::Negative {
                field: "max_spread",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_nan_level_rejected() {
        let p = StgParams::default().with_signals((0, f64::NAN), (0, 0.0));
        assert!(matches!(
            p.validate(),
            Err(ValidationError::NotFinite { field: "signal_open_level", .. })
        ));
    }

    #[test]
    fn test_negative_signal_levels_allowed() {
        // Open/close levels are thresholds and may sit below zero
        let p = StgParams::default().with_signals((-1, -20.0), (1, -20.0));
        assert!(p.is_valid());
    }

    #[test]
    fn test_negative_tick_filter_rejected() {
        let p = StgParams {
            tick_filter_method: -1,
            ..StgParams::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ValidationError::NegativeCode { field: "tick_filter_method", .. })
        ));
    }

    #[test]
    fn test_legacy_single_layout_accepted() {
        assert!(legacy_price_limit().is_valid());

        let trailing = LegacySetParams {
            price_limit_method: None,
            price_limit_level: None,
            trailing_stop_method: Some(6),
            trailing_profit_method: Some(11),
            ..legacy_price_limit()
        };
        assert!(trailing.is_valid());
    }

    #[test]
    fn test_legacy_mixed_layout_rejected() {
        let p = LegacySetParams {
            trailing_stop_method: Some(6),
            ..legacy_price_limit()
        };
        assert_eq!(p.validate(), Err(ValidationError::MixedLegacyLayout));
    }

    #[test]
    fn test_legacy_without_layout_rejected() {
        let p = LegacySetParams {
            price_limit_method: None,
            price_limit_level: None,
            ..legacy_price_limit()
        };
        assert_eq!(p.validate(), Err(ValidationError::MissingLegacyLayout));
    }
}
