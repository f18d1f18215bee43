//! Configuration management
//!
//! Handles loading JSON override files that are layered on top of the
//! built-in preset table. The override file path can come from the
//! `PRESETS_CONFIG` environment variable (a `.env` file is honoured).

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::PresetError;
use crate::params::{MaMethod, StgParams, StoPrice, StochParams};
use crate::table::{PresetKey, PresetTable};
use crate::types::{Symbol, Timeframe};

/// Environment variable naming the default override file
pub const CONFIG_ENV_VAR: &str = "PRESETS_CONFIG";

/// Override file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub overrides: Vec<PresetOverride>,
}

impl Config {
    /// Load configuration from JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config JSON")?;

        info!(
            "Loaded {} override(s) from {}",
            config.overrides.len(),
            path.display()
        );
        Ok(config)
    }

    /// Path from `PRESETS_CONFIG`, if set
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from)
    }

    /// Apply the file as one layer on top of `table`. A key may appear
    /// only once per file; nothing is applied if one repeats.
    pub fn apply(&self, table: &mut PresetTable) -> Result<(), PresetError> {
        if let Some(key) = self
            .overrides
            .iter()
            .map(PresetOverride::key)
            .duplicates()
            .next()
        {
            return Err(PresetError::Duplicate {
                schema: "override",
                key: key.to_string(),
            });
        }

        for ov in &self.overrides {
            table.apply_override(ov);
        }
        Ok(())
    }
}

/// One override entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetOverride {
    /// Omit to override the timeframe-wide default
    #[serde(default)]
    pub symbol: Option<Symbol>,
    pub timeframe: Timeframe,
    #[serde(default)]
    pub indicator: Option<StochPatch>,
    #[serde(default)]
    pub strategy: Option<StgPatch>,
}

impl PresetOverride {
    pub fn key(&self) -> PresetKey {
        PresetKey {
            symbol: self.symbol.clone(),
            timeframe: self.timeframe,
        }
    }

    /// Patch both parameter sets
    pub fn patch(&self, indicator: StochParams, strategy: StgParams) -> (StochParams, StgParams) {
        let indicator = match &self.indicator {
            Some(patch) => patch.apply(indicator),
            None => indicator,
        };
        let strategy = match &self.strategy {
            Some(patch) => patch.apply(strategy),
            None => strategy,
        };
        (indicator, strategy)
    }

    /// Both overrides as one; fields set in `later` win
    pub fn merged(&self, later: &PresetOverride) -> PresetOverride {
        PresetOverride {
            symbol: self.symbol.clone(),
            timeframe: self.timeframe,
            indicator: match (&self.indicator, &later.indicator) {
                (Some(a), Some(b)) => Some(a.merge(b)),
                (a, b) => b.clone().or_else(|| a.clone()),
            },
            strategy: match (&self.strategy, &later.strategy) {
                (Some(a), Some(b)) => Some(a.merge(b)),
                (a, b) => b.clone().or_else(|| a.clone()),
            },
        }
    }
}

/// Partial indicator parameters; `None` keeps the underlying value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StochPatch {
    pub kperiod: Option<u32>,
    pub dperiod: Option<u32>,
    pub slowing: Option<u32>,
    pub ma_method: Option<MaMethod>,
    pub price_field: Option<StoPrice>,
    pub shift: Option<u32>,
}

impl StochPatch {
    pub fn apply(&self, base: StochParams) -> StochParams {
        StochParams {
            timeframe: base.timeframe,
            kperiod: self.kperiod.unwrap_or(base.kperiod),
            dperiod: self.dperiod.unwrap_or(base.dperiod),
            slowing: self.slowing.unwrap_or(base.slowing),
            ma_method: self.ma_method.unwrap_or(base.ma_method),
            price_field: self.price_field.unwrap_or(base.price_field),
            shift: self.shift.unwrap_or(base.shift),
        }
    }

    pub fn merge(&self, later: &StochPatch) -> StochPatch {
        StochPatch {
            kperiod: later.kperiod.or(self.kperiod),
            dperiod: later.dperiod.or(self.dperiod),
            slowing: later.slowing.or(self.slowing),
            ma_method: later.ma_method.or(self.ma_method),
            price_field: later.price_field.or(self.price_field),
            shift: later.shift.or(self.shift),
        }
    }
}

/// Partial strategy parameters; `None` keeps the underlying value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StgPatch {
    pub lot_size: Option<f64>,
    pub signal_open_method: Option<i32>,
    pub signal_open_filter: Option<i32>,
    pub signal_open_level: Option<f64>,
    pub signal_open_boost: Option<i32>,
    pub signal_close_method: Option<i32>,
    pub signal_close_level: Option<f64>,
    pub price_profit_method: Option<i32>,
    pub price_profit_level: Option<f64>,
    pub price_stop_method: Option<i32>,
    pub price_stop_level: Option<f64>,
    pub tick_filter_method: Option<i32>,
    pub max_spread: Option<f64>,
}

impl StgPatch {
    pub fn apply(&self, base: StgParams) -> StgParams {
        StgParams {
            lot_size: self.lot_size.unwrap_or(base.lot_size),
            signal_open_method: self.signal_open_method.unwrap_or(base.signal_open_method),
            signal_open_filter: self.signal_open_filter.unwrap_or(base.signal_open_filter),
            signal_open_level: self.signal_open_level.unwrap_or(base.signal_open_level),
            signal_open_boost: self.signal_open_boost.unwrap_or(base.signal_open_boost),
            signal_close_method: self.signal_close_method.unwrap_or(base.signal_close_method),
            signal_close_level: self.signal_close_level.unwrap_or(base.signal_close_level),
            price_profit_method: self.price_profit_method.unwrap_or(base.price_profit_method),
            price_profit_level: self.price_profit_level.unwrap_or(base.price_profit_level),
            price_stop_method: self.price_stop_method.unwrap_or(base.price_stop_method),
            price_stop_level: self.price_stop_level.unwrap_or(base.price_stop_level),
            tick_filter_method: self.tick_filter_method.unwrap_or(base.tick_filter_method),
            max_spread: self.max_spread.unwrap_or(base.max_spread),
        }
    }

    pub fn merge(&self, later: &StgPatch) -> StgPatch {
        StgPatch {
            lot_size: later.lot_size.or(self.lot_size),
            signal_open_method: later.signal_open_method.or(self.signal_open_method),
            signal_open_filter: later.signal_open_filter.or(self.signal_open_filter),
            signal_open_level: later.signal_open_level.or(self.signal_open_level),
            signal_open_boost: later.signal_open_boost.or(self.signal_open_boost),
            signal_close_method: later.signal_close_method.or(self.signal_close_method),
            signal_close_level: later.signal_close_level.or(self.signal_close_level),
            price_profit_method: later.price_profit_method.or(self.price_profit_method),
            price_profit_level: later.price_profit_level.or(self.price_profit_level),
            price_stop_method: later.price_stop_method.or(self.price_stop_method),
            price_stop_level: later.price_stop_level.or(self.price_stop_level),
            tick_filter_method: later.tick_filter_method.or(self.tick_filter_method),
            max_spread: later.max_spread.or(self.max_spread),
        }
    }
}
