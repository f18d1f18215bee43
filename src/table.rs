//! Preset table
//!
//! Holds at most one record per (symbol, timeframe) key for each schema and
//! resolves lookups from the most specific record available:
//!
//! 1. exact symbol + timeframe record
//! 2. symbol-less record for the timeframe
//! 3. framework defaults for the timeframe
//!
//! Override layers replace records field by field; the last layer applied
//! wins. An override for a symbol with no record of its own is kept as a
//! patch over the timeframe record, so a later change to that timeframe
//! record still reaches every field the symbol override left alone.
//!
//! Records of the older `sets/` schema are stored alongside but never
//! merged into the canonical records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

use crate::config::PresetOverride;
use crate::error::{PresetError, ValidationError};
use crate::params::{LegacySetParams, StgParams, StochParams};
use crate::types::{Symbol, Timeframe};

/// Table key; `symbol = None` marks a timeframe-wide default
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PresetKey {
    pub symbol: Option<Symbol>,
    pub timeframe: Timeframe,
}

impl PresetKey {
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            symbol: Some(Symbol::new(symbol)),
            timeframe,
        }
    }

    pub fn timeframe_default(timeframe: Timeframe) -> Self {
        Self {
            symbol: None,
            timeframe,
        }
    }
}

impl fmt::Display for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{}/{}", symbol, self.timeframe),
            None => write!(f, "*/{}", self.timeframe),
        }
    }
}

/// Indicator and strategy parameters stored under one key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub key: PresetKey,
    pub indicator: StochParams,
    pub strategy: StgParams,
}

impl Preset {
    pub fn new(key: PresetKey, indicator: StochParams, strategy: StgParams) -> Self {
        Self {
            key,
            indicator,
            strategy,
        }
    }
}

/// How specific the record behind a lookup was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Exact,
    Timeframe,
    Defaults,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Exact => f.write_str("exact symbol/timeframe record"),
            Source::Timeframe => f.write_str("timeframe default record"),
            Source::Defaults => f.write_str("framework defaults"),
        }
    }
}

/// Result of a lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved {
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub source: Source,
    pub indicator: StochParams,
    pub strategy: StgParams,
}

#[derive(Debug, Clone, Default)]
pub struct PresetTable {
    presets: BTreeMap<PresetKey, Preset>,
    legacy: BTreeMap<(Symbol, Timeframe), LegacySetParams>,
    /// Combined overrides for symbol records created by an override;
    /// these records are rebuilt whenever their timeframe record changes
    derived: BTreeMap<PresetKey, PresetOverride>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record; fails if its key is already taken
    pub fn insert(&mut self, preset: Preset) -> Result<(), PresetError> {
        if preset.indicator.timeframe != preset.key.timeframe {
            return Err(PresetError::TimeframeMismatch {
                key: preset.key.timeframe,
                indicator: preset.indicator.timeframe,
            });
        }
        if self.presets.contains_key(&preset.key) {
            return Err(PresetError::Duplicate {
                schema: "preset",
                key: preset.key.to_string(),
            });
        }

        debug!(key = %preset.key, "Preset registered");
        self.presets.insert(preset.key.clone(), preset);
        Ok(())
    }

    /// Add a record of the older `sets/` schema
    pub fn insert_legacy(&mut self, params: LegacySetParams) -> Result<(), PresetError> {
        let key = (params.symbol.clone(), params.timeframe);
        if self.legacy.contains_key(&key) {
            return Err(PresetError::Duplicate {
                schema: "legacy",
                key: format!("{}/{}", key.0, key.1),
            });
        }

        debug!(symbol = %key.0, timeframe = %key.1, layout = %params.layout(), "Legacy set registered");
        self.legacy.insert(key, params);
        Ok(())
    }

    pub fn get(&self, key: &PresetKey) -> Option<&Preset> {
        self.presets.get(key)
    }

    pub fn legacy(&self, symbol: &Symbol, timeframe: Timeframe) -> Option<&LegacySetParams> {
        self.legacy.get(&(symbol.clone(), timeframe))
    }

    /// Records ordered by symbol (timeframe defaults first), then timeframe
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    /// Legacy records ordered by symbol, then timeframe
    pub fn legacy_iter(&self) -> impl Iterator<Item = &LegacySetParams> {
        self.legacy.values()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn legacy_len(&self) -> usize {
        self.legacy.len()
    }

    /// Look up parameters for a symbol/timeframe, falling back to less
    /// specific records. Never fails.
    pub fn resolve(&self, symbol: &Symbol, timeframe: Timeframe) -> Resolved {
        let exact = PresetKey {
            symbol: Some(symbol.clone()),
            timeframe,
        };

        let (source, indicator, strategy) = match self.presets.get(&exact) {
            Some(p) => (Source::Exact, p.indicator, p.strategy),
            None => self.fallback(timeframe),
        };

        debug!(%symbol, %timeframe, ?source, "Preset resolved");

        Resolved {
            symbol: symbol.clone(),
            timeframe,
            source,
            indicator,
            strategy,
        }
    }

    /// Timeframe record, or framework defaults when there is none
    fn fallback(&self, timeframe: Timeframe) -> (Source, StochParams, StgParams) {
        match self.presets.get(&PresetKey::timeframe_default(timeframe)) {
            Some(p) => (Source::Timeframe, p.indicator, p.strategy),
            None => (
                Source::Defaults,
                StochParams::defaults(timeframe),
                StgParams::default(),
            ),
        }
    }

    fn base_for(&self, key: &PresetKey) -> (Source, StochParams, StgParams) {
        match (&key.symbol, self.presets.get(key)) {
            (Some(_), Some(p)) if !self.derived.contains_key(key) => {
                (Source::Exact, p.indicator, p.strategy)
            }
            _ => self.fallback(key.timeframe),
        }
    }

    /// Patch the record for the override's key. A missing key is created
    /// from whatever the lookup would have returned for it. Returns the
    /// source the patched values started from.
    pub fn apply_override(&mut self, ov: &PresetOverride) -> Source {
        let key = ov.key();
        let is_new = !self.presets.contains_key(&key);
        let (source, indicator, strategy) = self.base_for(&key);

        let patch = match self.derived.get(&key) {
            Some(earlier) => Some(earlier.merged(ov)),
            None if is_new && key.symbol.is_some() => Some(ov.clone()),
            None => None,
        };
        let (indicator, strategy) = match &patch {
            Some(combined) => combined.patch(indicator, strategy),
            None => ov.patch(indicator, strategy),
        };
        if let Some(combined) = patch {
            self.derived.insert(key.clone(), combined);
        }

        if is_new {
            warn!(key = %key, base = %source, "Override creates a record that had no built-in entry");
        } else {
            debug!(key = %key, "Override patched existing record");
        }

        self.presets
            .insert(key.clone(), Preset::new(key.clone(), indicator, strategy));

        if key.symbol.is_none() {
            self.rebuild_derived(key.timeframe);
        }
        source
    }

    fn rebuild_derived(&mut self, timeframe: Timeframe) {
        let (_, indicator, strategy) = self.fallback(timeframe);
        let rebuilt: Vec<Preset> = self
            .derived
            .iter()
            .filter(|(key, _)| key.timeframe == timeframe)
            .map(|(key, ov)| {
                let (indicator, strategy) = ov.patch(indicator, strategy);
                Preset::new(key.clone(), indicator, strategy)
            })
            .collect();

        for preset in rebuilt {
            debug!(key = %preset.key, "Override record rebuilt on new timeframe record");
            self.presets.insert(preset.key.clone(), preset);
        }
    }

    /// Keys defined in both the canonical and the legacy schema
    pub fn schema_conflicts(&self) -> Vec<PresetKey> {
        self.legacy
            .keys()
            .map(|(symbol, tf)| PresetKey {
                symbol: Some(symbol.clone()),
                timeframe: *tf,
            })
            .filter(|key| self.presets.contains_key(key))
            .collect()
    }

    /// Validate every record, collecting all failures
    pub fn validate(&self) -> Vec<(String, ValidationError)> {
        let mut failures = Vec::new();

        for preset in self.presets.values() {
            if let Err(e) = preset.indicator.validate() {
                failures.push((format!("{} indicator", preset.key), e));
            }
            if let Err(e) = preset.strategy.validate() {
                failures.push((format!("{} strategy", preset.key), e));
            }
        }

        for ((symbol, tf), params) in &self.legacy {
            if let Err(e) = params.validate() {
                failures.push((format!("{}/{} legacy", symbol, tf), e));
            }
        }

        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StgPatch, StochPatch};
    use approx::assert_relative_eq;

    fn eurusd(tf: Timeframe) -> PresetKey {
        PresetKey::new("EURUSD", tf)
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut table = PresetTable::new();
        let p = Preset::new(
            eurusd(Timeframe::M1),
            StochParams::defaults(Timeframe::M1),
            StgParams::default(),
        );
        table.insert(p.clone()).unwrap();
        assert_eq!(
            table.insert(p),
            Err(PresetError::Duplicate {
                schema: "preset",
                key: "EURUSD/M1".to_string()
            })
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_timeframe_mismatch_rejected() {
        let mut table = PresetTable::new();
        let p = Preset::new(
            eurusd(Timeframe::M1),
            StochParams::defaults(Timeframe::M5),
            StgParams::default(),
        );
        assert!(matches!(
            table.insert(p),
            Err(PresetError::TimeframeMismatch { .. })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_resolve_fallback_order() {
        let mut table = PresetTable::new();
        table
            .insert(Preset::new(
                PresetKey::timeframe_default(Timeframe::M15),
                StochParams::defaults(Timeframe::M15).with_periods(5, 3, 17),
                StgParams::default(),
            ))
            .unwrap();
        table
            .insert(Preset::new(
                eurusd(Timeframe::M15),
                StochParams::defaults(Timeframe::M15).with_periods(5, 3, 3),
                StgParams::default(),
            ))
            .unwrap();

        let eurusd_sym = Symbol::new("EURUSD");
        let gbpusd = Symbol::new("GBPUSD");

        let r = table.resolve(&eurusd_sym, Timeframe::M15);
        assert_eq!(r.source, Source::Exact);
        assert_eq!(r.indicator.slowing, 3);

        let r = table.resolve(&gbpusd, Timeframe::M15);
        assert_eq!(r.source, Source::Timeframe);
        assert_eq!(r.indicator.slowing, 17);

        let r = table.resolve(&gbpusd, Timeframe::D1);
        assert_eq!(r.source, Source::Defaults);
        assert_eq!(r.indicator, StochParams::defaults(Timeframe::D1));
    }

    #[test]
    fn test_override_patches_fields() {
        let mut table = PresetTable::new();
        table
            .insert(Preset::new(
                eurusd(Timeframe::H4),
                StochParams::defaults(Timeframe::H4),
                StgParams::default(),
            ))
            .unwrap();

        let ov = PresetOverride {
            symbol: Some(Symbol::new("EURUSD")),
            timeframe: Timeframe::H4,
            indicator: Some(StochPatch {
                slowing: Some(9),
                ..StochPatch::default()
            }),
            strategy: Some(StgPatch {
                max_spread: Some(1.5),
                ..StgPatch::default()
            }),
        };

        assert_eq!(table.apply_override(&ov), Source::Exact);
        let p = table.get(&eurusd(Timeframe::H4)).unwrap();
        assert_eq!(p.indicator.slowing, 9);
        assert_eq!(p.indicator.kperiod, 5);
        assert_relative_eq!(p.strategy.max_spread, 1.5);
        assert_relative_eq!(p.strategy.price_stop_level, 2.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_override_creates_missing_key_from_fallback() {
        let mut table = PresetTable::new();
        let ov = PresetOverride {
            symbol: Some(Symbol::new("GBPUSD")),
            timeframe: Timeframe::H1,
            indicator: None,
            strategy: None,
        };

        assert_eq!(table.apply_override(&ov), Source::Defaults);
        let p = table.get(&PresetKey::new("GBPUSD", Timeframe::H1)).unwrap();
        assert_eq!(p.indicator, StochParams::defaults(Timeframe::H1));
    }

    fn override_for(symbol: Option<&str>, timeframe: Timeframe) -> PresetOverride {
        PresetOverride {
            symbol: symbol.map(Symbol::new),
            timeframe,
            indicator: None,
            strategy: None,
        }
    }

    fn slowing(symbol: Option<&str>, timeframe: Timeframe, slowing: u32) -> PresetOverride {
        PresetOverride {
            indicator: Some(StochPatch {
                slowing: Some(slowing),
                ..StochPatch::default()
            }),
            ..override_for(symbol, timeframe)
        }
    }

    fn spread(symbol: Option<&str>, timeframe: Timeframe, max_spread: f64) -> PresetOverride {
        PresetOverride {
            strategy: Some(StgPatch {
                max_spread: Some(max_spread),
                ..StgPatch::default()
            }),
            ..override_for(symbol, timeframe)
        }
    }

    #[test]
    fn test_timeframe_override_reaches_symbol_override_record() {
        let mut table = PresetTable::new();
        table.apply_override(&spread(Some("GBPUSD"), Timeframe::M15, 1.5));
        table.apply_override(&slowing(None, Timeframe::M15, 17));

        let p = table.get(&PresetKey::new("GBPUSD", Timeframe::M15)).unwrap();
        assert_eq!(p.indicator.slowing, 17);
        assert_relative_eq!(p.strategy.max_spread, 1.5);
    }

    #[test]
    fn test_override_order_does_not_matter_across_keys() {
        let symbol_first = {
            let mut table = PresetTable::new();
            table.apply_override(&spread(Some("GBPUSD"), Timeframe::M15, 1.5));
            table.apply_override(&slowing(None, Timeframe::M15, 17));
            table.resolve(&Symbol::new("GBPUSD"), Timeframe::M15)
        };
        let timeframe_first = {
            let mut table = PresetTable::new();
            table.apply_override(&slowing(None, Timeframe::M15, 17));
            table.apply_override(&spread(Some("GBPUSD"), Timeframe::M15, 1.5));
            table.resolve(&Symbol::new("GBPUSD"), Timeframe::M15)
        };
        assert_eq!(symbol_first, timeframe_first);
    }

    #[test]
    fn test_symbol_override_fields_survive_later_timeframe_override() {
        let mut table = PresetTable::new();
        table.apply_override(&slowing(Some("GBPUSD"), Timeframe::H1, 9));
        table.apply_override(&spread(Some("GBPUSD"), Timeframe::H1, 2.0));
        table.apply_override(&slowing(None, Timeframe::H1, 21));

        let p = table.get(&PresetKey::new("GBPUSD", Timeframe::H1)).unwrap();
        assert_eq!(p.indicator.slowing, 9);
        assert_relative_eq!(p.strategy.max_spread, 2.0);
        assert_eq!(
            table.get(&PresetKey::timeframe_default(Timeframe::H1)).unwrap().indicator.slowing,
            21
        );
    }

    #[test]
    fn test_timeframe_override_leaves_full_records_alone() {
        let mut table = PresetTable::new();
        table
            .insert(Preset::new(
                eurusd(Timeframe::M15),
                StochParams::defaults(Timeframe::M15),
                StgParams::default(),
            ))
            .unwrap();
        table.apply_override(&slowing(None, Timeframe::M15, 17));

        let p = table.get(&eurusd(Timeframe::M15)).unwrap();
        assert_eq!(p.indicator.slowing, 3);
    }

    #[test]
    fn test_duplicate_legacy_rejected() {
        let mut table = PresetTable::new();
        for params in crate::presets::sets::records() {
            table.insert_legacy(params).unwrap();
        }
        let again = table.legacy(&Symbol::new("EURUSD"), Timeframe::H1).unwrap().clone();

        assert_eq!(
            table.insert_legacy(again),
            Err(PresetError::Duplicate {
                schema: "legacy",
                key: "EURUSD/H1".to_string()
            })
        );
        assert_eq!(table.legacy_len(), 3);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(eurusd(Timeframe::M30).to_string(), "EURUSD/M30");
        assert_eq!(
            PresetKey::timeframe_default(Timeframe::M15).to_string(),
            "*/M15"
        );
    }
}
