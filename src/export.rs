//! Table export
//!
//! JSON keeps the nested record shape; CSV flattens each record to one row
//! with enum fields written as their integer codes.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::table::{Preset, PresetTable};

/// Pretty-printed JSON array of every canonical record
pub fn to_json(table: &PresetTable) -> Result<String> {
    let presets: Vec<&Preset> = table.iter().collect();
    serde_json::to_string_pretty(&presets).context("Failed to serialize presets")
}

/// Pretty-printed JSON array of every legacy record
pub fn legacy_to_json(table: &PresetTable) -> Result<String> {
    let records: Vec<_> = table.legacy_iter().collect();
    serde_json::to_string_pretty(&records).context("Failed to serialize legacy records")
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    symbol: &'a str,
    timeframe: &'static str,
    kperiod: u32,
    dperiod: u32,
    slowing: u32,
    ma_method: i32,
    price_field: i32,
    shift: u32,
    lot_size: f64,
    signal_open_method: i32,
    signal_open_filter: i32,
    signal_open_level: f64,
    signal_open_boost: i32,
    signal_close_method: i32,
    signal_close_level: f64,
    price_profit_method: i32,
    price_profit_level: f64,
    price_stop_method: i32,
    price_stop_level: f64,
    tick_filter_method: i32,
    max_spread: f64,
}

impl<'a> From<&'a Preset> for CsvRow<'a> {
    fn from(p: &'a Preset) -> Self {
        let i = &p.indicator;
        let s = &p.strategy;
        Self {
            // Timeframe-wide defaults carry "*" as their symbol
            symbol: p.key.symbol.as_ref().map(|s| s.as_str()).unwrap_or("*"),
            timeframe: p.key.timeframe.as_str(),
            kperiod: i.kperiod,
            dperiod: i.dperiod,
            slowing: i.slowing,
            ma_method: i.ma_method.code(),
            price_field: i.price_field.code(),
            shift: i.shift,
            lot_size: s.lot_size,
            signal_open_method: s.signal_open_method,
            signal_open_filter: s.signal_open_filter,
            signal_open_level: s.signal_open_level,
            signal_open_boost: s.signal_open_boost,
            signal_close_method: s.signal_close_method,
            signal_close_level: s.signal_close_level,
            price_profit_method: s.price_profit_method,
            price_profit_level: s.price_profit_level,
            price_stop_method: s.price_stop_method,
            price_stop_level: s.price_stop_level,
            tick_filter_method: s.tick_filter_method,
            max_spread: s.max_spread,
        }
    }
}

/// Write every canonical record as one CSV row (with header)
pub fn write_csv<W: Write>(table: &PresetTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for preset in table.iter() {
        wtr.serialize(CsvRow::from(preset))
            .with_context(|| format!("Failed to write CSV row for {}", preset.key))?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}
