//! Built-in preset records
//!
//! - `eurusd`: EURUSD records for M1, M15, M30, H4 and H8
//! - `timeframe`: symbol-less records (currently M15)
//! - `sets`: records of the older `sets/` schema

pub mod eurusd;
pub mod sets;
pub mod timeframe;

use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::error::PresetError;
use crate::table::PresetTable;

/// Build a table holding every built-in record
pub fn builtin() -> Result<PresetTable, PresetError> {
    let mut table = PresetTable::new();

    for preset in timeframe::records().into_iter().chain(eurusd::records()) {
        table.insert(preset)?;
    }
    for params in sets::records() {
        table.insert_legacy(params)?;
    }

    for key in table.schema_conflicts() {
        warn!(key = %key, "Record defined in both canonical and legacy schema");
    }

    debug!(
        presets = table.len(),
        legacy = table.legacy_len(),
        "Built-in preset table ready"
    );
    Ok(table)
}

static SHARED: OnceLock<Result<PresetTable, PresetError>> = OnceLock::new();

/// Process-wide built-in table, built on first use
pub fn shared() -> Result<&'static PresetTable, PresetError> {
    SHARED.get_or_init(builtin).as_ref().map_err(Clone::clone)
}
