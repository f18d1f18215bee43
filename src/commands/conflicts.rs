//! Conflicts command implementation

use anyhow::Result;
use itertools::Itertools;
use tracing::warn;

pub fn run(config_path: Option<String>) -> Result<()> {
    let table = super::load_table(config_path)?;
    let conflicts = table.schema_conflicts();

    if conflicts.is_empty() {
        println!("No keys are defined in both schemas");
        return Ok(());
    }

    warn!(
        "{} key(s) defined in both schemas: {}",
        conflicts.len(),
        conflicts.iter().join(", ")
    );

    for key in &conflicts {
        println!("{}", key);
        if let (Some(preset), Some(symbol)) = (table.get(key), key.symbol.as_ref()) {
            println!(
                "  canonical: K{}/D{}/slowing {} open {}@{} spread {}",
                preset.indicator.kperiod,
                preset.indicator.dperiod,
                preset.indicator.slowing,
                preset.strategy.signal_open_method,
                preset.strategy.signal_open_level,
                preset.strategy.max_spread,
            );
            if let Some(legacy) = table.legacy(symbol, key.timeframe) {
                println!(
                    "  legacy ({}): period {} open {}@{} spread {}",
                    legacy.layout(),
                    legacy.period,
                    legacy.signal_open_method,
                    legacy.signal_open_level,
                    legacy.max_spread,
                );
            }
        }
    }

    Ok(())
}
