//! Validate command implementation

use anyhow::Result;
use tracing::{error, info};

pub fn run(config_path: Option<String>) -> Result<()> {
    let table = super::load_table(config_path)?;
    let failures = table.validate();

    if failures.is_empty() {
        info!(
            presets = table.len(),
            legacy = table.legacy_len(),
            "All records valid"
        );
        println!(
            "OK: {} preset(s), {} legacy record(s)",
            table.len(),
            table.legacy_len()
        );
        return Ok(());
    }

    for (label, err) in &failures {
        error!("{}: {}", label, err);
        println!("INVALID {}: {}", label, err);
    }
    anyhow::bail!("{} invalid record field(s)", failures.len())
}
