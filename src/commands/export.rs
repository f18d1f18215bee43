//! Export command implementation

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use stochastic_presets::export;
use tracing::info;

pub fn run(
    config_path: Option<String>,
    format: String,
    output: Option<String>,
    legacy: bool,
) -> Result<()> {
    let table = super::load_table(config_path)?;

    let mut out: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create output file {}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match (format.as_str(), legacy) {
        ("json", false) => writeln!(out, "{}", export::to_json(&table)?)?,
        ("json", true) => writeln!(out, "{}", export::legacy_to_json(&table)?)?,
        ("csv", false) => export::write_csv(&table, &mut out)?,
        ("csv", true) => anyhow::bail!("Legacy records can only be exported as JSON"),
        (other, _) => anyhow::bail!("Unknown export format: '{}'. Available: json, csv", other),
    }
    out.flush()?;

    if let Some(path) = output {
        info!("Exported {} record(s) to {}", table.len(), path);
    }
    Ok(())
}
