pub mod conflicts;
pub mod export;
pub mod list;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use stochastic_presets::{presets, Config, PresetTable};
use tracing::info;

/// Built-in table with the override file (from `--config` or
/// `PRESETS_CONFIG`) applied on top
pub fn load_table(config_path: Option<String>) -> Result<PresetTable> {
    let mut table = presets::builtin().context("Failed to build built-in presets")?;

    let path = config_path
        .map(std::path::PathBuf::from)
        .or_else(Config::path_from_env);

    match path {
        Some(path) => {
            let config = Config::from_file(&path)?;
            config
                .apply(&mut table)
                .with_context(|| format!("Failed to apply overrides from {}", path.display()))?;
            info!("Applied overrides from {}", path.display());
        }
        None => info!("No override file configured, using built-in presets"),
    }

    Ok(table)
}
