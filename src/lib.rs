//! Stochastic Presets
//!
//! Per-symbol, per-timeframe default parameters for the Stochastic indicator
//! and the strategy built on it. The records are inert values: an external
//! indicator/strategy runtime reads them at initialization time.
//!
//! ```no_run
//! use stochastic_presets::{presets, Symbol, Timeframe};
//!
//! fn main() -> anyhow::Result<()> {
//!     let table = presets::builtin()?;
//!     let resolved = table.resolve(&Symbol::new("EURUSD"), Timeframe::M15);
//!     println!("{:?} from {}", resolved.indicator, resolved.source);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod params;
pub mod presets;
pub mod table;
pub mod types;
pub mod validate;

pub use config::Config;
pub use error::{PresetError, ValidationError};
pub use params::{
    AppliedPrice, LegacyLayout, LegacySetParams, MaMethod, StgParams, StoPrice, StochParams,
};
pub use table::{Preset, PresetKey, PresetTable, Resolved, Source};
pub use types::*;
