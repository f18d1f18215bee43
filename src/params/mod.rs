//! Parameter sets consumed by the external indicator and strategy runtime

pub mod indicator;
pub mod legacy;
pub mod strategy;

pub use indicator::{MaMethod, StoPrice, StochParams};
pub use legacy::{AppliedPrice, LegacyLayout, LegacySetParams};
pub use strategy::StgParams;
