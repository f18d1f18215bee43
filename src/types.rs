//! Core data types shared by the parameter sets and the preset table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PresetError;

/// Trading pair symbol, stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Symbol(s.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::new(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// Bar aggregation interval
///
/// Ordering follows interval length, so sorting a list of timeframes puts
/// `M1` first and `MN1` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M10,
    M12,
    M15,
    M20,
    M30,
    H1,
    H2,
    H3,
    H4,
    H6,
    H8,
    H12,
    D1,
    W1,
    MN1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 21] = [
        Timeframe::M1,
        Timeframe::M2,
        Timeframe::M3,
        Timeframe::M4,
        Timeframe::M5,
        Timeframe::M6,
        Timeframe::M10,
        Timeframe::M12,
        Timeframe::M15,
        Timeframe::M20,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H2,
        Timeframe::H3,
        Timeframe::H4,
        Timeframe::H6,
        Timeframe::H8,
        Timeframe::H12,
        Timeframe::D1,
        Timeframe::W1,
        Timeframe::MN1,
    ];

    /// Interval length in minutes (a month counts as 30 days)
    pub fn minutes(self) -> u32 {
        match self {
            Timeframe::M1 => 1,
            Timeframe::M2 => 2,
            Timeframe::M3 => 3,
            Timeframe::M4 => 4,
            Timeframe::M5 => 5,
            Timeframe::M6 => 6,
            Timeframe::M10 => 10,
            Timeframe::M12 => 12,
            Timeframe::M15 => 15,
            Timeframe::M20 => 20,
            Timeframe::M30 => 30,
            Timeframe::H1 => 60,
            Timeframe::H2 => 120,
            Timeframe::H3 => 180,
            Timeframe::H4 => 240,
            Timeframe::H6 => 360,
            Timeframe::H8 => 480,
            Timeframe::H12 => 720,
            Timeframe::D1 => 1440,
            Timeframe::W1 => 10080,
            Timeframe::MN1 => 43200,
        }
    }

    /// Canonical code, e.g. `"M15"`
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::M1 => "M1",
            Timeframe::M2 => "M2",
            Timeframe::M3 => "M3",
            Timeframe::M4 => "M4",
            Timeframe::M5 => "M5",
            Timeframe::M6 => "M6",
            Timeframe::M10 => "M10",
            Timeframe::M12 => "M12",
            Timeframe::M15 => "M15",
            Timeframe::M20 => "M20",
            Timeframe::M30 => "M30",
            Timeframe::H1 => "H1",
            Timeframe::H2 => "H2",
            Timeframe::H3 => "H3",
            Timeframe::H4 => "H4",
            Timeframe::H6 => "H6",
            Timeframe::H8 => "H8",
            Timeframe::H12 => "H12",
            Timeframe::D1 => "D1",
            Timeframe::W1 => "W1",
            Timeframe::MN1 => "MN1",
        }
    }

    /// Short exchange notation, e.g. `"15m"`, `"4h"`, `"1M"`
    pub fn short_code(self) -> String {
        match self {
            Timeframe::MN1 => "1M".to_string(),
            Timeframe::W1 => "1w".to_string(),
            Timeframe::D1 => "1d".to_string(),
            tf if tf.minutes() >= 60 => format!("{}h", tf.minutes() / 60),
            tf => format!("{}m", tf.minutes()),
        }
    }

    fn from_short_code(s: &str) -> Option<Self> {
        // "1M" is month; every other unit is case-insensitive
        if s == "1M" {
            return Some(Timeframe::MN1);
        }
        if !s.is_ascii() {
            return None;
        }
        let lower = s.to_ascii_lowercase();
        let (count, unit) = lower.split_at(lower.len().checked_sub(1)?);
        let count: u32 = count.parse().ok()?;
        let minutes = match unit {
            "m" => count,
            "h" => count.checked_mul(60)?,
            "d" => count.checked_mul(1440)?,
            "w" => count.checked_mul(10080)?,
            _ => return None,
        };
        Timeframe::ALL
            .iter()
            .copied()
            .find(|tf| tf.minutes() == minutes && *tf != Timeframe::MN1)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        let code = upper.strip_prefix("PERIOD_").unwrap_or(&upper);

        if let Some(tf) = Timeframe::ALL.iter().copied().find(|tf| tf.as_str() == code) {
            return Ok(tf);
        }

        Timeframe::from_short_code(trimmed)
            .ok_or_else(|| PresetError::UnknownTimeframe(s.to_string()))
    }
}

impl TryFrom<String> for Timeframe {
    type Error = PresetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_is_normalized() {
        assert_eq!(Symbol::new(" eurusd "), Symbol::new("EURUSD"));
        assert_eq!(Symbol::new("gbpUsd").as_str(), "GBPUSD");

        let sym: Symbol = serde_json::from_str("\"usdjpy\"").unwrap();
        assert_eq!(sym.as_str(), "USDJPY");
        assert_eq!(serde_json::to_string(&sym).unwrap(), "\"USDJPY\"");
    }

    #[test]
    fn test_parse_canonical_and_prefixed() {
        assert_eq!("M15".parse::<Timeframe>().unwrap(), Timeframe::M15);
        assert_eq!("h4".parse::<Timeframe>().unwrap(), Timeframe::H4);
        assert_eq!("PERIOD_H8".parse::<Timeframe>().unwrap(), Timeframe::H8);
        assert_eq!("MN1".parse::<Timeframe>().unwrap(), Timeframe::MN1);
    }

    #[test]
    fn test_parse_short_codes() {
        assert_eq!("1m".parse::<Timeframe>().unwrap(), Timeframe::M1);
        assert_eq!("30m".parse::<Timeframe>().unwrap(), Timeframe::M30);
        assert_eq!("4h".parse::<Timeframe>().unwrap(), Timeframe::H4);
        assert_eq!("1d".parse::<Timeframe>().unwrap(), Timeframe::D1);
        assert_eq!("1w".parse::<Timeframe>().unwrap(), Timeframe::W1);
        assert_eq!("1M".parse::<Timeframe>().unwrap(), Timeframe::MN1);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("7m".parse::<Timeframe>().is_err());
        assert!("".parse::<Timeframe>().is_err());
        assert!("H5".parse::<Timeframe>().is_err());
        assert!("fortnight".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_short_code_round_trips_through_parse() {
        for tf in Timeframe::ALL {
            assert_eq!(tf.short_code().parse::<Timeframe>().unwrap(), tf);
        }
    }

    #[test]
    fn test_ordering_follows_minutes() {
        let mut sorted = Timeframe::ALL;
        sorted.sort_by_key(|tf| tf.minutes());
        assert_eq!(sorted, Timeframe::ALL);
        assert!(Timeframe::M30 < Timeframe::H1);
    }

    #[test]
    fn test_serde_uses_canonical_code() {
        let json = serde_json::to_string(&Timeframe::H4).unwrap();
        assert_eq!(json, "\"H4\"");
        let tf: Timeframe = serde_json::from_str("\"15m\"").unwrap();
        assert_eq!(tf, Timeframe::M15);
    }
}
