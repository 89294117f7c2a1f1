//! Bandwidth unit normalization.
//!
//! Every value extracted from the source page is brought to megabits per
//! second before it is compared against the threshold. Only two unit codes
//! exist in the data: `m` (megabit) and `g` (gigabit, 1024 megabits).

use serde::Serialize;
use std::fmt;

/// Megabits in one gigabit
pub const MBPS_PER_GBPS: f64 = 1024.0;

/// A bandwidth quantity in megabits per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Mbps(pub f64);

impl Mbps {
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Strict comparison: a value equal to the threshold does not exceed it
    #[must_use]
    pub fn exceeds(self, threshold_mbps: f64) -> bool {
        self.0 > threshold_mbps
    }
}

impl fmt::Display for Mbps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Mbps", self.0)
    }
}

/// Unit code attached to a bandwidth figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandwidthUnit {
    Megabit,
    Gigabit,
}

impl BandwidthUnit {
    /// Parse a single-letter unit code, case-insensitive
    ///
    /// Anything other than `m`/`g` (including longer strings) is rejected.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "m" | "M" => Some(Self::Megabit),
            "g" | "G" => Some(Self::Gigabit),
            _ => None,
        }
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Megabit => 1.0,
            Self::Gigabit => MBPS_PER_GBPS,
        }
    }
}

/// Convert a numeric string and a unit code into Mbps.
///
/// Returns `None` when the number does not parse as a finite, non-negative
/// real or when the unit is not `m`/`g`.
#[must_use]
pub fn to_mbps(number: &str, unit: &str) -> Option<Mbps> {
    let unit = BandwidthUnit::from_code(unit)?;
    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(Mbps(value * unit.factor()))
}
