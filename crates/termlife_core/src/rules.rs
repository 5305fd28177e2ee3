//! Birth and survival rules for the supported automata.
//!
//! Every variant shares the Moore-neighborhood count and differs only in the
//! thresholds, so each one is a [`RuleTable`] of two bitmasks indexed by the
//! live-neighbor count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

const MAX_NEIGHBORS: u8 = 8;

/// Birth/survival thresholds. Bit `n` set means the rule fires for `n` live
/// neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    birth: u16,
    survival: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut bits = 0u16;
    let mut i = 0;
    while i < counts.len() {
        bits |= 1 << counts[i];
        i += 1;
    }
    bits
}

impl RuleTable {
    pub const LIFE: RuleTable = RuleTable::new(&[3], &[2, 3]);
    pub const DAY_NIGHT: RuleTable = RuleTable::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8]);
    pub const HIGH_LIFE: RuleTable = RuleTable::new(&[3, 6], &[2, 3]);
    pub const SEED: RuleTable = RuleTable::new(&[2], &[0, 1, 2, 3, 4, 5, 6, 7, 8]);

    #[must_use]
    pub const fn new(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: mask(birth),
            survival: mask(survival),
        }
    }

    #[inline]
    pub fn births(&self, live_neighbors: u8) -> bool {
        live_neighbors <= MAX_NEIGHBORS && self.birth & (1 << live_neighbors) != 0
    }

    #[inline]
    pub fn survives(&self, live_neighbors: u8) -> bool {
        live_neighbors <= MAX_NEIGHBORS && self.survival & (1 << live_neighbors) != 0
    }

    /// Liveness of a cell in the next generation.
    #[inline]
    pub fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        if alive {
            self.survives(live_neighbors)
        } else {
            self.births(live_neighbors)
        }
    }
}

/// `B3/S23` style notation.
impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in (0..=MAX_NEIGHBORS).filter(|&n| self.births(n)) {
            write!(f, "{n}")?;
        }
        write!(f, "/S")?;
        for n in (0..=MAX_NEIGHBORS).filter(|&n| self.survives(n)) {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Rule variant, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Life,
    DayNight,
    HighLife,
    Seed,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Life,
        Variant::DayNight,
        Variant::HighLife,
        Variant::Seed,
    ];

    pub fn rules(self) -> RuleTable {
        match self {
            Variant::Life => RuleTable::LIFE,
            Variant::DayNight => RuleTable::DAY_NIGHT,
            Variant::HighLife => RuleTable::HIGH_LIFE,
            Variant::Seed => RuleTable::SEED,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Life => "life",
            Variant::DayNight => "daynight",
            Variant::HighLife => "highlife",
            Variant::Seed => "seed",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| CoreError::UnknownVariant(s.to_string()))
    }
}

/// Next liveness of a cell under `variant`.
#[inline]
pub fn next_state(variant: Variant, alive: bool, live_neighbors: u8) -> bool {
    variant.rules().next_state(alive, live_neighbors)
}
