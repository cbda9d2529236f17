//! Cargo classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of cargo, which decides where a container may be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CargoKind {
    /// Dry cargo with no placement restrictions beyond stacking weight.
    #[default]
    General,
    /// Refrigerated cargo; needs power and is confined to the reserved row.
    Climate,
    /// Valuable cargo; must stay accessible, so nothing is stacked on top.
    HighValue,
}

impl CargoKind {
    /// All kinds, in planning order.
    pub const ALL: [CargoKind; 3] = [CargoKind::General, CargoKind::Climate, CargoKind::HighValue];

    /// Returns a short display name.
    pub fn name(&self) -> &'static str {
        match self {
            CargoKind::General => "general",
            CargoKind::Climate => "climate",
            CargoKind::HighValue => "high-value",
        }
    }
}

impl fmt::Display for CargoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit of freight: its weight in kilograms and its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoUnit {
    weight: f64,
    kind: CargoKind,
}

impl CargoUnit {
    /// Creates a new cargo unit.
    pub fn new(weight: f64, kind: CargoKind) -> Self {
        Self { weight, kind }
    }

    /// Creates a general cargo unit.
    pub fn general(weight: f64) -> Self {
        Self::new(weight, CargoKind::General)
    }

    /// Creates a climate-controlled cargo unit.
    pub fn climate(weight: f64) -> Self {
        Self::new(weight, CargoKind::Climate)
    }

    /// Creates a high-value cargo unit.
    pub fn high_value(weight: f64) -> Self {
        Self::new(weight, CargoKind::HighValue)
    }

    /// Returns the cargo weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the cargo classification.
    pub fn kind(&self) -> CargoKind {
        self.kind
    }
}
