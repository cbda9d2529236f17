//! Load planning configuration.

use crate::cargo::CargoKind;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weight limits and acceptance thresholds used by the planner.
///
/// All weights are in kilograms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadConfig {
    /// Weight of an empty container.
    pub tare_weight: f64,

    /// Maximum cargo weight a single container may carry.
    pub max_cargo_weight: f64,

    /// Maximum weight of a loaded container (cargo plus tare).
    pub max_container_weight: f64,

    /// Maximum weight allowed below a General container in the same column.
    /// Kept lower than `stack_limit` so a HighValue container still fits on top.
    pub general_stack_limit: f64,

    /// Maximum weight allowed below a Climate or HighValue container.
    pub stack_limit: f64,

    /// Maximum total weight of the vessel's load.
    pub max_vessel_weight: f64,

    /// Fraction of `max_vessel_weight` that must be loaded (0.0 - 1.0).
    pub min_load_ratio: f64,

    /// Largest tolerated left/right difference as a fraction of the load (0.0 - 1.0).
    pub max_imbalance_ratio: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            tare_weight: 4_000.0,
            max_cargo_weight: 26_000.0,
            max_container_weight: 30_000.0,
            general_stack_limit: 90_000.0,
            stack_limit: 120_000.0,
            max_vessel_weight: 5_500_000.0,
            min_load_ratio: 0.5,
            max_imbalance_ratio: 0.2,
        }
    }
}

impl LoadConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tare weight.
    pub fn with_tare_weight(mut self, weight: f64) -> Self {
        self.tare_weight = weight;
        self
    }

    /// Sets the per-container cargo ceiling.
    pub fn with_max_cargo_weight(mut self, weight: f64) -> Self {
        self.max_cargo_weight = weight;
        self
    }

    /// Sets the loaded-container ceiling.
    pub fn with_max_container_weight(mut self, weight: f64) -> Self {
        self.max_container_weight = weight;
        self
    }

    /// Sets both stacking ceilings.
    pub fn with_stack_limits(mut self, general: f64, other: f64) -> Self {
        self.general_stack_limit = general;
        self.stack_limit = other;
        self
    }

    /// Sets the vessel's maximum total weight.
    pub fn with_max_vessel_weight(mut self, weight: f64) -> Self {
        self.max_vessel_weight = weight;
        self
    }

    /// Sets the minimum load ratio.
    pub fn with_min_load_ratio(mut self, ratio: f64) -> Self {
        self.min_load_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum left/right imbalance ratio.
    pub fn with_max_imbalance_ratio(mut self, ratio: f64) -> Self {
        self.max_imbalance_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Returns the weight-on-top ceiling for containers of the given kind.
    pub fn stack_limit_for(&self, kind: CargoKind) -> f64 {
        match kind {
            CargoKind::General => self.general_stack_limit,
            CargoKind::Climate | CargoKind::HighValue => self.stack_limit,
        }
    }

    /// Checks that the limits are positive and mutually consistent.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("tare_weight", self.tare_weight),
            ("max_cargo_weight", self.max_cargo_weight),
            ("max_container_weight", self.max_container_weight),
            ("general_stack_limit", self.general_stack_limit),
            ("stack_limit", self.stack_limit),
            ("max_vessel_weight", self.max_vessel_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ConfigError(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.tare_weight + self.max_cargo_weight > self.max_container_weight {
            return Err(Error::ConfigError(format!(
                "tare_weight ({}) plus max_cargo_weight ({}) exceeds max_container_weight ({})",
                self.tare_weight, self.max_cargo_weight, self.max_container_weight
            )));
        }

        if self.general_stack_limit > self.stack_limit {
            return Err(Error::ConfigError(format!(
                "general_stack_limit ({}) must not exceed stack_limit ({})",
                self.general_stack_limit, self.stack_limit
            )));
        }

        for (name, ratio) in [
            ("min_load_ratio", self.min_load_ratio),
            ("max_imbalance_ratio", self.max_imbalance_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Error::ConfigError(format!(
                    "{} must lie in [0, 1], got {}",
                    name, ratio
                )));
            }
        }

        Ok(())
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
