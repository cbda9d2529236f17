//! Shipping containers.
//!
//! A [`Container`] wraps a [`CargoUnit`] with the fixed tare weight of the box
//! itself. Every kind weighs the same way; the kind only matters to the planner.

use crate::cargo::{CargoKind, CargoUnit};
use crate::config::LoadConfig;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A loaded standard container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    cargo: CargoUnit,
    tare_weight: f64,
}

impl Container {
    /// Creates a container for the cargo using the default limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the cargo weight is not positive or
    /// exceeds the per-container cargo ceiling.
    pub fn create(cargo: CargoUnit) -> Result<Self> {
        Self::create_with(cargo, &LoadConfig::default())
    }

    /// Creates a container for the cargo using the given limits.
    pub fn create_with(cargo: CargoUnit, config: &LoadConfig) -> Result<Self> {
        let weight = cargo.weight();
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::out_of_range(
                "cargo.weight",
                format!("cargo weight must be positive, got {}", weight),
            ));
        }
        if weight > config.max_cargo_weight {
            return Err(Error::out_of_range(
                "cargo.weight",
                format!(
                    "{} {} kg exceeds the cargo ceiling of {} kg",
                    cargo.kind(),
                    weight,
                    config.max_cargo_weight
                ),
            ));
        }

        let container = Self {
            cargo,
            tare_weight: config.tare_weight,
        };
        if container.total_weight() > config.max_container_weight {
            return Err(Error::out_of_range(
                "cargo.weight",
                format!(
                    "loaded weight {} kg exceeds the container maximum of {} kg",
                    container.total_weight(),
                    config.max_container_weight
                ),
            ));
        }
        Ok(container)
    }

    /// Creates containers for every cargo unit, stopping at the first failure.
    pub fn create_all<I>(cargo: I, config: &LoadConfig) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = CargoUnit>,
    {
        cargo
            .into_iter()
            .map(|unit| Self::create_with(unit, config))
            .collect()
    }

    /// Returns the cargo inside this container.
    pub fn cargo(&self) -> &CargoUnit {
        &self.cargo
    }

    /// Returns the cargo classification.
    pub fn kind(&self) -> CargoKind {
        self.cargo.kind()
    }

    /// Returns the weight of the empty container.
    pub fn tare_weight(&self) -> f64 {
        self.tare_weight
    }

    /// Returns the cargo weight plus the tare weight.
    pub fn total_weight(&self) -> f64 {
        self.cargo.weight() + self.tare_weight
    }

    /// Returns true for high-value cargo.
    pub fn is_high_value(&self) -> bool {
        self.kind() == CargoKind::HighValue
    }

    /// Returns true for climate-controlled cargo.
    pub fn is_climate(&self) -> bool {
        self.kind() == CargoKind::Climate
    }
}
