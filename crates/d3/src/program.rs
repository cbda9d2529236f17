//! Setup/run lifecycle for a load plan.
//!
//! A [`LoadingProgram`] turns a [`Manifest`] into a vessel and a list of
//! containers during [`Program::setup`], and plans the load in
//! [`Program::run`]. Running before setup is an error.

use crate::vessel::{LoadOutcome, Quotas, Vessel};
use deckload_core::{CargoUnit, Container, Error, LoadConfig, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A program with a mandatory setup step before it can run.
pub trait Program {
    /// What a successful run produces.
    type Output;

    /// Returns the program name.
    fn name(&self) -> &str;

    /// Returns a one-line description.
    fn description(&self) -> &str;

    /// Returns true once setup has completed and a run is pending.
    fn has_setup_ran(&self) -> bool;

    /// Prepares the program to run.
    fn setup(&mut self) -> Result<()>;

    /// Runs the program.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SetupNotRun`] if [`setup`](Self::setup) has not been called.
    fn run(&mut self) -> Result<Self::Output>;
}

/// Deck dimensions, cargo and quotas for one load.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Manifest {
    /// Number of rows along the deck.
    pub length: usize,
    /// Number of columns across the deck.
    pub width: usize,
    /// Number of stacking levels.
    pub height: usize,
    /// Freight to load, one container per unit.
    pub cargo: Vec<CargoUnit>,
    /// Minimum placements per kind; none by default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quotas: Quotas,
    /// Weight limits; the defaults when omitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub config: LoadConfig,
}

impl Manifest {
    /// Creates a manifest for a deck with default limits and no quotas.
    pub fn new(length: usize, width: usize, height: usize, cargo: Vec<CargoUnit>) -> Self {
        Self {
            length,
            width,
            height,
            cargo,
            quotas: Quotas::default(),
            config: LoadConfig::default(),
        }
    }

    /// Sets the quotas.
    pub fn with_quotas(mut self, quotas: Quotas) -> Self {
        self.quotas = quotas;
        self
    }

    /// Sets the limits.
    pub fn with_config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a manifest from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SerializationError(e.to_string()))
    }
}

struct Prepared {
    vessel: Vessel,
    containers: Vec<Container>,
}

/// Plans the load described by a manifest.
pub struct LoadingProgram {
    manifest: Manifest,
    prepared: Option<Prepared>,
}

impl LoadingProgram {
    /// Creates a program for the manifest. Call [`Program::setup`] before running.
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            prepared: None,
        }
    }

    /// Returns the manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Returns the prepared vessel, if setup has run.
    pub fn vessel(&self) -> Option<&Vessel> {
        self.prepared.as_ref().map(|p| &p.vessel)
    }
}

impl Program for LoadingProgram {
    type Output = (Vessel, LoadOutcome);

    fn name(&self) -> &str {
        "LoadingProgram"
    }

    fn description(&self) -> &str {
        "Sort containers onto the vessel deck."
    }

    fn has_setup_ran(&self) -> bool {
        self.prepared.is_some()
    }

    fn setup(&mut self) -> Result<()> {
        let manifest = &self.manifest;
        if manifest.cargo.is_empty() {
            return Err(Error::EmptyInput("manifest lists no cargo".into()));
        }

        let vessel = Vessel::with_config(
            manifest.length,
            manifest.width,
            manifest.height,
            manifest.config.clone(),
        )?;
        let containers = Container::create_all(manifest.cargo.iter().copied(), &manifest.config)?;
        log::debug!(
            "prepared {} containers for a {} x {} x {} deck",
            containers.len(),
            manifest.length,
            manifest.width,
            manifest.height
        );

        self.prepared = Some(Prepared { vessel, containers });
        Ok(())
    }

    /// Consumes the prepared state; another run needs another setup.
    fn run(&mut self) -> Result<Self::Output> {
        let Prepared {
            mut vessel,
            containers,
        } = self.prepared.take().ok_or(Error::SetupNotRun)?;
        let outcome = vessel.sort(containers, self.manifest.quotas)?;
        Ok((vessel, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest::new(
            6,
            5,
            5,
            vec![
                CargoUnit::general(2_000.0),
                CargoUnit::general(2_500.0),
                CargoUnit::climate(10_000.0),
            ],
        )
        .with_quotas(Quotas::new(2, 0, 1))
    }

    #[test]
    fn test_run_without_setup() {
        let mut program = LoadingProgram::new(manifest());
        assert!(!program.has_setup_ran());
        assert!(matches!(program.run(), Err(Error::SetupNotRun)));
    }

    #[test]
    fn test_setup_then_run() {
        let mut program = LoadingProgram::new(manifest());
        program.setup().unwrap();
        assert!(program.has_setup_ran());
        assert!(program.vessel().is_some());

        let (vessel, outcome) = program.run().unwrap();
        assert!(outcome.all_placed());
        assert_eq!(vessel.deck().occupied_count(), 3);
        assert!(outcome.report.quotas_met());

        // The prepared state is consumed by the run.
        assert!(!program.has_setup_ran());
        assert!(matches!(program.run(), Err(Error::SetupNotRun)));
    }

    #[test]
    fn test_setup_rejects_empty_manifest() {
        let mut program = LoadingProgram::new(Manifest::new(6, 5, 5, Vec::new()));
        assert!(matches!(program.setup(), Err(Error::EmptyInput(_))));
        assert!(!program.has_setup_ran());
    }

    #[test]
    fn test_setup_surfaces_container_errors() {
        let mut program = LoadingProgram::new(Manifest::new(
            6,
            5,
            5,
            vec![CargoUnit::general(26_001.0)],
        ));
        let err = program.setup().unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
        assert!(!program.has_setup_ran());
    }

    #[test]
    fn test_names() {
        let program = LoadingProgram::new(manifest());
        assert_eq!(program.name(), "LoadingProgram");
        assert!(!program.description().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_manifest_from_json() {
        let json = r#"{
            "length": 4,
            "width": 3,
            "height": 2,
            "cargo": [
                { "weight": 12000.0, "kind": "General" },
                { "weight": 8000.0, "kind": "HighValue" }
            ],
            "quotas": { "general": 1, "high_value": 1, "climate": 0 }
        }"#;
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.cargo.len(), 2);
        assert_eq!(manifest.config, LoadConfig::default());

        let mut program = LoadingProgram::new(manifest);
        program.setup().unwrap();
        let (_, outcome) = program.run().unwrap();
        assert!(outcome.report.quotas_met());
    }
}
