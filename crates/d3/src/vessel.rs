//! The vessel: a deck plus the load-planning entry point.

use crate::grid::DeckGrid;
use crate::planner::{exceeds_maximum_weight, sort_heaviest_first, Placement, Planner};
use crate::report::LoadReport;
use deckload_core::{CargoKind, Container, Error, LoadConfig, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum number of containers of each kind that a load must place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quotas {
    /// Minimum number of general containers.
    pub general: usize,
    /// Minimum number of high-value containers.
    pub high_value: usize,
    /// Minimum number of climate containers.
    pub climate: usize,
}

impl Quotas {
    /// Creates quotas in the order (general, high-value, climate).
    pub fn new(general: usize, high_value: usize, climate: usize) -> Self {
        Self {
            general,
            high_value,
            climate,
        }
    }

    /// Returns the quota for the given kind.
    pub fn for_kind(&self, kind: CargoKind) -> usize {
        match kind {
            CargoKind::General => self.general,
            CargoKind::Climate => self.climate,
            CargoKind::HighValue => self.high_value,
        }
    }

    fn parameter(kind: CargoKind) -> &'static str {
        match kind {
            CargoKind::General => "min_general",
            CargoKind::Climate => "min_climate",
            CargoKind::HighValue => "min_valuable",
        }
    }
}

/// Everything a call to [`Vessel::sort`] produced.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
    /// General containers that were not placed, heaviest first.
    pub leftover_general: Vec<Container>,
    /// Climate containers that were not placed, heaviest first.
    pub leftover_climate: Vec<Container>,
    /// High-value containers that were not placed, heaviest first.
    pub leftover_high_value: Vec<Container>,
    /// Acceptance figures for the deck after loading.
    pub report: LoadReport,
}

impl LoadOutcome {
    /// Returns the number of containers placed by this load.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of placements of the given kind.
    pub fn placed_of(&self, kind: CargoKind) -> usize {
        self.placements
            .iter()
            .filter(|p| p.container.kind() == kind)
            .count()
    }

    /// Returns the number of containers left ashore.
    pub fn leftover_count(&self) -> usize {
        self.leftover_general.len() + self.leftover_climate.len() + self.leftover_high_value.len()
    }

    /// Returns true if every container was placed.
    pub fn all_placed(&self) -> bool {
        self.leftover_count() == 0
    }
}

/// A cargo vessel with a single container deck.
#[derive(Debug, Clone)]
pub struct Vessel {
    deck: DeckGrid,
    config: LoadConfig,
}

impl Vessel {
    /// Creates a vessel with the given deck dimensions and default limits.
    pub fn new(length: usize, width: usize, height: usize) -> Result<Self> {
        Self::with_config(length, width, height, LoadConfig::default())
    }

    /// Creates a vessel with the given deck dimensions and limits.
    pub fn with_config(
        length: usize,
        width: usize,
        height: usize,
        config: LoadConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            deck: DeckGrid::new(length, width, height)?,
            config,
        })
    }

    /// Returns the container deck.
    pub fn deck(&self) -> &DeckGrid {
        &self.deck
    }

    /// Returns the limits this vessel plans with.
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Returns the maximum total load weight.
    pub fn maximum_weight(&self) -> f64 {
        self.config.max_vessel_weight
    }

    /// Returns the current load weight.
    pub fn weight(&self) -> f64 {
        self.deck.total_weight()
    }

    /// Returns true if loading the container would exceed the maximum weight.
    pub fn check_exceeds_maximum_weight(&self, container: &Container) -> bool {
        exceeds_maximum_weight(&self.deck, container, self.config.max_vessel_weight)
    }

    /// Loads the containers onto the deck.
    ///
    /// Phases run in this order: all general, all climate, general top-up
    /// to its quota, all high-value. Containers that could not be placed are
    /// returned in the outcome, grouped by kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] before touching the deck if a quota is
    /// larger than the supply of its kind, or if the high-value quota exceeds
    /// the deck footprint.
    pub fn sort(&mut self, containers: Vec<Container>, quotas: Quotas) -> Result<LoadOutcome> {
        let mut general = Vec::new();
        let mut climate = Vec::new();
        let mut high_value = Vec::new();
        for container in containers {
            match container.kind() {
                CargoKind::General => general.push(container),
                CargoKind::Climate => climate.push(container),
                CargoKind::HighValue => high_value.push(container),
            }
        }
        sort_heaviest_first(&mut general);
        sort_heaviest_first(&mut climate);
        sort_heaviest_first(&mut high_value);

        self.validate_quotas(
            quotas,
            [
                (CargoKind::General, general.len()),
                (CargoKind::HighValue, high_value.len()),
                (CargoKind::Climate, climate.len()),
            ],
        )?;

        let planner = Planner::new(&self.config);
        let mut placements = Vec::new();

        let pass = planner.place_all(&mut self.deck, CargoKind::General, general)?;
        let mut placed_general = pass.placed_count();
        placements.extend(pass.placements);
        let mut general = pass.leftover;

        let pass = planner.place_all(&mut self.deck, CargoKind::Climate, climate)?;
        let placed_climate = pass.placed_count();
        placements.extend(pass.placements);
        let climate = pass.leftover;

        if placed_general < quotas.general {
            let shortfall = quotas.general - placed_general;
            log::debug!("general quota short by {}, running top-up", shortfall);
            let pass = planner.top_up(&mut self.deck, CargoKind::General, general, shortfall)?;
            placed_general += pass.placed_count();
            placements.extend(pass.placements);
            general = pass.leftover;
        }

        let pass = planner.place_all(&mut self.deck, CargoKind::HighValue, high_value)?;
        let placed_high_value = pass.placed_count();
        placements.extend(pass.placements);
        let high_value = pass.leftover;

        // High-value and climate top-ups are not implemented; report the shortfall.
        if placed_high_value < quotas.high_value {
            log::warn!(
                "placed {} of {} required high-value containers",
                placed_high_value,
                quotas.high_value
            );
        }
        if placed_climate < quotas.climate {
            log::warn!(
                "placed {} of {} required climate containers",
                placed_climate,
                quotas.climate
            );
        }
        if placed_general < quotas.general {
            log::warn!(
                "placed {} of {} required general containers",
                placed_general,
                quotas.general
            );
        }

        let report = LoadReport::from_deck(&self.deck, quotas, &self.config);
        log::debug!(
            "load finished: {} placed, {:.0} kg, left {:.0} kg / right {:.0} kg",
            placements.len(),
            report.total_weight,
            report.left_weight,
            report.right_weight
        );

        Ok(LoadOutcome {
            placements,
            leftover_general: general,
            leftover_climate: climate,
            leftover_high_value: high_value,
            report,
        })
    }

    fn validate_quotas(&self, quotas: Quotas, supply: [(CargoKind, usize); 3]) -> Result<()> {
        for (kind, available) in supply {
            let required = quotas.for_kind(kind);
            if required > available {
                return Err(Error::out_of_range(
                    Quotas::parameter(kind),
                    format!(
                        "requested {} {} containers but only {} supplied",
                        required, kind, available
                    ),
                ));
            }
        }

        if quotas.high_value > self.deck.footprint() {
            return Err(Error::out_of_range(
                Quotas::parameter(CargoKind::HighValue),
                format!(
                    "requested {} high-value containers but the deck has only {} columns",
                    quotas.high_value,
                    self.deck.footprint()
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use deckload_core::CargoUnit;

    fn container(kind: CargoKind, weight: f64) -> Container {
        Container::create(CargoUnit::new(weight, kind)).unwrap()
    }

    #[test]
    fn test_new_validates() {
        assert!(Vessel::new(0, 5, 5).is_err());
        let bad = LoadConfig::default().with_tare_weight(10_000.0);
        assert!(matches!(
            Vessel::with_config(6, 5, 5, bad),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_weight_is_derived_from_deck() {
        let mut vessel = Vessel::new(6, 5, 5).unwrap();
        assert_eq!(vessel.weight(), 0.0);
        vessel
            .sort(vec![container(CargoKind::General, 2_000.0)], Quotas::default())
            .unwrap();
        assert_relative_eq!(vessel.weight(), 6_000.0);
        assert_relative_eq!(vessel.weight(), vessel.deck().total_weight());
    }

    #[test]
    fn test_check_exceeds_maximum_weight() {
        let config = LoadConfig::default().with_max_vessel_weight(10_000.0);
        let mut vessel = Vessel::with_config(3, 2, 2, config).unwrap();
        let light = container(CargoKind::General, 1_000.0);
        assert!(!vessel.check_exceeds_maximum_weight(&light));

        vessel.sort(vec![light.clone()], Quotas::default()).unwrap();
        assert!(!vessel.check_exceeds_maximum_weight(&light));
        assert!(vessel.check_exceeds_maximum_weight(&container(CargoKind::General, 1_001.0)));
    }

    #[test]
    fn test_quota_over_supply_names_parameter() {
        let mut vessel = Vessel::new(6, 5, 5).unwrap();
        let err = vessel
            .sort(
                vec![container(CargoKind::General, 1_000.0)],
                Quotas::new(2, 0, 0),
            )
            .unwrap_err();
        assert_eq!(err.parameter(), Some("min_general"));

        let err = vessel.sort(Vec::new(), Quotas::new(0, 0, 1)).unwrap_err();
        assert_eq!(err.parameter(), Some("min_climate"));
        assert_eq!(vessel.deck().occupied_count(), 0);
    }

    #[test]
    fn test_high_value_quota_bounded_by_footprint() {
        let mut vessel = Vessel::new(2, 2, 5).unwrap();
        let valuables: Vec<Container> = (0..5)
            .map(|_| container(CargoKind::HighValue, 1_000.0))
            .collect();
        let err = vessel.sort(valuables, Quotas::new(0, 5, 0)).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
        assert_eq!(err.parameter(), Some("min_valuable"));
    }

    #[test]
    fn test_phases_by_kind() {
        let mut vessel = Vessel::new(3, 2, 3).unwrap();
        let containers = vec![
            container(CargoKind::HighValue, 10_000.0),
            container(CargoKind::General, 5_000.0),
            container(CargoKind::Climate, 8_000.0),
            container(CargoKind::General, 6_000.0),
        ];
        let outcome = vessel.sort(containers, Quotas::new(2, 1, 1)).unwrap();

        assert!(outcome.all_placed());
        assert_eq!(outcome.placed_of(CargoKind::General), 2);
        assert_eq!(outcome.placed_of(CargoKind::Climate), 1);
        assert_eq!(outcome.placed_of(CargoKind::HighValue), 1);
        // General first, then climate, then high-value.
        let kinds: Vec<CargoKind> = outcome
            .placements
            .iter()
            .map(|p| p.container.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                CargoKind::General,
                CargoKind::General,
                CargoKind::Climate,
                CargoKind::HighValue
            ]
        );
        assert!(outcome.report.quotas_met());
    }

    #[test]
    fn test_high_value_stays_on_top() {
        let mut vessel = Vessel::new(2, 1, 4).unwrap();
        let containers = vec![
            container(CargoKind::HighValue, 1_000.0),
            container(CargoKind::HighValue, 1_000.0),
            container(CargoKind::General, 1_000.0),
        ];
        let outcome = vessel.sort(containers, Quotas::new(1, 1, 0)).unwrap();

        // One general column: general at the bottom, a single valuable on top.
        assert_eq!(outcome.placed_of(CargoKind::General), 1);
        assert_eq!(outcome.placed_of(CargoKind::HighValue), 1);
        assert_eq!(outcome.leftover_high_value.len(), 1);
        let valuable = outcome
            .placements
            .iter()
            .find(|p| p.container.is_high_value())
            .unwrap();
        assert_eq!(valuable.coordinate.z, 1);
    }
}
