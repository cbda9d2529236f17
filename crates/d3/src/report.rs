//! Acceptance figures for a loaded deck.

use crate::grid::DeckGrid;
use crate::vessel::Quotas;
use deckload_core::{CargoKind, LoadConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of a deck's load, with the checks a vessel must pass before it
/// may set sail.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadReport {
    /// General containers on the deck.
    pub placed_general: usize,
    /// Climate containers on the deck.
    pub placed_climate: usize,
    /// High-value containers on the deck.
    pub placed_high_value: usize,
    /// The quotas the load was planned against.
    pub quotas: Quotas,
    /// Total load weight.
    pub total_weight: f64,
    /// Maximum load weight of the vessel.
    pub maximum_weight: f64,
    /// Weight on the left half of the deck.
    pub left_weight: f64,
    /// Weight on the right half of the deck.
    pub right_weight: f64,
    /// Required fraction of `maximum_weight`.
    pub min_load_ratio: f64,
    /// Tolerated left/right difference as a fraction of the load.
    pub max_imbalance_ratio: f64,
}

impl LoadReport {
    /// Measures the deck as it stands.
    pub fn from_deck(deck: &DeckGrid, quotas: Quotas, config: &LoadConfig) -> Self {
        let (left_weight, right_weight) = deck.left_right_weights();
        Self {
            placed_general: deck.count_of(CargoKind::General),
            placed_climate: deck.count_of(CargoKind::Climate),
            placed_high_value: deck.count_of(CargoKind::HighValue),
            quotas,
            total_weight: deck.total_weight(),
            maximum_weight: config.max_vessel_weight,
            left_weight,
            right_weight,
            min_load_ratio: config.min_load_ratio,
            max_imbalance_ratio: config.max_imbalance_ratio,
        }
    }

    /// Returns the number of containers of the given kind on the deck.
    pub fn placed(&self, kind: CargoKind) -> usize {
        match kind {
            CargoKind::General => self.placed_general,
            CargoKind::Climate => self.placed_climate,
            CargoKind::HighValue => self.placed_high_value,
        }
    }

    /// Returns true if enough general containers were placed.
    pub fn general_quota_met(&self) -> bool {
        self.placed_general >= self.quotas.general
    }

    /// Returns true if enough high-value containers were placed.
    pub fn high_value_quota_met(&self) -> bool {
        self.placed_high_value >= self.quotas.high_value
    }

    /// Returns true if enough climate containers were placed.
    pub fn climate_quota_met(&self) -> bool {
        self.placed_climate >= self.quotas.climate
    }

    /// Returns true if every kind reached its quota.
    pub fn quotas_met(&self) -> bool {
        self.general_quota_met() && self.high_value_quota_met() && self.climate_quota_met()
    }

    /// Returns the load as a fraction of the maximum weight.
    pub fn load_ratio(&self) -> f64 {
        if self.maximum_weight > 0.0 {
            self.total_weight / self.maximum_weight
        } else {
            0.0
        }
    }

    /// Returns true if the vessel carries at least the minimum load.
    pub fn meets_minimum_load(&self) -> bool {
        self.load_ratio() >= self.min_load_ratio
    }

    /// Returns `|left - right| / (left + right)`, or 0.0 for an empty deck.
    pub fn imbalance_ratio(&self) -> f64 {
        let total = self.left_weight + self.right_weight;
        if total > 0.0 {
            (self.left_weight - self.right_weight).abs() / total
        } else {
            0.0
        }
    }

    /// Returns true if the left/right difference is within tolerance.
    pub fn is_balanced(&self) -> bool {
        self.imbalance_ratio() <= self.max_imbalance_ratio
    }

    /// Returns true if the quotas, minimum load and balance checks all pass.
    pub fn can_set_sail(&self) -> bool {
        self.quotas_met() && self.meets_minimum_load() && self.is_balanced()
    }

    /// Returns the load ratio as a percentage string.
    pub fn load_percent(&self) -> String {
        format!("{:.1}%", self.load_ratio() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use deckload_core::{CargoUnit, Container};

    fn general(weight: f64) -> Container {
        Container::create(CargoUnit::general(weight)).unwrap()
    }

    #[test]
    fn test_empty_deck() {
        let deck = DeckGrid::new(2, 2, 2).unwrap();
        let report = LoadReport::from_deck(&deck, Quotas::default(), &LoadConfig::default());
        assert_eq!(report.total_weight, 0.0);
        assert_eq!(report.imbalance_ratio(), 0.0);
        assert!(report.is_balanced());
        assert!(report.quotas_met());
        assert!(!report.meets_minimum_load());
        assert!(!report.can_set_sail());
    }

    #[test]
    fn test_imbalance() {
        let mut deck = DeckGrid::new(1, 2, 1).unwrap();
        deck.set(0, 0, 0, general(26_000.0)).unwrap();
        deck.set(0, 1, 0, general(6_000.0)).unwrap();
        let report = LoadReport::from_deck(&deck, Quotas::default(), &LoadConfig::default());

        // 30,000 vs 10,000
        assert_relative_eq!(report.imbalance_ratio(), 0.5);
        assert!(!report.is_balanced());
    }

    #[test]
    fn test_minimum_load_and_sailing() {
        let config = LoadConfig::default().with_max_vessel_weight(100_000.0);
        let mut deck = DeckGrid::new(1, 2, 1).unwrap();
        deck.set(0, 0, 0, general(26_000.0)).unwrap();
        deck.set(0, 1, 0, general(24_000.0)).unwrap();
        let report = LoadReport::from_deck(&deck, Quotas::new(2, 0, 0), &config);

        assert_relative_eq!(report.load_ratio(), 0.58);
        assert_eq!(report.load_percent(), "58.0%");
        assert!(report.meets_minimum_load());
        assert!(report.is_balanced());
        assert_eq!(report.placed(CargoKind::General), 2);
        assert!(report.can_set_sail());

        let strict = LoadReport::from_deck(&deck, Quotas::new(3, 0, 0), &config);
        assert!(!strict.general_quota_met());
        assert!(!strict.can_set_sail());
    }
}
