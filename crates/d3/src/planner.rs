//! Greedy placement of containers onto a deck.
//!
//! The planner fills the deck one cargo kind at a time. Each pass takes
//! ownership of the candidate containers and hands back whatever it could not
//! place, so the phases can be chained and tested in isolation.
//!
//! # Algorithm
//!
//! The initial pass ([`Planner::place_all`]) works layer by layer:
//! 1. Split the containers into two queues by list-index parity
//! 2. For each height layer, collect the columns whose lowest free level is
//!    that layer and that lie in the kind's footprint
//! 3. Fill the middle column (odd widths only), then the left side, then the
//!    right side, outer columns first
//! 4. A location that fails the admission rules is skipped; a container that
//!    would overload the vessel aborts the whole pass
//!
//! The top-up pass ([`Planner::top_up`]) ignores layers and offers each
//! container the current top of every eligible column.
//!
//! # Admission rules
//!
//! - Nothing is stacked on a high-value container.
//! - A high-value container never sits directly above or below a climate one.
//! - The weight already in the column below the slot must not exceed the
//!   kind's stacking ceiling.

use crate::coordinate::{Coordinate, Side};
use crate::grid::DeckGrid;
use deckload_core::{CargoKind, Container, LoadConfig, Result};
use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A container placed at a deck coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Where the container went.
    pub coordinate: Coordinate,
    /// Copy of the container now held by the deck.
    pub container: Container,
}

/// Result of a single planner pass.
#[derive(Debug, Clone, Default)]
pub struct PassOutcome {
    /// Placements made during the pass, in placement order.
    pub placements: Vec<Placement>,
    /// Containers the pass did not place, heaviest first.
    pub leftover: Vec<Container>,
    /// Whether the pass stopped because the vessel weight limit was reached.
    pub aborted: bool,
}

impl PassOutcome {
    /// Returns the number of containers placed.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if nothing was left over.
    pub fn all_placed(&self) -> bool {
        self.leftover.is_empty()
    }
}

enum Fill {
    Continue,
    Abort,
}

/// Returns true if adding the container would push the deck past `maximum_weight`.
pub fn exceeds_maximum_weight(
    deck: &DeckGrid,
    container: &Container,
    maximum_weight: f64,
) -> bool {
    container.total_weight() + deck.total_weight() > maximum_weight
}

/// Splits containers into (left, right) queues by list-index parity.
///
/// Even indices go right and odd indices go left, so the heaviest container
/// of a descending list lands on the right and the next on the left.
pub fn split_alternating(
    containers: Vec<Container>,
) -> (VecDeque<Container>, VecDeque<Container>) {
    let mut left = VecDeque::with_capacity(containers.len() / 2);
    let mut right = VecDeque::with_capacity((containers.len() + 1) / 2);
    for (i, container) in containers.into_iter().enumerate() {
        if i % 2 == 0 {
            right.push_back(container);
        } else {
            left.push_back(container);
        }
    }
    (left, right)
}

/// Sorts containers by descending total weight. Equal weights keep their order.
pub fn sort_heaviest_first(containers: &mut [Container]) {
    containers.sort_by(|a, b| b.total_weight().total_cmp(&a.total_weight()));
}

/// Greedy deck planner.
pub struct Planner<'a> {
    config: &'a LoadConfig,
}

impl<'a> Planner<'a> {
    /// Creates a planner that applies the given limits.
    pub fn new(config: &'a LoadConfig) -> Self {
        Self { config }
    }

    /// Returns the limits in use.
    pub fn config(&self) -> &LoadConfig {
        self.config
    }

    /// Returns the current top of every column a container of `kind` may use.
    pub fn eligible_locations(&self, deck: &DeckGrid, kind: CargoKind) -> Vec<Coordinate> {
        match kind {
            CargoKind::General | CargoKind::HighValue => {
                deck.free_locations_excluding_last_row().collect()
            }
            CargoKind::Climate => deck.free_locations_in_reserved_row().collect(),
        }
    }

    /// Returns true if a container of `kind` may go at `location`.
    ///
    /// The location is assumed to be empty and supported.
    pub fn admits(&self, deck: &DeckGrid, kind: CargoKind, location: Coordinate) -> bool {
        if deck.below(location).map_or(false, Container::is_high_value) {
            return false;
        }

        if kind == CargoKind::HighValue {
            let next_to_climate = deck.below(location).map_or(false, Container::is_climate)
                || deck.above(location).map_or(false, Container::is_climate);
            if next_to_climate {
                return false;
            }
        }

        deck.weight_below(location) <= self.config.stack_limit_for(kind)
    }

    /// Places as many containers of `kind` as possible, layer by layer.
    ///
    /// Containers of another kind are returned untouched in the leftover list.
    pub fn place_all(
        &self,
        deck: &mut DeckGrid,
        kind: CargoKind,
        containers: Vec<Container>,
    ) -> Result<PassOutcome> {
        let (matching, mut leftover): (Vec<Container>, Vec<Container>) =
            containers.into_iter().partition(|c| c.kind() == kind);
        let total = matching.len();
        let (mut left, mut right) = split_alternating(matching);

        let mut placements = Vec::with_capacity(total);
        let mut aborted = false;

        for z in 0..deck.height() {
            if left.is_empty() && right.is_empty() {
                break;
            }

            let (left_locations, middle_locations, right_locations) =
                self.locations_at_height(deck, kind, z);
            log::debug!(
                "{} layer {}: {} left, {} middle, {} right locations",
                kind,
                z,
                left_locations.len(),
                middle_locations.len(),
                right_locations.len()
            );

            // Alternate which side feeds the middle column first.
            let filled = if z % 2 == 0 {
                self.fill_middle(
                    deck,
                    kind,
                    &mut left,
                    &mut right,
                    &middle_locations,
                    &mut placements,
                )?
            } else {
                self.fill_middle(
                    deck,
                    kind,
                    &mut right,
                    &mut left,
                    &middle_locations,
                    &mut placements,
                )?
            };
            if let Fill::Abort = filled {
                aborted = true;
                break;
            }

            if let Fill::Abort =
                self.fill_side(deck, kind, &mut left, &left_locations, &mut placements)?
            {
                aborted = true;
                break;
            }
            if let Fill::Abort =
                self.fill_side(deck, kind, &mut right, &right_locations, &mut placements)?
            {
                aborted = true;
                break;
            }
        }

        let mut unplaced: Vec<Container> = left.into_iter().chain(right).collect();
        sort_heaviest_first(&mut unplaced);
        leftover.extend(unplaced);

        if aborted {
            log::warn!(
                "{} pass stopped at the vessel weight limit with {} containers unplaced",
                kind,
                leftover.len()
            );
        }
        log::debug!(
            "{} pass placed {} of {} containers",
            kind,
            placements.len(),
            total
        );

        Ok(PassOutcome {
            placements,
            leftover,
            aborted,
        })
    }

    /// Places up to `count` containers of `kind` on top of the current stacks.
    ///
    /// Each container is offered the top of every eligible column in deck
    /// order; a container that fits nowhere stays in the leftover list.
    pub fn top_up(
        &self,
        deck: &mut DeckGrid,
        kind: CargoKind,
        containers: Vec<Container>,
        count: usize,
    ) -> Result<PassOutcome> {
        let mut placements = Vec::with_capacity(count);
        let mut leftover = Vec::new();
        let mut aborted = false;

        for container in containers {
            if aborted || placements.len() >= count || container.kind() != kind {
                leftover.push(container);
                continue;
            }
            if exceeds_maximum_weight(deck, &container, self.config.max_vessel_weight) {
                aborted = true;
                leftover.push(container);
                continue;
            }

            let target = self
                .eligible_locations(deck, kind)
                .into_iter()
                .find(|&location| self.admits(deck, kind, location));

            match target {
                Some(coordinate) => {
                    deck.set_at(coordinate, container.clone())?;
                    placements.push(Placement {
                        coordinate,
                        container,
                    });
                }
                None => leftover.push(container),
            }
        }

        if aborted {
            log::warn!("{} top-up stopped at the vessel weight limit", kind);
        }
        log::debug!(
            "{} top-up placed {} of {} requested",
            kind,
            placements.len(),
            count
        );

        Ok(PassOutcome {
            placements,
            leftover,
            aborted,
        })
    }

    /// Partitions the eligible locations at height `z` into left, middle and right.
    ///
    /// Left is ordered by ascending width index and right by descending width
    /// index, so both sides fill from the outside in.
    fn locations_at_height(
        &self,
        deck: &DeckGrid,
        kind: CargoKind,
        z: usize,
    ) -> (Vec<Coordinate>, Vec<Coordinate>, Vec<Coordinate>) {
        let mut left = Vec::new();
        let mut middle = Vec::new();
        let mut right = Vec::new();

        for location in self
            .eligible_locations(deck, kind)
            .into_iter()
            .filter(|c| c.z == z)
        {
            match deck.side(location.y) {
                Side::Left => left.push(location),
                Side::Middle => middle.push(location),
                Side::Right => right.push(location),
            }
        }

        left.sort_by_key(|c| c.y);
        right.sort_by_key(|c| std::cmp::Reverse(c.y));
        (left, middle, right)
    }

    fn fill_side(
        &self,
        deck: &mut DeckGrid,
        kind: CargoKind,
        queue: &mut VecDeque<Container>,
        locations: &[Coordinate],
        placements: &mut Vec<Placement>,
    ) -> Result<Fill> {
        for &location in locations {
            let Some(next) = queue.front() else {
                break;
            };
            if exceeds_maximum_weight(deck, next, self.config.max_vessel_weight) {
                return Ok(Fill::Abort);
            }
            if !self.admits(deck, kind, location) {
                continue;
            }
            if let Some(container) = queue.pop_front() {
                self.place(deck, location, container, placements)?;
            }
        }
        Ok(Fill::Continue)
    }

    /// Fills the middle column, alternating between the two queues after
    /// every placement and starting with `first`.
    fn fill_middle(
        &self,
        deck: &mut DeckGrid,
        kind: CargoKind,
        first: &mut VecDeque<Container>,
        second: &mut VecDeque<Container>,
        locations: &[Coordinate],
        placements: &mut Vec<Placement>,
    ) -> Result<Fill> {
        let mut take_first = true;
        for &location in locations {
            let queue = if (take_first && !first.is_empty()) || second.is_empty() {
                &mut *first
            } else {
                &mut *second
            };
            let Some(next) = queue.front() else {
                break;
            };
            if exceeds_maximum_weight(deck, next, self.config.max_vessel_weight) {
                return Ok(Fill::Abort);
            }
            if !self.admits(deck, kind, location) {
                continue;
            }
            if let Some(container) = queue.pop_front() {
                self.place(deck, location, container, placements)?;
                take_first = !take_first;
            }
        }
        Ok(Fill::Continue)
    }

    fn place(
        &self,
        deck: &mut DeckGrid,
        coordinate: Coordinate,
        container: Container,
        placements: &mut Vec<Placement>,
    ) -> Result<()> {
        let previous = deck.set_at(coordinate, container.clone())?;
        debug_assert!(previous.is_none(), "slot {} was already occupied", coordinate);
        placements.push(Placement {
            coordinate,
            container,
        });
        Ok(())
    }
}
