//! # DeckLoad 3D
//!
//! Deck grid and greedy load planner for the DeckLoad engine.
//!
//! A [`Vessel`] owns a [`DeckGrid`] of container slots addressed by
//! `(x, y, z)`: `x` runs along the length, `y` across the width and `z` up
//! the stack. [`Vessel::sort`] places general, climate and high-value
//! containers in fixed phases while keeping the two halves of the deck in
//! balance, and returns a [`LoadReport`] with the sailing checks.
//!
//! ```
//! use deckload_d3::{CargoUnit, Container, Quotas, Vessel};
//!
//! let mut vessel = Vessel::new(6, 5, 5).unwrap();
//! let containers = vec![
//!     Container::create(CargoUnit::general(2_000.0)).unwrap(),
//!     Container::create(CargoUnit::general(2_500.0)).unwrap(),
//! ];
//! let outcome = vessel.sort(containers, Quotas::default()).unwrap();
//! assert!(outcome.all_placed());
//! assert_eq!(vessel.weight(), 12_500.0);
//! ```

pub mod coordinate;
pub mod grid;
pub mod planner;
pub mod program;
pub mod report;
pub mod vessel;

// Re-exports
pub use coordinate::{Coordinate, Side};
pub use deckload_core::{CargoKind, CargoUnit, Container, Error, LoadConfig, Result};
pub use grid::DeckGrid;
pub use planner::{PassOutcome, Placement, Planner};
pub use program::{LoadingProgram, Manifest, Program};
pub use report::LoadReport;
pub use vessel::{LoadOutcome, Quotas, Vessel};
