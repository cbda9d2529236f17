//! # DeckLoad
//!
//! Greedy 3D deck-loading engine for classified cargo containers.
//!
//! This crate provides:
//! - **Cargo model**: weights, classifications and container creation limits
//! - **Deck planning**: layer-by-layer placement that keeps a vessel balanced
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use deckload::d3::{LoadingProgram, Manifest, Program, Quotas};
//! use deckload::core::CargoUnit;
//!
//! let manifest = Manifest::new(6, 5, 5, vec![CargoUnit::general(12_000.0)])
//!     .with_quotas(Quotas::new(1, 0, 0));
//! let mut program = LoadingProgram::new(manifest);
//! program.setup()?;
//! let (vessel, outcome) = program.run()?;
//! println!("loaded {}", outcome.report.load_percent());
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): deck grid and load planner
//! - `serde`: Serialization support

/// Cargo model, limits and errors.
pub use deckload_core as core;

/// Deck grid and load planner.
#[cfg(feature = "d3")]
pub use deckload_d3 as d3;

// Re-export commonly used types at root level
pub use deckload_core::{CargoKind, CargoUnit, Container, Error, LoadConfig, Result};
