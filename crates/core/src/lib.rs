//! # DeckLoad Core
//!
//! Core types shared by the DeckLoad planning crates.
//!
//! ## Core Components
//!
//! - **Cargo**: `CargoKind` classification and `CargoUnit` freight values
//! - **Containers**: `Container`, a cargo unit plus tare weight, validated at creation
//! - **Configuration**: `LoadConfig`, the weight ceilings and acceptance thresholds
//! - **Errors**: the crate-wide `Error` and `Result` types
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod cargo;
pub mod config;
pub mod container;
pub mod error;

// Re-exports
pub use cargo::{CargoKind, CargoUnit};
pub use config::LoadConfig;
pub use container::Container;
pub use error::{Error, Result};
