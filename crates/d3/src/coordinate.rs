//! Deck coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A slot position on the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Index along the deck length.
    pub x: usize,
    /// Index along the deck width.
    pub y: usize,
    /// Stacking level, 0 at the bottom.
    pub z: usize,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Returns the slot directly below, if any.
    pub fn below(&self) -> Option<Coordinate> {
        self.z.checked_sub(1).map(|z| Coordinate::new(self.x, self.y, z))
    }

    /// Returns the slot directly above. It may lie outside the deck.
    pub fn above(&self) -> Coordinate {
        Coordinate::new(self.x, self.y, self.z + 1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}, Z: {}", self.x, self.y, self.z)
    }
}

/// Which half of the deck a width index falls in.
///
/// Decks with an odd width have a middle column whose weight counts half to
/// each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Middle,
    Right,
}

impl Side {
    /// Classifies width index `y` on a deck of the given width.
    pub fn of(y: usize, width: usize) -> Self {
        let half = width / 2;
        if y < half {
            Side::Left
        } else if width % 2 == 1 && y == half {
            Side::Middle
        } else {
            Side::Right
        }
    }
}
