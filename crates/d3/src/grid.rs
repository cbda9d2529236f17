//! The container deck as a dense 3D grid.
//!
//! Slots are stored in a flat buffer indexed by `(x * width + y) * height + z`,
//! so one `(x, y)` column is contiguous. Every public accessor is bounds
//! checked and returns [`Error::IndexOutOfBounds`] on a bad coordinate.
//!
//! Free-slot enumeration models container-yard stacking: a container is
//! dropped onto the lowest empty level of a column, so each column offers at
//! most one free location at a time.

use crate::coordinate::{Coordinate, Side};
use deckload_core::{CargoKind, Container, Error, Result};
use std::ops::Range;

/// A fixed-size deck of optional container slots.
#[derive(Debug, Clone)]
pub struct DeckGrid {
    length: usize,
    width: usize,
    height: usize,
    slots: Vec<Option<Container>>,
}

impl DeckGrid {
    /// Creates an empty deck with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDeck`] if any dimension is zero.
    pub fn new(length: usize, width: usize, height: usize) -> Result<Self> {
        if length == 0 || width == 0 || height == 0 {
            return Err(Error::InvalidDeck(format!(
                "all dimensions must be at least 1, got {} x {} x {}",
                length, width, height
            )));
        }
        let volume = length
            .checked_mul(width)
            .and_then(|v| v.checked_mul(height))
            .ok_or_else(|| Error::InvalidDeck("deck volume overflows usize".into()))?;

        Ok(Self {
            length,
            width,
            height,
            slots: vec![None; volume],
        })
    }

    /// Returns the number of rows along the length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the number of columns across the width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of stacking levels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of `(x, y)` columns.
    pub fn footprint(&self) -> usize {
        self.length * self.width
    }

    /// Returns the total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the length index of the row reserved for climate containers.
    pub fn reserved_row(&self) -> usize {
        self.length - 1
    }

    /// Returns true if the coordinate lies on the deck.
    pub fn contains(&self, c: Coordinate) -> bool {
        c.x < self.length && c.y < self.width && c.z < self.height
    }

    /// Returns which side of the deck width index `y` belongs to.
    pub fn side(&self, y: usize) -> Side {
        Side::of(y, self.width)
    }

    fn offset(&self, x: usize, y: usize, z: usize) -> Result<usize> {
        if x >= self.length || y >= self.width || z >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                z,
                length: self.length,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x, y, z))
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.length && y < self.width && z < self.height);
        (x * self.width + y) * self.height + z
    }

    /// Returns the container at `(x, y, z)`, if the slot is occupied.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<Option<&Container>> {
        let i = self.offset(x, y, z)?;
        Ok(self.slots[i].as_ref())
    }

    /// Returns the container at the coordinate, if the slot is occupied.
    pub fn get_at(&self, c: Coordinate) -> Result<Option<&Container>> {
        self.get(c.x, c.y, c.z)
    }

    /// Puts a container at `(x, y, z)` and returns the previous occupant.
    pub fn set(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        container: Container,
    ) -> Result<Option<Container>> {
        let i = self.offset(x, y, z)?;
        Ok(self.slots[i].replace(container))
    }

    /// Puts a container at the coordinate and returns the previous occupant.
    pub fn set_at(&mut self, c: Coordinate, container: Container) -> Result<Option<Container>> {
        self.set(c.x, c.y, c.z, container)
    }

    /// Removes and returns the container at the coordinate.
    pub fn take_at(&mut self, c: Coordinate) -> Result<Option<Container>> {
        let i = self.offset(c.x, c.y, c.z)?;
        Ok(self.slots[i].take())
    }

    /// Returns the container directly below `c`, if any.
    pub fn below(&self, c: Coordinate) -> Option<&Container> {
        c.below()
            .filter(|b| self.contains(*b))
            .and_then(|b| self.slots[self.index(b.x, b.y, b.z)].as_ref())
    }

    /// Returns the container directly above `c`, if any.
    pub fn above(&self, c: Coordinate) -> Option<&Container> {
        let a = c.above();
        if self.contains(a) {
            self.slots[self.index(a.x, a.y, a.z)].as_ref()
        } else {
            None
        }
    }

    /// Sums the weight of every container strictly below `c` in its column.
    pub fn weight_below(&self, c: Coordinate) -> f64 {
        if c.x >= self.length || c.y >= self.width {
            return 0.0;
        }
        (0..c.z.min(self.height))
            .filter_map(|z| self.slots[self.index(c.x, c.y, z)].as_ref())
            .map(Container::total_weight)
            .sum()
    }

    /// Returns the combined weight of all placed containers.
    pub fn total_weight(&self) -> f64 {
        self.slots
            .iter()
            .flatten()
            .map(Container::total_weight)
            .sum()
    }

    /// Returns the weight carried by the left and right halves of the deck.
    ///
    /// With an odd width the middle column counts half towards each side.
    pub fn left_right_weights(&self) -> (f64, f64) {
        let mut left = 0.0;
        let mut right = 0.0;

        for (c, container) in self.occupied() {
            let weight = container.total_weight();
            match self.side(c.y) {
                Side::Left => left += weight,
                Side::Right => right += weight,
                Side::Middle => {
                    let half = weight / 2.0;
                    left += half;
                    right += half;
                }
            }
        }

        (left, right)
    }

    /// Iterates over every occupied slot.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, &Container)> + '_ {
        self.slots.iter().enumerate().filter_map(move |(i, slot)| {
            slot.as_ref().map(|container| (self.coordinate_of(i), container))
        })
    }

    fn coordinate_of(&self, index: usize) -> Coordinate {
        let z = index % self.height;
        let column = index / self.height;
        Coordinate::new(column / self.width, column % self.width, z)
    }

    /// Returns the number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns the number of placed containers of the given kind.
    pub fn count_of(&self, kind: CargoKind) -> usize {
        self.slots.iter().flatten().filter(|c| c.kind() == kind).count()
    }

    /// Returns the lowest empty level of column `(x, y)`, or `None` if it is full.
    pub fn column_top(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.length || y >= self.width {
            return None;
        }
        (0..self.height).find(|&z| self.slots[self.index(x, y, z)].is_none())
    }

    fn free_locations_in_rows(&self, rows: Range<usize>) -> impl Iterator<Item = Coordinate> + '_ {
        rows.flat_map(move |x| {
            (0..self.width)
                .filter_map(move |y| self.column_top(x, y).map(|z| Coordinate::new(x, y, z)))
        })
    }

    /// Yields the lowest free slot of every column on the deck.
    ///
    /// The sequence is computed lazily from the current deck state.
    pub fn free_locations_full_length(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.free_locations_in_rows(0..self.length)
    }

    /// Like [`free_locations_full_length`](Self::free_locations_full_length),
    /// without the reserved climate row.
    pub fn free_locations_excluding_last_row(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.free_locations_in_rows(0..self.reserved_row())
    }

    /// Yields the lowest free slot of every column in one row.
    pub fn free_locations_at_row(
        &self,
        row: usize,
    ) -> Result<impl Iterator<Item = Coordinate> + '_> {
        if row >= self.length {
            return Err(Error::IndexOutOfBounds {
                x: row,
                y: 0,
                z: 0,
                length: self.length,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.free_locations_in_rows(row..row + 1))
    }

    /// Yields the lowest free slot of every column in the reserved climate row.
    pub fn free_locations_in_reserved_row(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.free_locations_in_rows(self.reserved_row()..self.length)
    }

    /// Copies one height layer out as a `[x][y]` grid.
    pub fn containers_at_height(&self, z: usize) -> Result<Vec<Vec<Option<Container>>>> {
        if z >= self.height {
            return Err(Error::IndexOutOfBounds {
                x: 0,
                y: 0,
                z,
                length: self.length,
                width: self.width,
                height: self.height,
            });
        }
        Ok((0..self.length)
            .map(|x| {
                (0..self.width)
                    .map(|y| self.slots[self.index(x, y, z)].clone())
                    .collect()
            })
            .collect())
    }
}
