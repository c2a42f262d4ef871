//! Grid addressing shared by the layout and values generators.
//!
//! A month is displayed on a fixed 5x7 grid. Cell `(row, col)` is addressed by the
//! key `d{row}{col}` in both descriptors: the layout emits a text element with that
//! key and a `{d{row}{col}}` placeholder, the values descriptor fills it. Every key
//! in the crate is produced by [`GridCoordinate::key`], so the two sides cannot drift.

use std::fmt;

/// Number of week rows on the card.
pub const ROWS: u8 = 5;

/// Number of weekday columns on the card.
pub const COLS: u8 = 7;

/// Total number of day cells.
pub const CELLS: usize = ROWS as usize * COLS as usize;

/// One day cell on the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoordinate {
    row: u8,
    col: u8,
}

impl GridCoordinate {
    /// Create a coordinate, or `None` if it falls outside the 5x7 grid.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    /// Coordinate of the `index`-th cell in row-major order.
    #[cfg(test)]
    fn from_index(index: usize) -> Option<Self> {
        if index >= CELLS {
            return None;
        }
        let cols = COLS as usize;
        Some(Self {
            row: (index / cols) as u8,
            col: (index % cols) as u8,
        })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major position of this cell, `0..CELLS`.
    pub fn index(self) -> usize {
        self.row as usize * COLS as usize + self.col as usize
    }

    /// Descriptor key for this cell, e.g. `d04`.
    pub fn key(self) -> String {
        format!("d{}{}", self.row, self.col)
    }

    /// Template placeholder for this cell, e.g. `{d04}`.
    pub fn placeholder(self) -> String {
        format!("{{{}}}", self.key())
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// All coordinates in row-major order.
pub fn coordinates() -> impl Iterator<Item = GridCoordinate> {
    (0..ROWS).flat_map(|row| (0..COLS).map(move |col| GridCoordinate { row, col }))
}
