//! Month grid computation and the fixed English labels.
//!
//! The grid starts weeks on Sunday and always has [`ROWS`](crate::grid::ROWS) rows.
//! Cells before the 1st and after the last day hold `0`. Sixth-week days fall
//! outside the card.

use chrono::{Datelike, Month};

use crate::grid::{GridCoordinate, CELLS, COLS};
use crate::validate::YearMonth;

/// Weekday header labels, Sunday first. Column `i` on the card is `WEEKDAYS[i]`.
pub const WEEKDAYS: [&str; COLS as usize] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Three-letter English abbreviation for a month (1..=12).
pub fn month_abbr(month: u32) -> Option<&'static str> {
    let month = Month::try_from(u8::try_from(month).ok()?).ok()?;
    month.name().get(..3)
}

/// Day numbers laid out on the card grid. `0` marks a cell outside the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: [u8; CELLS],
}

impl MonthGrid {
    /// Lay out `ym` on a Sunday-first 5x7 grid.
    pub fn new(ym: YearMonth) -> Self {
        let offset = ym.first_day().weekday().num_days_from_sunday() as usize;
        let mut cells = [0u8; CELLS];
        for day in 1..=ym.days_in_month() {
            let slot = offset + day as usize - 1;
            if slot < CELLS {
                cells[slot] = day as u8;
            }
        }
        let overflow = (offset + ym.days_in_month() as usize).saturating_sub(CELLS);
        if overflow > 0 {
            tracing::debug!(
                year = ym.year(),
                month = ym.month(),
                dropped = overflow,
                "sixth-week days fall outside the card"
            );
        }
        Self { cells }
    }

    /// Day number at `coord`, or `None` if the cell is outside the month.
    pub fn day(&self, coord: GridCoordinate) -> Option<u8> {
        match self.cells[coord.index()] {
            0 => None,
            d => Some(d),
        }
    }

    /// Rows of day numbers, `0` for empty cells.
    #[cfg(test)]
    fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(COLS as usize)
    }
}
