//! Values descriptor: the literal strings that fill a layout's placeholders.

use serde::Serialize;

use crate::calendar::{month_abbr, MonthGrid};
use crate::descriptor::{self, OrderedMap};
use crate::error::{CalcardError, Result};
use crate::grid::{self, CELLS};
use crate::validate::YearMonth;

/// Number of entries in every values descriptor: year, month, 35 cells.
pub const VALUE_COUNT: usize = 2 + CELLS;

/// Flat key -> string mapping, serialized in `year`, `month`, `d00`..`d46` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValuesDescriptor {
    values: OrderedMap<String>,
}

impl ValuesDescriptor {
    /// Fill values for `ym`.
    pub fn build(ym: YearMonth) -> Result<Self> {
        let abbr = month_abbr(ym.month()).ok_or(CalcardError::OutOfRangeDate {
            year: i64::from(ym.year()),
            month: i64::from(ym.month()),
        })?;
        let grid = MonthGrid::new(ym);

        let mut values = OrderedMap::with_capacity(VALUE_COUNT);
        values.push("year", ym.year().to_string());
        values.push("month", abbr.to_string());
        for coord in grid::coordinates() {
            let text = grid
                .day(coord)
                .map(|d| format!("{d:02}"))
                .unwrap_or_default();
            values.push(coord.key(), text);
        }

        tracing::debug!(year = ym.year(), month = abbr, "values computed");
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.values.len()
    }

    /// Serialize as TOML key/value lines.
    pub fn to_toml(&self) -> Result<String> {
        descriptor::to_toml(self)
    }
}
