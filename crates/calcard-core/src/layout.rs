//! Layout (template) descriptor for the calendar card.
//!
//! Every position is derived from the two pitches and the cell's row/column;
//! there is no text measurement. The canvas is 8 columns wide and 7 rows tall:
//! one row of margin plus the year/month line, one row of weekday headers,
//! five rows of days, and spare margin.
//!
//! ```text
//!  y = ypitch/2          year  month
//!  y = 1.5 ypitch        sun mon tue wed thu fri sat
//!  y = 2.5 ypitch        d00 d01 ...             d06
//!  ...
//!  y = 6.5 ypitch        d40 d41 ...             d46
//! ```

use serde::Serialize;

use crate::calendar::WEEKDAYS;
use crate::descriptor::{self, OrderedMap};
use crate::error::Result;
use crate::grid::{self, GridCoordinate, CELLS};
use crate::rounding::{round_half_even, scale};
use crate::validate::LayoutParams;

/// Canvas width in pitches.
pub const WIDTH_PITCHES: i64 = 8;
/// Canvas height in pitches.
pub const HEIGHT_PITCHES: i64 = 7;

/// Font set used by the year and month labels.
pub const FONTSET_YEARMONTH: &str = "yearmonth";
/// Font set used by the weekday headers.
pub const FONTSET_DAYS: &str = "days";
/// Font set used by the day numbers.
pub const FONTSET_NORMAL: &str = "normal";

/// Number of text elements on every card: year, month, 7 headers, 35 cells.
pub const ELEMENT_COUNT: usize = 2 + WEEKDAYS.len() + CELLS;

/// Horizontal text anchoring understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

/// Named font sets. Field order is the emitted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSets {
    pub yearmonth: Vec<String>,
    pub days: Vec<String>,
    pub normal: Vec<String>,
}

impl FontSets {
    /// Bold face for labels, plain face for day numbers.
    pub fn for_font(font: &str) -> Self {
        let bold = format!("{font} Bold");
        Self {
            yearmonth: vec![bold.clone()],
            days: vec![bold],
            normal: vec![font.to_string()],
        }
    }
}

/// Canvas size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub bezel: i64,
    pub height: i64,
    pub width: i64,
    /// Length unit for the renderer; it assumes `mm` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// One positioned text element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    /// Literal text, or a `{key}` placeholder.
    pub text: String,
    pub pos: (i64, i64),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    pub fontsize: i64,
    pub fontset: String,
}

/// The full template descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDescriptor {
    pub fontset: FontSets,
    pub dimension: Dimension,
    pub texts: OrderedMap<TextElement>,
}

impl LayoutDescriptor {
    /// Compute every element position for `params`.
    pub fn build(params: &LayoutParams) -> Self {
        let fontsize = i64::from(params.fontsize);
        let xpitch = i64::from(params.xpitch);
        let ypitch = i64::from(params.ypitch);

        let dimension = Dimension {
            bezel: 0,
            height: ypitch * HEIGHT_PITCHES,
            width: xpitch * WIDTH_PITCHES,
            unit: None,
        };

        let mut texts = OrderedMap::with_capacity(ELEMENT_COUNT);

        // Year and month share a baseline half a pitch from the top.
        let label_size = scale(fontsize, 2.0);
        let label_y = ypitch / 2;
        texts.push(
            "year",
            TextElement {
                text: "{year}".into(),
                pos: (xpitch, label_y),
                align: None,
                fontsize: label_size,
                fontset: FONTSET_YEARMONTH.into(),
            },
        );
        texts.push(
            "month",
            TextElement {
                text: "{month}".into(),
                pos: (xpitch + fontsize * 6, label_y),
                align: None,
                fontsize: label_size,
                fontset: FONTSET_YEARMONTH.into(),
            },
        );

        let header_y = scale(ypitch, 1.5);
        for (col, day) in WEEKDAYS.iter().enumerate() {
            texts.push(
                *day,
                TextElement {
                    text: day.to_lowercase(),
                    pos: (column_x(col as i64, xpitch), header_y),
                    align: Some(Align::Left),
                    fontsize,
                    fontset: FONTSET_DAYS.into(),
                },
            );
        }

        for coord in grid::coordinates() {
            texts.push(
                coord.key(),
                TextElement {
                    text: coord.placeholder(),
                    pos: cell_position(coord, xpitch, ypitch),
                    align: Some(Align::Left),
                    fontsize,
                    fontset: FONTSET_NORMAL.into(),
                },
            );
        }

        tracing::debug!(
            width = dimension.width,
            height = dimension.height,
            elements = texts.len(),
            "layout computed"
        );

        Self {
            fontset: FontSets::for_font(&params.font),
            dimension,
            texts,
        }
    }

    /// Set the renderer length unit.
    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.dimension.unit = unit;
        self
    }

    /// Serialize as TOML.
    pub fn to_toml(&self) -> Result<String> {
        descriptor::to_toml(self)
    }
}

/// Left edge of text in a column, three quarters of a pitch in.
fn column_x(col: i64, xpitch: i64) -> i64 {
    col * xpitch + scale(xpitch, 0.75)
}

/// Pixel position of a day cell.
pub fn cell_position(coord: GridCoordinate, xpitch: i64, ypitch: i64) -> (i64, i64) {
    let row = i64::from(coord.row());
    let col = i64::from(coord.col());
    let y = round_half_even((row * ypitch) as f64 + ypitch as f64 * 2.5);
    (column_x(col, xpitch), y)
}
