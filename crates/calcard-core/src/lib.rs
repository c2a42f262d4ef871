//! Core library for calcard.
//!
//! calcard produces two TOML descriptors for a calendar card renderer:
//!
//! - a **layout** ([`layout::LayoutDescriptor`]) placing the year, month, weekday
//!   headers and a 5x7 grid of day cells on a canvas sized from two pitches;
//! - **values** ([`values::ValuesDescriptor`]) holding the strings for one month.
//!
//! The renderer joins them by key. Day cells use `d{row}{col}` on both sides, and
//! both generators take those keys from [`grid::GridCoordinate`].
//!
//! ```ignore
//! use calcard_core::{layout::LayoutDescriptor, validate, values::ValuesDescriptor};
//!
//! let params = validate::layout_params("Arial", 12, 50, 35)?;
//! let template = LayoutDescriptor::build(&params).to_toml()?;
//!
//! let ym = validate::year_month(2024, 2)?;
//! let values = ValuesDescriptor::build(ym)?.to_toml()?;
//! ```

pub mod calendar;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod grid;
pub mod layout;
pub mod rounding;
pub mod validate;
pub mod values;
