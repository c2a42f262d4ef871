//! Input validation shared by both generators.
//!
//! Raw numbers from the command line or a config file pass through here before any
//! descriptor is built. Each check returns a [`CalcardError`] tagged as
//! [`CalcardError::InvalidArgument`] or [`CalcardError::OutOfRangeDate`].

use chrono::{Datelike, NaiveDate};

use crate::error::{CalcardError, Result};

/// Checked inputs for the layout generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutParams {
    pub font: String,
    pub fontsize: u32,
    pub xpitch: u32,
    pub ypitch: u32,
}

/// Checked inputs for the values generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    first: NaiveDate,
    next: NaiveDate,
}

impl YearMonth {
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// 1..=12
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// First day of the month.
    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Number of days in the month.
    pub fn days_in_month(self) -> u32 {
        self.next.signed_duration_since(self.first).num_days() as u32
    }
}

/// Validate layout parameters. Zero and negative sizes are rejected.
pub fn layout_params(font: &str, fontsize: i64, xpitch: i64, ypitch: i64) -> Result<LayoutParams> {
    if font.trim().is_empty() {
        return Err(CalcardError::InvalidArgument {
            name: "font",
            reason: "must not be empty".into(),
        });
    }
    Ok(LayoutParams {
        font: font.to_string(),
        fontsize: positive("fontsize", fontsize)?,
        xpitch: positive("xpitch", xpitch)?,
        ypitch: positive("ypitch", ypitch)?,
    })
}

/// Validate a year/month pair.
///
/// The month must be 1..=12. The year is not range-checked here beyond what
/// [`NaiveDate`] can represent; a year chrono rejects becomes `OutOfRangeDate`.
pub fn year_month(year: i64, month: i64) -> Result<YearMonth> {
    let out_of_range = || CalcardError::OutOfRangeDate { year, month };
    if !(1..=12).contains(&month) {
        return Err(out_of_range());
    }
    let y = i32::try_from(year).map_err(|_| out_of_range())?;
    let m = month as u32;
    // The month after must exist too, since the month length is derived from it.
    let (ny, nm) = if m == 12 { (y.checked_add(1), 1) } else { (Some(y), m + 1) };
    let first = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(out_of_range)?;
    let next = ny
        .and_then(|ny| NaiveDate::from_ymd_opt(ny, nm, 1))
        .ok_or_else(out_of_range)?;
    Ok(YearMonth { first, next })
}

fn positive(name: &'static str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(CalcardError::InvalidArgument {
            name,
            reason: format!("must be positive, got {value}"),
        });
    }
    u32::try_from(value).map_err(|_| CalcardError::InvalidArgument {
        name,
        reason: format!("too large: {value}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_params_valid() {
        let p = layout_params("Arial", 12, 50, 35).unwrap();
        assert_eq!(p.font, "Arial");
        assert_eq!((p.fontsize, p.xpitch, p.ypitch), (12, 50, 35));
    }

    #[test]
    fn test_layout_params_rejects_empty_font() {
        let err = layout_params("  ", 10, 40, 30).unwrap_err();
        assert!(matches!(err, CalcardError::InvalidArgument { name: "font", .. }));
    }

    #[test]
    fn test_layout_params_rejects_non_positive() {
        for (fs, xp, yp, expected) in [
            (0, 40, 30, "fontsize"),
            (10, -1, 30, "xpitch"),
            (10, 40, 0, "ypitch"),
        ] {
            match layout_params("Arial", fs, xp, yp) {
                Err(CalcardError::InvalidArgument { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected InvalidArgument for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_year_month_valid() {
        let ym = year_month(2024, 2).unwrap();
        assert_eq!((ym.year(), ym.month()), (2024, 2));
        assert_eq!(ym.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(ym.days_in_month(), 29);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(year_month(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(year_month(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(year_month(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(year_month(2024, 12).unwrap().days_in_month(), 31);
        assert_eq!(year_month(2024, 4).unwrap().days_in_month(), 30);
    }

    #[test]
    fn test_year_month_rejects_bad_month() {
        for month in [0, 13, -1] {
            assert!(matches!(
                year_month(2024, month),
                Err(CalcardError::OutOfRangeDate { .. })
            ));
        }
    }

    #[test]
    fn test_year_month_rejects_unrepresentable_year() {
        assert!(matches!(
            year_month(i64::from(i32::MAX), 1),
            Err(CalcardError::OutOfRangeDate { .. })
        ));
    }

    #[test]
    fn test_year_month_passes_unusual_years_through() {
        assert!(year_month(1, 1).is_ok());
        assert!(year_month(9999, 12).is_ok());
    }
}
