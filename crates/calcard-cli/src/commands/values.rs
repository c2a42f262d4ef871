use anyhow::Result;

use calcard_core::validate;
use calcard_core::values::ValuesDescriptor;

use crate::output;

/// Print the values for `year`/`month`.
///
/// The month is checked before anything is computed; on error nothing is
/// written to stdout.
pub fn run(year: i64, month: i64) -> Result<()> {
    let ym = validate::year_month(year, month)?;
    tracing::info!(year, month, "building values");

    let toml = ValuesDescriptor::build(ym)?.to_toml()?;
    output::emit(&toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcard_core::error::CalcardError;

    #[test]
    fn test_run_rejects_month_13() {
        let err = run(2024, 13).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CalcardError>(),
            Some(CalcardError::OutOfRangeDate { year: 2024, month: 13 })
        ));
    }
}
