//! Sweet-spot selection over a finished sweep.

use thiserror::Error;

use crate::models::ScenarioResult;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptimumError {
    /// There is nothing to choose from, usually because the minimum salary
    /// is above the net profit.
    #[error("no scenarios to evaluate; the salary range is empty")]
    EmptyInput,
}

/// Returns the scenario with the lowest total tax.
///
/// Ties go to the earliest scenario, which for a sweep is the lowest salary.
///
/// # Errors
///
/// Returns [`OptimumError::EmptyInput`] when `results` is empty.
///
/// ```
/// use sweetspot_core::calculations::{OptimumError, find_minimum_total};
///
/// assert_eq!(find_minimum_total(&[]), Err(OptimumError::EmptyInput));
/// ```
pub fn find_minimum_total(results: &[ScenarioResult]) -> Result<&ScenarioResult, OptimumError> {
    let (first, rest) = results.split_first().ok_or(OptimumError::EmptyInput)?;

    Ok(rest.iter().fold(first, |best, candidate| {
        if candidate.total_tax < best.total_tax {
            candidate
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn scenario(
        salary: Decimal,
        total_tax: Decimal,
    ) -> ScenarioResult {
        ScenarioResult {
            salary,
            income_tax: Decimal::ZERO,
            corporate_tax: Decimal::ZERO,
            dividend_tax: Decimal::ZERO,
            corporate_and_dividend_tax: Decimal::ZERO,
            total_tax,
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(find_minimum_total(&[]), Err(OptimumError::EmptyInput));
    }

    #[test]
    fn single_scenario_is_the_optimum() {
        let results = [scenario(dec!(16576), dec!(13688.82))];

        assert_eq!(find_minimum_total(&results), Ok(&results[0]));
    }

    #[test]
    fn picks_lowest_total() {
        let results = [
            scenario(dec!(1000), dec!(500.00)),
            scenario(dec!(2000), dec!(420.10)),
            scenario(dec!(3000), dec!(450.00)),
        ];

        assert_eq!(find_minimum_total(&results).unwrap().salary, dec!(2000));
    }

    #[test]
    fn ties_resolve_to_first_occurrence() {
        let results = [
            scenario(dec!(1000), dec!(500.00)),
            scenario(dec!(2000), dec!(400.00)),
            scenario(dec!(3000), dec!(400.00)),
            scenario(dec!(4000), dec!(400.00)),
        ];

        assert_eq!(find_minimum_total(&results).unwrap().salary, dec!(2000));
    }

    #[test]
    fn handles_negative_totals() {
        let results = [
            scenario(dec!(1000), dec!(10.00)),
            scenario(dec!(2000), dec!(-0.01)),
        ];

        assert_eq!(find_minimum_total(&results).unwrap().salary, dec!(2000));
    }
}
