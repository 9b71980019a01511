//! Salary sweep: the tax bill for every candidate salary.
//!
//! For each salary the company pays IS on what is left of the net profit,
//! distributes the remainder as dividends, and the owner pays IRPF on the
//! salary and savings tax on the dividends.
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | Net profit = revenue - expenses |
//! | 2 | IRPF = progressive tax on salary |
//! | 3 | Profit before IS = net profit - salary |
//! | 4 | IS = profit before IS × corporate rate |
//! | 5 | Dividends = profit before IS - IS |
//! | 6 | Dividend tax = savings tax on dividends |
//! | 7 | Total = IRPF + IS + dividend tax |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use sweetspot_core::calculations::ScenarioSweeper;
//! use sweetspot_core::{SweepConfig, TaxParameters};
//!
//! let params = TaxParameters::spain_2026();
//! let config = SweepConfig::new(dec!(50000), dec!(1000), dec!(1000), dec!(16576));
//!
//! let results = ScenarioSweeper::new(&params).sweep(&config).unwrap();
//!
//! assert_eq!(results.len(), 33);
//! assert_eq!(results[0].salary, dec!(16576));
//! assert_eq!(results[0].total_tax, dec!(13688.82));
//! ```

use std::iter;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{max, round_cents};
use crate::calculations::progressive::{accumulate_progressive_tax, compute_progressive_tax};
use crate::models::{ScenarioResult, SweepConfig, TaxBracket, TaxParameters};

/// Errors that can occur before a sweep starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SweepError {
    /// A zero or negative step would never reach the end of the range.
    #[error("salary step must be positive, got {0}")]
    NonPositiveStep(Decimal),
}

/// Evaluates every salary candidate of a [`SweepConfig`].
#[derive(Debug, Clone)]
pub struct ScenarioSweeper<'a> {
    params: &'a TaxParameters,
    savings_brackets: [TaxBracket; 3],
}

impl<'a> ScenarioSweeper<'a> {
    pub fn new(params: &'a TaxParameters) -> Self {
        Self {
            params,
            savings_brackets: params.savings_tiers.brackets(),
        }
    }

    /// Runs the sweep.
    ///
    /// Salaries start at `max(min_salary, 0)` and grow by `step` while they
    /// do not exceed the net profit. The first salary is `min_salary` itself,
    /// not a multiple of `step`. When the start is above the net profit the
    /// result is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::NonPositiveStep`] if `step <= 0`.
    pub fn sweep(
        &self,
        config: &SweepConfig,
    ) -> Result<Vec<ScenarioResult>, SweepError> {
        if config.step <= Decimal::ZERO {
            return Err(SweepError::NonPositiveStep(config.step));
        }

        let net_profit = config.net_profit();
        let start = max(config.min_salary, Decimal::ZERO);

        let results: Vec<ScenarioResult> = iter::successors(Some(start), |salary| {
            Some(*salary + config.step)
        })
        .take_while(|salary| *salary <= net_profit)
        .map(|salary| self.scenario(net_profit, salary))
        .collect();

        debug!(
            count = results.len(),
            start = %start,
            end = %net_profit,
            step = %config.step,
            "salary sweep complete"
        );

        Ok(results)
    }

    /// Computes the tax bill for a single salary.
    ///
    /// IRPF is rounded once from its own accumulator. IS and dividend tax are
    /// rounded for their own columns, while the combined and total columns
    /// are rounded from the unrounded IS and dividend tax.
    pub fn scenario(
        &self,
        net_profit: Decimal,
        salary: Decimal,
    ) -> ScenarioResult {
        let income_tax = self.income_tax(salary);
        let profit_before_corporate_tax = net_profit - salary;
        let corporate_tax = self.corporate_tax(profit_before_corporate_tax);
        let dividends = profit_before_corporate_tax - corporate_tax;
        let dividend_tax = self.dividend_tax(dividends);

        ScenarioResult {
            salary,
            income_tax,
            corporate_tax: round_cents(corporate_tax),
            dividend_tax: round_cents(dividend_tax),
            corporate_and_dividend_tax: round_cents(corporate_tax + dividend_tax),
            total_tax: round_cents(income_tax + corporate_tax + dividend_tax),
        }
    }

    /// IRPF on the salary, rounded to the cent.
    fn income_tax(
        &self,
        salary: Decimal,
    ) -> Decimal {
        compute_progressive_tax(salary, self.params.income_brackets.brackets())
    }

    /// IS at the flat rate, unrounded. Losses give a negative amount.
    fn corporate_tax(
        &self,
        profit_before_corporate_tax: Decimal,
    ) -> Decimal {
        profit_before_corporate_tax * self.params.corporate_tax_rate
    }

    /// Savings tax on the dividends, unrounded.
    fn dividend_tax(
        &self,
        dividends: Decimal,
    ) -> Decimal {
        accumulate_progressive_tax(dividends, &self.savings_brackets)
    }
}
