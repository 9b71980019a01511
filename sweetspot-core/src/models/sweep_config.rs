use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::tax_parameters::MINIMUM_SALARY_2026;

pub const DEFAULT_REVENUE: Decimal = dec!(50000);
pub const DEFAULT_EXPENSES: Decimal = dec!(1000);
pub const DEFAULT_SALARY_STEP: Decimal = dec!(1000);

/// The company figures and salary grid for one sweep.
///
/// All amounts are in euros. `step` must be strictly positive; the other
/// amounts are expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub revenue: Decimal,
    pub expenses: Decimal,
    /// Increment between consecutive salary candidates.
    pub step: Decimal,
    /// First salary candidate. Negative values start the sweep at zero.
    pub min_salary: Decimal,
}

impl SweepConfig {
    pub fn new(
        revenue: Decimal,
        expenses: Decimal,
        step: Decimal,
        min_salary: Decimal,
    ) -> Self {
        Self {
            revenue,
            expenses,
            step,
            min_salary,
        }
    }

    /// Profit before salary and taxes.
    pub fn net_profit(&self) -> Decimal {
        self.revenue - self.expenses
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_REVENUE,
            DEFAULT_EXPENSES,
            DEFAULT_SALARY_STEP,
            MINIMUM_SALARY_2026,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn net_profit_subtracts_expenses() {
        let config = SweepConfig::default();

        assert_eq!(config.net_profit(), dec!(49000));
    }

    #[test]
    fn net_profit_can_be_negative() {
        let config = SweepConfig::new(dec!(1000), dec!(2500), dec!(100), dec!(0));

        assert_eq!(config.net_profit(), dec!(-1500));
    }
}
