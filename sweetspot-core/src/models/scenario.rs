use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sweep_config::SweepConfig;

/// Tax outcome for one salary level.
///
/// Tax amounts are rounded to the cent. `corporate_and_dividend_tax` and
/// `total_tax` are rounded from the unrounded components, so they may sit a
/// cent away from the sum of the displayed columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub salary: Decimal,
    /// IRPF on the salary.
    pub income_tax: Decimal,
    /// IS on the profit left after paying the salary.
    pub corporate_tax: Decimal,
    /// Savings tax on the dividends distributed after IS.
    pub dividend_tax: Decimal,
    pub corporate_and_dividend_tax: Decimal,
    pub total_tax: Decimal,
}

/// Everything a report needs: the inputs, every scenario, and the optimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweetSpotReport {
    pub tax_year: i32,
    pub config: SweepConfig,
    /// Salary-ascending; positional consumers rely on the order.
    pub results: Vec<ScenarioResult>,
    pub sweet_spot: ScenarioResult,
}

impl SweetSpotReport {
    pub fn net_profit(&self) -> Decimal {
        self.config.net_profit()
    }
}
