use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::savings_tiers::SavingsTaxTiers;
use super::tax_bracket::{BracketSchedule, TaxBracket};

/// Corporate tax rate for SMEs (2026).
pub const CORPORATE_TAX_RATE_2026: Decimal = dec!(0.15);

/// Statutory minimum annual salary (2026).
pub const MINIMUM_SALARY_2026: Decimal = dec!(16576);

/// IRPF brackets for 2025/2026, state and regional rates combined.
pub const IRPF_BRACKETS_2026: [TaxBracket; 10] = [
    TaxBracket::bounded(dec!(12450), dec!(0.18)),
    TaxBracket::bounded(dec!(13362), dec!(0.205)),
    TaxBracket::bounded(dec!(19004), dec!(0.227)),
    TaxBracket::bounded(dec!(20200), dec!(0.248)),
    TaxBracket::bounded(dec!(35200), dec!(0.278)),
    TaxBracket::bounded(dec!(35425), dec!(0.313)),
    TaxBracket::bounded(dec!(57320), dec!(0.359)),
    TaxBracket::bounded(dec!(60000), dec!(0.39)),
    TaxBracket::bounded(dec!(300000), dec!(0.43)),
    TaxBracket::unbounded(dec!(0.45)),
];

/// Every rate and threshold the engine needs for one tax year.
///
/// Passed explicitly to the calculators so alternate years or hypothetical
/// schedules can be evaluated without touching the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxParameters {
    pub tax_year: i32,
    /// Personal income tax (IRPF) schedule applied to the salary.
    pub income_brackets: BracketSchedule,
    /// Savings schedule applied to distributed dividends.
    pub savings_tiers: SavingsTaxTiers,
    /// Flat corporate tax (IS) rate on profit after salary.
    pub corporate_tax_rate: Decimal,
    /// Lowest salary worth considering; the default start of a sweep.
    pub minimum_salary: Decimal,
}

impl TaxParameters {
    pub fn spain_2026() -> Self {
        Self {
            tax_year: 2026,
            income_brackets: BracketSchedule::from_static(&IRPF_BRACKETS_2026),
            savings_tiers: SavingsTaxTiers::SPAIN_2026,
            corporate_tax_rate: CORPORATE_TAX_RATE_2026,
            minimum_salary: MINIMUM_SALARY_2026,
        }
    }
}

impl Default for TaxParameters {
    fn default() -> Self {
        Self::spain_2026()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn built_in_irpf_table_passes_validation() {
        let validated = BracketSchedule::new(IRPF_BRACKETS_2026.to_vec()).unwrap();

        assert_eq!(validated, TaxParameters::spain_2026().income_brackets);
    }

    #[test]
    fn built_in_irpf_rates_are_progressive() {
        let rates: Vec<Decimal> = IRPF_BRACKETS_2026.iter().map(|b| b.rate).collect();

        assert!(rates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn spain_2026_uses_reference_constants() {
        let params = TaxParameters::spain_2026();

        assert_eq!(params.tax_year, 2026);
        assert_eq!(params.corporate_tax_rate, dec!(0.15));
        assert_eq!(params.minimum_salary, dec!(16576));
        assert_eq!(params.savings_tiers.first_limit, dec!(6000));
        assert_eq!(params.income_brackets.len(), 10);
    }
}
