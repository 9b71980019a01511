use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::tax_bracket::{BracketSchedule, ScheduleError, TaxBracket};

/// Upper limit of the first savings tier (2026).
pub const SAVINGS_FIRST_BRACKET_LIMIT: Decimal = dec!(6000);
/// Rate of the first savings tier (2026).
pub const SAVINGS_FIRST_BRACKET_RATE: Decimal = dec!(0.19);
/// Upper limit of the second savings tier (2026).
pub const SAVINGS_SECOND_BRACKET_LIMIT: Decimal = dec!(50000);
/// Rate of the second savings tier (2026).
pub const SAVINGS_SECOND_BRACKET_RATE: Decimal = dec!(0.21);
/// Rate applied above the second tier (2026).
pub const SAVINGS_THIRD_BRACKET_RATE: Decimal = dec!(0.23);

/// The three-tier savings schedule (base del ahorro) applied to dividends.
///
/// | Tier | Range | Rate |
/// |------|-------|------|
/// | 1 | `0 ..= first_limit` | `first_rate` |
/// | 2 | `first_limit ..= second_limit` | `second_rate` |
/// | 3 | above `second_limit` | `third_rate` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTaxTiers {
    pub first_limit: Decimal,
    pub first_rate: Decimal,
    pub second_limit: Decimal,
    pub second_rate: Decimal,
    pub third_rate: Decimal,
}

impl SavingsTaxTiers {
    /// Tiers in force for 2026.
    pub const SPAIN_2026: Self = Self {
        first_limit: SAVINGS_FIRST_BRACKET_LIMIT,
        first_rate: SAVINGS_FIRST_BRACKET_RATE,
        second_limit: SAVINGS_SECOND_BRACKET_LIMIT,
        second_rate: SAVINGS_SECOND_BRACKET_RATE,
        third_rate: SAVINGS_THIRD_BRACKET_RATE,
    };

    /// The tiers as a plain progressive schedule.
    pub fn brackets(&self) -> [TaxBracket; 3] {
        [
            TaxBracket::bounded(self.first_limit, self.first_rate),
            TaxBracket::bounded(self.second_limit, self.second_rate),
            TaxBracket::unbounded(self.third_rate),
        ]
    }

    /// Checks that the tiers form a valid schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when the limits are not positive and
    /// ascending or a rate falls outside `[0, 1]`.
    pub fn schedule(&self) -> Result<BracketSchedule, ScheduleError> {
        BracketSchedule::new(self.brackets().to_vec())
    }

    /// Reads the tiers back out of a three-bracket schedule.
    ///
    /// Returns `None` if the schedule does not have exactly three brackets.
    pub fn from_schedule(schedule: &BracketSchedule) -> Option<Self> {
        match schedule.brackets() {
            [
                TaxBracket {
                    upper_limit: Some(first_limit),
                    rate: first_rate,
                },
                TaxBracket {
                    upper_limit: Some(second_limit),
                    rate: second_rate,
                },
                TaxBracket {
                    upper_limit: None,
                    rate: third_rate,
                },
            ] => Some(Self {
                first_limit: *first_limit,
                first_rate: *first_rate,
                second_limit: *second_limit,
                second_rate: *second_rate,
                third_rate: *third_rate,
            }),
            _ => None,
        }
    }
}

impl Default for SavingsTaxTiers {
    fn default() -> Self {
        Self::SPAIN_2026
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_tiers_form_a_valid_schedule() {
        let schedule = SavingsTaxTiers::default().schedule().unwrap();

        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn swapped_limits_are_rejected() {
        let tiers = SavingsTaxTiers {
            first_limit: dec!(50000),
            second_limit: dec!(6000),
            ..SavingsTaxTiers::SPAIN_2026
        };

        assert!(matches!(
            tiers.schedule(),
            Err(ScheduleError::UnorderedLimits { index: 1, .. })
        ));
    }

    #[test]
    fn from_schedule_recovers_the_tiers() {
        let schedule = SavingsTaxTiers::SPAIN_2026.schedule().unwrap();

        assert_eq!(
            SavingsTaxTiers::from_schedule(&schedule),
            Some(SavingsTaxTiers::SPAIN_2026)
        );
    }

    #[test]
    fn from_schedule_rejects_other_shapes() {
        let schedule = BracketSchedule::new(vec![
            TaxBracket::bounded(dec!(6000), dec!(0.19)),
            TaxBracket::unbounded(dec!(0.23)),
        ])
        .unwrap();

        assert_eq!(SavingsTaxTiers::from_schedule(&schedule), None);
    }
}
