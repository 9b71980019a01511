use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// One step of a progressive schedule.
///
/// `upper_limit` is the cumulative ceiling of the bracket, not its width.
/// `None` marks the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn bounded(
        upper_limit: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_limit: Some(upper_limit),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_limit: None,
            rate,
        }
    }
}

/// Reasons a bracket schedule is rejected when it is loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("bracket schedule is empty")]
    Empty,

    #[error("bracket {index} has a non-positive upper limit {limit}")]
    NonPositiveLimit { index: usize, limit: Decimal },

    #[error("bracket {index} upper limit {limit} does not exceed the previous limit {previous}")]
    UnorderedLimits {
        index: usize,
        previous: Decimal,
        limit: Decimal,
    },

    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeLast { index: usize },

    #[error("the last bracket must be unbounded")]
    MissingUnboundedBracket,

    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// An ordered, validated progressive schedule covering `[0, ∞)`.
///
/// Ceilings are strictly ascending and only the final bracket is unbounded,
/// so every non-negative amount lands inside exactly one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    /// Validates `brackets` and wraps them.
    ///
    /// Rates that decrease from one bracket to the next are accepted but
    /// logged, since the result is no longer a progressive schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the list is empty, a ceiling is not
    /// positive or not strictly ascending, an unbounded bracket appears
    /// before the end, the last bracket is bounded, or a rate falls outside
    /// `[0, 1]`.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        validate_brackets(&brackets)?;

        for (index, pair) in brackets.windows(2).enumerate() {
            if pair[1].rate < pair[0].rate {
                warn!(
                    index = index + 1,
                    previous_rate = %pair[0].rate,
                    rate = %pair[1].rate,
                    "bracket rate decreases; schedule is not progressive"
                );
            }
        }

        Ok(Self { brackets })
    }

    /// Wraps brackets already known to be well formed (the built-in tables).
    pub(crate) fn from_static(brackets: &[TaxBracket]) -> Self {
        Self {
            brackets: brackets.to_vec(),
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), ScheduleError> {
    if brackets.is_empty() {
        return Err(ScheduleError::Empty);
    }

    let last = brackets.len() - 1;
    let mut previous: Option<Decimal> = None;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(ScheduleError::RateOutOfRange {
                index,
                rate: bracket.rate,
            });
        }

        match bracket.upper_limit {
            None if index != last => return Err(ScheduleError::UnboundedBeforeLast { index }),
            None => {}
            Some(_) if index == last => return Err(ScheduleError::MissingUnboundedBracket),
            Some(limit) if limit <= Decimal::ZERO => {
                return Err(ScheduleError::NonPositiveLimit { index, limit });
            }
            Some(limit) => {
                if let Some(previous) = previous {
                    if limit <= previous {
                        return Err(ScheduleError::UnorderedLimits {
                            index,
                            previous,
                            limit,
                        });
                    }
                }
                previous = Some(limit);
            }
        }
    }

    Ok(())
}

impl TryFrom<Vec<TaxBracket>> for BracketSchedule {
    type Error = ScheduleError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<BracketSchedule> for Vec<TaxBracket> {
    fn from(schedule: BracketSchedule) -> Self {
        schedule.brackets
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn three_brackets() -> Vec<TaxBracket> {
        vec![
            TaxBracket::bounded(dec!(6000), dec!(0.19)),
            TaxBracket::bounded(dec!(50000), dec!(0.21)),
            TaxBracket::unbounded(dec!(0.23)),
        ]
    }

    #[test]
    fn accepts_well_formed_schedule() {
        let schedule = BracketSchedule::new(three_brackets()).unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.brackets()[2].upper_limit, None);
    }

    #[test]
    fn accepts_single_unbounded_bracket() {
        let schedule = BracketSchedule::new(vec![TaxBracket::unbounded(dec!(0.15))]);

        assert!(schedule.is_ok());
    }

    #[test]
    fn rejects_empty_schedule() {
        assert_eq!(BracketSchedule::new(vec![]), Err(ScheduleError::Empty));
    }

    #[test]
    fn rejects_bounded_last_bracket() {
        let mut brackets = three_brackets();
        brackets.pop();

        assert_eq!(
            BracketSchedule::new(brackets),
            Err(ScheduleError::MissingUnboundedBracket)
        );
    }

    #[test]
    fn rejects_unbounded_bracket_in_the_middle() {
        let brackets = vec![
            TaxBracket::bounded(dec!(6000), dec!(0.19)),
            TaxBracket::unbounded(dec!(0.21)),
            TaxBracket::unbounded(dec!(0.23)),
        ];

        assert_eq!(
            BracketSchedule::new(brackets),
            Err(ScheduleError::UnboundedBeforeLast { index: 1 })
        );
    }

    #[test]
    fn rejects_descending_limits() {
        let brackets = vec![
            TaxBracket::bounded(dec!(50000), dec!(0.19)),
            TaxBracket::bounded(dec!(6000), dec!(0.21)),
            TaxBracket::unbounded(dec!(0.23)),
        ];

        assert_eq!(
            BracketSchedule::new(brackets),
            Err(ScheduleError::UnorderedLimits {
                index: 1,
                previous: dec!(50000),
                limit: dec!(6000),
            })
        );
    }

    #[test]
    fn rejects_repeated_limit() {
        let brackets = vec![
            TaxBracket::bounded(dec!(6000), dec!(0.19)),
            TaxBracket::bounded(dec!(6000), dec!(0.21)),
            TaxBracket::unbounded(dec!(0.23)),
        ];

        assert!(matches!(
            BracketSchedule::new(brackets),
            Err(ScheduleError::UnorderedLimits { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_zero_first_limit() {
        let brackets = vec![
            TaxBracket::bounded(dec!(0), dec!(0.19)),
            TaxBracket::unbounded(dec!(0.23)),
        ];

        assert_eq!(
            BracketSchedule::new(brackets),
            Err(ScheduleError::NonPositiveLimit {
                index: 0,
                limit: dec!(0),
            })
        );
    }

    #[test]
    fn rejects_rate_above_one() {
        let brackets = vec![
            TaxBracket::bounded(dec!(6000), dec!(19)),
            TaxBracket::unbounded(dec!(0.23)),
        ];

        assert_eq!(
            BracketSchedule::new(brackets),
            Err(ScheduleError::RateOutOfRange {
                index: 0,
                rate: dec!(19),
            })
        );
    }

    #[test]
    fn accepts_decreasing_rates() {
        let brackets = vec![
            TaxBracket::bounded(dec!(6000), dec!(0.30)),
            TaxBracket::unbounded(dec!(0.10)),
        ];

        assert!(BracketSchedule::new(brackets).is_ok());
    }

    #[test]
    fn deserializing_validates_brackets() {
        let json = r#"[{"upper_limit":"6000","rate":"0.19"}]"#;

        let result: Result<BracketSchedule, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
