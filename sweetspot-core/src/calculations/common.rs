//! Rounding and comparison helpers shared by the tax calculations.
//!
//! Every monetary amount that leaves the engine is rounded to the cent with
//! half-up semantics. Whole-euro rounding is only used for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to the cent, half-up.
///
/// Values at exactly half a cent move away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use sweetspot_core::calculations::common::round_cents;
///
/// assert_eq!(round_cents(dec!(1140.004)), dec!(1140.00));
/// assert_eq!(round_cents(dec!(1140.005)), dec!(1140.01));
/// assert_eq!(round_cents(dec!(-63.605)), dec!(-63.61));
/// ```
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary amount to whole euros, half-up.
///
/// ```
/// use rust_decimal_macros::dec;
/// use sweetspot_core::calculations::common::round_euros;
///
/// assert_eq!(round_euros(dec!(12589.72)), dec!(12590));
/// assert_eq!(round_euros(dec!(12589.50)), dec!(12590));
/// assert_eq!(round_euros(dec!(12589.49)), dec!(12589));
/// ```
pub fn round_euros(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two amounts.
///
/// ```
/// use rust_decimal_macros::dec;
/// use sweetspot_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-500), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(16576), dec!(0)), dec!(16576));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
