//! Progressive bracket taxes: IRPF on salary and savings tax on dividends.
//!
//! Each slice of the amount is taxed at the rate of the bracket it falls in.
//! Brackets are consumed in order; the walk stops at the first bracket whose
//! ceiling is not exceeded.
//!
//! | Amount | Savings tax (2026 tiers) |
//! |--------|--------------------------|
//! | 6,000 | 1,140.00 |
//! | 50,000 | 10,380.00 |
//! | 60,000 | 12,680.00 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use sweetspot_core::calculations::{compute_progressive_tax, compute_savings_tax};
//! use sweetspot_core::{SavingsTaxTiers, TaxParameters};
//!
//! let params = TaxParameters::spain_2026();
//!
//! let irpf = compute_progressive_tax(dec!(20000), params.income_brackets.brackets());
//! assert_eq!(irpf, dec!(3955.70));
//!
//! let savings = compute_savings_tax(dec!(60000), &SavingsTaxTiers::SPAIN_2026);
//! assert_eq!(savings, dec!(12680.00));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_cents;
use crate::models::{SavingsTaxTiers, TaxBracket};

/// Progressive tax on `amount`, unrounded.
///
/// Returns zero for zero or negative amounts. If the brackets run out
/// before the amount is consumed (no unbounded top bracket) the remainder is
/// untaxed; [`crate::BracketSchedule`] rules that shape out at load time.
pub fn accumulate_progressive_tax(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in brackets {
        match bracket.upper_limit {
            Some(limit) if amount > limit => {
                tax += (limit - previous_limit) * bracket.rate;
                previous_limit = limit;
            }
            _ => {
                tax += (amount - previous_limit) * bracket.rate;
                break;
            }
        }
    }

    tax
}

/// Progressive tax on `amount`, rounded once to the cent.
pub fn compute_progressive_tax(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    round_cents(accumulate_progressive_tax(amount, brackets))
}

/// Savings tax on `amount` using the three-tier schedule, rounded to the
/// cent. Tiers are not rounded individually.
pub fn compute_savings_tax(
    amount: Decimal,
    tiers: &SavingsTaxTiers,
) -> Decimal {
    compute_progressive_tax(amount, &tiers.brackets())
}
