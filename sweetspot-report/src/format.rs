//! Spanish display formatting for euro amounts.

use rust_decimal::Decimal;
use sweetspot_core::calculations::common::round_euros;

const NBSP: char = '\u{a0}';

/// Formats a whole-euro amount the way `es-ES` does, without the symbol.
///
/// Cents are rounded half-up. Thousands are separated with `.`, but only
/// once the integer part reaches five digits (`es-ES` leaves `5000` alone).
///
/// ```
/// use rust_decimal_macros::dec;
/// use sweetspot_report::format_number;
///
/// assert_eq!(format_number(dec!(49000)), "49.000");
/// assert_eq!(format_number(dec!(5000)), "5000");
/// assert_eq!(format_number(dec!(1234567.5)), "1.234.568");
/// ```
pub fn format_number(amount: Decimal) -> String {
    let rounded = round_euros(amount);
    let digits = rounded.abs().trunc().to_string();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let grouped = if digits.len() >= 5 {
        group_thousands(&digits)
    } else {
        digits
    };

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats an amount as whole euros, e.g. `49.000 €` (non-breaking space).
pub fn format_eur(amount: Decimal) -> String {
    format!("{}{NBSP}€", format_number(amount))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn groups_five_digit_amounts() {
        assert_eq!(format_eur(dec!(49000)), "49.000\u{a0}€");
        assert_eq!(format_eur(dec!(16576)), "16.576\u{a0}€");
    }

    #[test]
    fn leaves_four_digit_amounts_ungrouped() {
        assert_eq!(format_eur(dec!(5000)), "5000\u{a0}€");
        assert_eq!(format_eur(dec!(8299.94)), "8300\u{a0}€");
    }

    #[test]
    fn rounds_cents_half_up() {
        assert_eq!(format_eur(dec!(12589.72)), "12.590\u{a0}€");
        assert_eq!(format_eur(dec!(12589.50)), "12.590\u{a0}€");
        assert_eq!(format_eur(dec!(12589.49)), "12.589\u{a0}€");
    }

    #[test]
    fn groups_millions() {
        assert_eq!(format_number(dec!(300000)), "300.000");
        assert_eq!(format_number(dec!(1000000)), "1.000.000");
    }

    #[test]
    fn formats_small_and_zero_amounts() {
        assert_eq!(format_number(dec!(0)), "0");
        assert_eq!(format_number(dec!(0.4)), "0");
        assert_eq!(format_number(dec!(63.60)), "64");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_number(dec!(-300)), "-300");
        assert_eq!(format_number(dec!(-12345.6)), "-12.346");
        assert_eq!(format_number(dec!(-0.2)), "0");
    }
}
