//! Display formatting for monetary values and quantities.
//!
//! Brazilian locale convention: `.` groups thousands, `,` separates decimals.
//! Rounding to display precision happens only here; all upstream arithmetic
//! stays exact.

use rust_decimal::Decimal;

/// Default currency symbol for the ledger.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Format a monetary value with exactly two decimal places.
///
/// `1234.5` renders as `R$ 1.234,50`, zero as `R$ 0,00` and `-5.1` as
/// `R$ -5,10`.
#[must_use]
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs().to_string();

    let (units, cents) = match abs.split_once('.') {
        Some((units, cents)) => (units.to_string(), cents.to_string()),
        None => (abs, String::new()),
    };
    let mut cents = cents;
    cents.truncate(2);
    while cents.len() < 2 {
        cents.push('0');
    }

    let sign = if negative { "-" } else { "" };
    format!("{symbol} {sign}{},{cents}", group_thousands(&units))
}

/// Format a quantity: grouped thousands, no padding of decimals.
#[must_use]
pub fn format_quantity(value: Decimal) -> String {
    let normalized = value.normalize();
    let negative = normalized.is_sign_negative() && !normalized.is_zero();
    let abs = normalized.abs().to_string();

    let sign = if negative { "-" } else { "" };
    match abs.split_once('.') {
        Some((units, frac)) => format!("{sign}{},{frac}", group_thousands(units)),
        None => format!("{sign}{}", group_thousands(&abs)),
    }
}

/// Insert a `.` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
