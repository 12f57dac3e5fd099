//! Monetary input coercion and display formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Coerces free-form user input into a non-negative amount.
///
/// Reads the longest leading number the way a browser's `parseFloat` does,
/// so `12abc` is 12 and `1e3` is 1000. Blank, non-numeric, negative and
/// out-of-range input all become zero; a leading `$` and thousands
/// separators are tolerated.
#[must_use]
pub fn coerce_amount(input: &str) -> Decimal {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    let Some(number) = leading_number(cleaned.trim_start()) else {
        return Decimal::ZERO;
    };
    if number.negative {
        return Decimal::ZERO;
    }

    // A bare "5." or ".5" is valid input; pad so the decimal parser sees "05" or "0.5".
    let mantissa = format!("0{}", number.mantissa.trim_end_matches('.'));
    Decimal::from_str(&mantissa)
        .ok()
        .and_then(|value| scale_by_power_of_ten(value, number.exponent))
        .map_or(Decimal::ZERO, |value| value.normalize())
}

/// Leading numeric part of a string: sign, digits with at most one dot, and
/// an optional exponent.
struct LeadingNumber<'a> {
    negative: bool,
    mantissa: &'a str,
    exponent: i32,
}

fn leading_number(text: &str) -> Option<LeadingNumber<'_>> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut seen_dot = false;
    let mut digits = 0;
    let end = unsigned
        .bytes()
        .take_while(|b| match b {
            b'0'..=b'9' => {
                digits += 1;
                true
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .count();
    if digits == 0 {
        return None;
    }

    let exponent = unsigned[end..]
        .strip_prefix(['e', 'E'])
        .and_then(parse_exponent)
        .unwrap_or(0);

    Some(LeadingNumber {
        negative,
        mantissa: &unsigned[..end],
        exponent,
    })
}

/// Parses the signed digits after an `e`, ignoring anything that follows.
fn parse_exponent(text: &str) -> Option<i32> {
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    // Anything past +-64 is already out of range or rounds to zero.
    let magnitude = unsigned[..len].parse::<i32>().unwrap_or(i32::MAX).min(64);
    Some(sign * magnitude)
}

fn scale_by_power_of_ten(value: Decimal, exponent: i32) -> Option<Decimal> {
    (0..exponent.unsigned_abs()).try_fold(value, |acc, _| {
        if exponent > 0 {
            acc.checked_mul(Decimal::TEN)
        } else {
            acc.checked_div(Decimal::TEN)
        }
    })
}

/// Formats an amount as dollars with two decimals and thousands separators.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());

    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${grouped}.{fraction}")
    } else {
        format!("${grouped}.{fraction}")
    }
}

/// Formats a plain number without trailing zeros (`8.50` reads as `8.5`).
#[must_use]
pub fn format_number(value: Decimal) -> String {
    value.normalize().to_string()
}
