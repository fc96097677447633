//! Parsers for the textual forms accepted by the built-in scalars.
//!
//! Integers accept an optional sign and a base prefix (`0x`, `0o`, `0b`, or a
//! bare leading `0` for octal), with `_` allowed between digits. Floats
//! take the same separators between decimal digits. Booleans accept the usual
//! short and long spellings.

use crate::ValueError;

pub(crate) fn parse_i64(text: &str) -> Result<i64, ValueError> {
    let (negative, unsigned) = text.strip_prefix('-').map_or_else(
        || (false, text.strip_prefix('+').unwrap_or(text)),
        |rest| (true, rest),
    );
    let magnitude = parse_u64(unsigned)?;
    if negative {
        if magnitude == 1_u64 << 63 {
            return Ok(i64::MIN);
        }
        i64::try_from(magnitude)
            .map(|value| -value)
            .map_err(|_| ValueError::Range)
    } else {
        i64::try_from(magnitude).map_err(|_| ValueError::Range)
    }
}

pub(crate) fn parse_u64(text: &str) -> Result<u64, ValueError> {
    if text.is_empty() || !underscores_ok(text) {
        return Err(ValueError::Syntax);
    }
    let (radix, digits) = split_radix(text);
    let mut value: u64 = 0;
    for ch in digits.chars() {
        if ch == '_' {
            continue;
        }
        let digit = ch.to_digit(radix).ok_or(ValueError::Syntax)?;
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            .ok_or(ValueError::Range)?;
    }
    Ok(value)
}

/// Splits a base prefix from `text`, returning the radix and the digits.
///
/// A lone `0` yields radix 8 with no digits, which parses as zero.
fn split_radix(text: &str) -> (u32, &str) {
    let Some(rest) = text.strip_prefix('0') else {
        return (10, text);
    };
    let mut chars = rest.chars();
    let prefixed = match chars.next() {
        Some('x' | 'X') => Some(16),
        Some('o' | 'O') => Some(8),
        Some('b' | 'B') => Some(2),
        _ => None,
    };
    match prefixed {
        Some(radix) if !chars.as_str().is_empty() => (radix, chars.as_str()),
        _ => (8, rest),
    }
}

/// Reports whether underscores only ever separate digits.
///
/// A base prefix counts as a digit, so `0x_ff` is accepted while `_1`, `1_`
/// and `1__0` are not.
fn underscores_ok(text: &str) -> bool {
    #[derive(PartialEq, Eq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let mut saw = Saw::Start;
    let mut rest = text;
    let mut hex = false;
    let lower = rest.to_ascii_lowercase();
    if lower.starts_with("0x") || lower.starts_with("0o") || lower.starts_with("0b") {
        hex = lower.starts_with("0x");
        saw = Saw::Digit;
        rest = rest.get(2..).unwrap_or_default();
    }
    for ch in rest.chars() {
        if ch.is_ascii_digit() || (hex && ch.is_ascii_hexdigit()) {
            saw = Saw::Digit;
            continue;
        }
        if ch == '_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
            continue;
        }
        if saw == Saw::Underscore {
            return false;
        }
        saw = Saw::Other;
    }
    saw != Saw::Underscore
}

pub(crate) fn parse_f64(text: &str) -> Result<f64, ValueError> {
    if !separators_between_digits(text) {
        return Err(ValueError::Syntax);
    }
    let value: f64 = text
        .replace('_', "")
        .parse()
        .map_err(|_| ValueError::Syntax)?;
    if value.is_infinite() && !text.to_ascii_lowercase().contains("inf") {
        return Err(ValueError::Range);
    }
    Ok(value)
}

/// Reports whether every `_` in `text` sits between two decimal digits.
fn separators_between_digits(text: &str) -> bool {
    let mut previous = None;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '_' {
            let after_digit = previous.is_some_and(|before: char| before.is_ascii_digit());
            if !after_digit || !chars.peek().is_some_and(char::is_ascii_digit) {
                return false;
            }
        }
        previous = Some(ch);
    }
    true
}

pub(crate) fn parse_bool(text: &str) -> Result<bool, ValueError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ValueError::Syntax),
    }
}
