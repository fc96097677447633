//! Unit tests for scalar parsing and value wrappers.

use std::net::Ipv4Addr;
use std::time::Duration;

use anyhow::{Result, ensure};
use rstest::rstest;

use super::parse::{parse_bool, parse_f64, parse_i64, parse_u64};
use super::{FuncValue, ScalarValue, TextValue, Value};
use crate::ValueError;

#[rstest]
#[case("0", 0)]
#[case("42", 42)]
#[case("-42", -42)]
#[case("+7", 7)]
#[case("0x1f", 31)]
#[case("0X1F", 31)]
#[case("0o17", 15)]
#[case("017", 15)]
#[case("0b101", 5)]
#[case("1_000_000", 1_000_000)]
#[case("0x_ff", 255)]
#[case("-9223372036854775808", i64::MIN)]
#[case("9223372036854775807", i64::MAX)]
fn parses_signed_integers(#[case] text: &str, #[case] expected: i64) -> Result<()> {
    let parsed = parse_i64(text)?;
    ensure!(parsed == expected, "{text:?} parsed as {parsed}");
    Ok(())
}

#[rstest]
#[case("", "parse error")]
#[case("-", "parse error")]
#[case("abc", "parse error")]
#[case("1.5", "parse error")]
#[case("_1", "parse error")]
#[case("1_", "parse error")]
#[case("1__0", "parse error")]
#[case("09", "parse error")]
#[case("9223372036854775808", "value out of range")]
#[case("-9223372036854775809", "value out of range")]
fn rejects_bad_signed_integers(#[case] text: &str, #[case] message: &str) {
    assert_eq!(
        parse_i64(text).map_err(|err| err.to_string()),
        Err(message.to_owned())
    );
}

#[rstest]
#[case("18446744073709551615", Ok(u64::MAX))]
#[case("18446744073709551616", Err("value out of range"))]
#[case("-1", Err("parse error"))]
fn parses_unsigned_integers(#[case] text: &str, #[case] expected: Result<u64, &str>) {
    let parsed = parse_u64(text).map_err(|err| err.to_string());
    assert_eq!(parsed, expected.map_err(str::to_owned));
}

#[rstest]
#[case("1.5", 1.5)]
#[case("-0.25", -0.25)]
#[case("1e3", 1000.0)]
#[case("inf", f64::INFINITY)]
#[case("1_000.5", 1000.5)]
#[case("2.5e1_0", 2.5e10)]
fn parses_floats(#[case] text: &str, #[case] expected: f64) -> Result<()> {
    let parsed = parse_f64(text)?;
    ensure!(parsed.to_bits() == expected.to_bits(), "{text:?} parsed as {parsed}");
    Ok(())
}

#[rstest]
#[case("_1.5")]
#[case("1_.5")]
#[case("1._5")]
#[case("1__0")]
#[case("1.5_")]
#[case("0x1p-2")]
fn misplaced_float_separators_are_syntax_errors(#[case] text: &str) {
    assert!(matches!(parse_f64(text), Err(ValueError::Syntax)), "{text:?}");
}

#[rstest]
fn float_overflow_is_a_range_error() {
    assert!(matches!(parse_f64("1e400"), Err(ValueError::Range)));
    assert!(matches!(parse_f64("1.2.3"), Err(ValueError::Syntax)));
}

#[rstest]
#[case("1", true)]
#[case("t", true)]
#[case("TRUE", true)]
#[case("True", true)]
#[case("0", false)]
#[case("F", false)]
#[case("false", false)]
fn parses_booleans(#[case] text: &str, #[case] expected: bool) -> Result<()> {
    ensure!(parse_bool(text)? == expected);
    Ok(())
}

#[rstest]
#[case("yes")]
#[case("tRUE")]
#[case("")]
fn rejects_other_boolean_spellings(#[case] text: &str) {
    assert!(matches!(parse_bool(text), Err(ValueError::Syntax)));
}

#[rstest]
fn scalar_value_writes_through() -> Result<()> {
    let mut age = 34_usize;
    {
        let mut value = ScalarValue::new(&mut age);
        ensure!(value.to_string() == "34");
        ensure!(value.type_name() == "uint");
        ensure!(!value.is_bool_flag());
        value.set("29")?;
    }
    ensure!(age == 29);
    Ok(())
}

#[rstest]
fn zero_text_matches_the_type_default() {
    let mut count = 5_isize;
    let mut name = String::from("x");
    let mut verbose = true;
    let mut wait = Duration::from_secs(1);
    assert!(ScalarValue::new(&mut count).is_zero_text("0"));
    assert!(!ScalarValue::new(&mut count).is_zero_text("5"));
    assert!(ScalarValue::new(&mut name).is_zero_text(""));
    assert!(ScalarValue::new(&mut verbose).is_zero_text("false"));
    assert!(ScalarValue::new(&mut wait).is_zero_text("0s"));
}

#[rstest]
fn bool_scalar_is_a_bool_flag() {
    let mut verbose = false;
    assert!(ScalarValue::new(&mut verbose).is_bool_flag());
}

#[rstest]
fn duration_uses_humantime_syntax() -> Result<()> {
    let mut wait = Duration::from_secs(90);
    {
        let mut value = ScalarValue::new(&mut wait);
        ensure!(value.to_string() == "1m 30s", "rendered {value}");
        value.set("15m")?;
    }
    ensure!(wait == Duration::from_secs(900));
    Ok(())
}

#[rstest]
fn duration_rejects_unitless_numbers() {
    let mut wait = Duration::ZERO;
    let result = ScalarValue::new(&mut wait).set("15");
    assert!(matches!(result, Err(ValueError::Duration(_))));
}

#[rstest]
fn usize_range_is_checked() {
    let mut small = 0_usize;
    let result = ScalarValue::new(&mut small).set("18446744073709551615");
    if usize::BITS < 64 {
        assert!(matches!(result, Err(ValueError::Range)));
    } else {
        assert!(result.is_ok());
    }
}

#[rstest]
fn text_value_keeps_the_parse_error() -> Result<()> {
    let mut addr = Ipv4Addr::LOCALHOST;
    {
        let mut value = TextValue::new(&mut addr);
        ensure!(value.to_string() == "127.0.0.1");
        let rejected = value.set("not-an-address");
        ensure!(matches!(rejected, Err(ValueError::Other(_))));
        value.set("10.0.0.1")?;
    }
    ensure!(addr == Ipv4Addr::new(10, 0, 0, 1));
    Ok(())
}

#[rstest]
fn func_value_forwards_every_argument() -> Result<()> {
    let mut seen = Vec::new();
    {
        let mut value = FuncValue::new(|text: &str| {
            seen.push(text.to_owned());
            Ok(())
        });
        ensure!(value.to_string().is_empty());
        ensure!(!value.is_bool_flag());
        value.set("a")?;
        value.set("b")?;
    }
    ensure!(seen == ["a", "b"]);
    Ok(())
}

#[rstest]
fn boxed_and_borrowed_values_forward() -> Result<()> {
    let mut verbose = false;
    {
        let mut inner = ScalarValue::new(&mut verbose);
        let borrowed: &mut dyn Value = &mut inner;
        ensure!(borrowed.is_bool_flag());
        borrowed.set("true")?;
    }
    ensure!(verbose);
    let boxed: Box<dyn Value> = Box::new(FuncValue::boolean(|_: &str| Ok(())));
    ensure!(boxed.is_bool_flag());
    ensure!(boxed.type_name() == "value");
    Ok(())
}
