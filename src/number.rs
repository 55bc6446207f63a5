
use num::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::error::Error;

pub type Int = i64;

/// Convert integer literal text (optional sign, then decimal digits) to an
/// `Int`. The magnitude is accumulated left to right and the sign is applied
/// once at the end.
pub fn parse_int(text: &str) -> Result<Int, Error> {
    let (negative, digits) = match text.chars().next() {
        Some('-') => (true, &text[1..]),
        Some('+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() {
        return Err(Error::literal(text, "integer"));
    }

    let mut value = Int::zero();
    for c in digits.chars() {
        let digit = match c.to_digit(10) {
            Some(d) => Int::from(d),
            None => return Err(Error::literal(text, "integer")),
        };
        value = CheckedMul::checked_mul(&value, &10)
            .and_then(|v| CheckedAdd::checked_add(&v, &digit))
            .ok_or(Error::Overflow)?;
    }

    Ok(if negative { -value } else { value })
}

// Each primitive takes its two operands already evaluated.
macro_rules! checked_ops {
    { $(($name:ident, $optrait:ident, $opname:ident)),* } => {
        $(
            pub fn $name(a: Int, b: Int) -> Result<Int, Error> {
                $optrait::$opname(&a, &b).ok_or(Error::Overflow)
            }
        )*
    }
}

checked_ops! {
    (add, CheckedAdd, checked_add),
    (sub, CheckedSub, checked_sub),
    (mul, CheckedMul, checked_mul)
}

/// Truncating division.
pub fn div(a: Int, b: Int) -> Result<Int, Error> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    CheckedDiv::checked_div(&a, &b).ok_or(Error::Overflow)
}

#[test]
fn test_parse_int_0() {
    assert_eq!(parse_int("42"), Ok(42));
}

#[test]
fn test_parse_int_signed() {
    assert_eq!(parse_int("-123"), Ok(-123));
    assert_eq!(parse_int("+7"), Ok(7));
    assert_eq!(parse_int("-0"), Ok(0));
}

#[test]
fn test_parse_int_bad_digit() {
    assert_eq!(parse_int("12a"), Err(Error::literal("12a", "integer")));
    assert_eq!(parse_int("-"), Err(Error::literal("-", "integer")));
}

#[test]
fn test_parse_int_overflow() {
    assert_eq!(parse_int("99999999999999999999"), Err(Error::Overflow));
}

#[test]
fn test_div_truncates() {
    assert_eq!(div(7, 2), Ok(3));
    assert_eq!(div(-7, 2), Ok(-3));
}

#[test]
fn test_div_errors() {
    assert_eq!(div(1, 0), Err(Error::DivisionByZero));
    assert_eq!(div(Int::MIN, -1), Err(Error::Overflow));
}

#[test]
fn test_checked_ops() {
    assert_eq!(add(2, 3), Ok(5));
    assert_eq!(sub(2, 3), Ok(-1));
    assert_eq!(mul(-4, 3), Ok(-12));
    assert_eq!(add(Int::MAX, 1), Err(Error::Overflow));
}
