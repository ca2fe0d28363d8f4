//! Scalar type coercion for value cells.
//!
//! Every scalar cell is coerced to the strongest type it can represent, in a
//! fixed order: empty, boolean, self-reference, number, string. Authors have
//! no way to force a string for `"true"` or `"42"`; schemas that need text are
//! expected to convert back.

use crate::reference::parse_reference;

/// Outcome of coercing one trimmed cell, before reference lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Empty cell.
    Empty,
    /// Exactly `true` or `false`.
    Boolean(bool),
    /// Self-reference; holds the variation identifier to look up.
    Reference(String),
    /// Finite numeric literal.
    Number(f64),
    /// Anything else, kept as text.
    Text,
}

/// Classify a trimmed cell.
///
/// A marker-prefixed token never parses as a number, so a reference that
/// fails to resolve always falls through to [`Scalar::Text`].
///
/// ```rust
/// use dasc_core::coerce::{Scalar, coerce_scalar};
///
/// assert_eq!(coerce_scalar("true"), Scalar::Boolean(true));
/// assert_eq!(coerce_scalar("42"), Scalar::Number(42.0));
/// assert_eq!(coerce_scalar("42abc"), Scalar::Text);
/// assert_eq!(
///     coerce_scalar("self://#forms/offer"),
///     Scalar::Reference("forms-offer".to_string())
/// );
/// ```
#[must_use]
pub fn coerce_scalar(text: &str) -> Scalar {
    if text.is_empty() {
        return Scalar::Empty;
    }
    if let Some(b) = parse_boolean(text) {
        return Scalar::Boolean(b);
    }
    if let Some(id) = parse_reference(text) {
        return Scalar::Reference(id);
    }
    if let Some(n) = parse_number(text) {
        return Scalar::Number(n);
    }
    Scalar::Text
}

/// Case-sensitive `true` / `false`.
#[must_use]
pub fn parse_boolean(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parse a finite numeric literal.
///
/// Accepts signed decimals with optional exponent (`-3.5`, `1e3`, `.5`) and
/// unsigned `0x` / `0o` / `0b` integers. `NaN` and infinities are rejected.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    if let Some(n) = parse_prefixed_integer(text) {
        return Some(n);
    }

    // Rust accepts "inf"/"nan" spellings; only digits, signs, dots and exponents are numbers here.
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[allow(clippy::cast_precision_loss)] // Large literals round like any other float
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
}
