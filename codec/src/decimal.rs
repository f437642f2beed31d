//! # Decimal Text Parsing
//!
//! Issued-currency values arrive as decimal text in every shape humans
//! write it: `3.7`, `-0.001`, `5e11`, `+12.5E-3`. This module splits such
//! a numeral into sign, integer mantissa, and power-of-ten exponent and
//! nothing more. Scaling the result into the ledger's representable range
//! is [`crate::value`]'s job; floats are never involved, because a value
//! that bought sixteen significant digits should keep all sixteen.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CodecError;

/// Shape of an acceptable numeral: optional sign, integer digits,
/// optional fraction, optional exponent suffix. Anchored on both ends;
/// whitespace and thousands separators are not welcome.
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d+)(?:\.(\d+))?(?:[eE]([+-]?\d+))?$").expect("static pattern compiles")
});

/// A decimal numeral reduced to parts: `(-1)^negative * mantissa * 10^exponent`.
///
/// The parts are exactly what the text said. `1.50` parses to mantissa
/// 150 and exponent -2, not to any normalized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    /// Sign of the value. `-0` keeps its flag here; whether that means
    /// anything is the caller's decision.
    pub negative: bool,
    /// All significant digits, fraction included, as one integer.
    pub mantissa: u64,
    /// Power of ten the mantissa is scaled by.
    pub exponent: i32,
}

/// Parse a decimal numeral into [`Decimal`] parts.
///
/// Fails with [`CodecError::NumericParse`] when the text does not match
/// the numeral shape, when the digits overflow a `u64`, or when the
/// exponent cannot be represented.
pub fn parse(text: &str) -> Result<Decimal, CodecError> {
    let captures = DECIMAL_RE
        .captures(text)
        .ok_or_else(|| CodecError::NumericParse {
            text: text.to_string(),
            reason: "not a decimal numeral",
        })?;

    let negative = &captures[1] == "-";
    let integer = &captures[2];
    let fraction = captures.get(3).map(|m| m.as_str()).unwrap_or("");

    let mut mantissa: u64 = 0;
    for digit in integer.bytes().chain(fraction.bytes()) {
        mantissa = mantissa
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(digit - b'0')))
            .ok_or_else(|| CodecError::NumericParse {
                text: text.to_string(),
                reason: "too many digits",
            })?;
    }

    let suffix: i32 = match captures.get(4) {
        Some(exp) => exp.as_str().parse().map_err(|_| CodecError::NumericParse {
            text: text.to_string(),
            reason: "exponent out of range",
        })?,
        None => 0,
    };
    let exponent = suffix
        .checked_sub(fraction.len() as i32)
        .ok_or_else(|| CodecError::NumericParse {
            text: text.to_string(),
            reason: "exponent out of range",
        })?;

    Ok(Decimal {
        negative,
        mantissa,
        exponent,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
