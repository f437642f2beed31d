//! # Ledger Values
//!
//! One type, two regimes. A native value is an integer count of drops and
//! nothing else. An issued value is sixteen significant decimal digits
//! and a power-of-ten exponent, the ledger's fixed-point format for
//! everything that is not the native currency. Both live in [`Value`],
//! with the `native` flag recording which rules the number obeys.
//!
//! Construction always canonicalizes. An issued mantissa is scaled into
//! `[10^15, 10^16)` on the way in, so two spellings of the same number
//! compare equal and every value prints one way. Text that cannot be
//! scaled without losing digits is an error, not a rounding; this codec
//! does not decide which digits of somebody's money are disposable.
//!
//! Rendering follows the ledger's printable window: issued values whose
//! canonical exponent sits in `[-25, -5]` (or is exactly zero) print as
//! positional decimals, everything else prints as `<mantissa>e<exponent>`
//! scientific form with trailing zeros folded into the exponent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{MAX_DROPS, MAX_EXPONENT, MAX_MANTISSA, MIN_EXPONENT, MIN_MANTISSA};
use crate::decimal;
use crate::error::CodecError;

/// A canonicalized ledger value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    native: bool,
    negative: bool,
    mantissa: u64,
    exponent: i8,
}

impl Value {
    /// Parse a native value: an unsigned decimal count of drops.
    ///
    /// No sign, no point, no exponent. Anything beyond plain digits is a
    /// [`CodecError::NumericParse`], as is a count above [`MAX_DROPS`].
    pub fn parse_native(text: &str) -> Result<Self, CodecError> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::NumericParse {
                text: text.to_string(),
                reason: "drops must be an unsigned integer",
            });
        }
        let drops: u64 = text.parse().map_err(|_| CodecError::NumericParse {
            text: text.to_string(),
            reason: "too many digits",
        })?;
        Self::from_drops(drops)
    }

    /// Wrap a drop count already in hand.
    pub fn from_drops(drops: u64) -> Result<Self, CodecError> {
        if drops > MAX_DROPS {
            return Err(CodecError::NumericParse {
                text: drops.to_string(),
                reason: "exceeds the drops ceiling",
            });
        }
        Ok(Self {
            native: true,
            negative: false,
            mantissa: drops,
            exponent: 0,
        })
    }

    /// Parse an issued value from decimal text and canonicalize it.
    ///
    /// Zero collapses to unsigned zero. Anything else is scaled until the
    /// mantissa occupies `[10^15, 10^16)`; scaling that would drop a
    /// non-zero digit, or an exponent that leaves the representable
    /// window, fails with [`CodecError::NumericParse`].
    pub fn parse_issued(text: &str) -> Result<Self, CodecError> {
        let parts = decimal::parse(text)?;
        if parts.mantissa == 0 {
            return Ok(Self {
                native: false,
                negative: false,
                mantissa: 0,
                exponent: 0,
            });
        }

        let mut mantissa = parts.mantissa;
        let mut exponent = i64::from(parts.exponent);
        while mantissa < MIN_MANTISSA {
            mantissa *= 10;
            exponent -= 1;
        }
        while mantissa > MAX_MANTISSA {
            if mantissa % 10 != 0 {
                return Err(CodecError::NumericParse {
                    text: text.to_string(),
                    reason: "too many significant digits",
                });
            }
            mantissa /= 10;
            exponent += 1;
        }
        if exponent < i64::from(MIN_EXPONENT) || exponent > i64::from(MAX_EXPONENT) {
            return Err(CodecError::NumericParse {
                text: text.to_string(),
                reason: "exponent out of range",
            });
        }

        Ok(Self {
            native: false,
            negative: parts.negative,
            mantissa,
            exponent: exponent as i8,
        })
    }

    /// True for values under native (drops) rules.
    pub fn is_native(&self) -> bool {
        self.native
    }

    /// True for values below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True for zero of either regime.
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// The canonical mantissa. For native values this is the drop count.
    pub fn mantissa(&self) -> u64 {
        self.mantissa
    }

    /// The canonical exponent. Always zero for native values.
    pub fn exponent(&self) -> i8 {
        self.exponent
    }
}

impl Default for Value {
    /// Zero drops. The default is native because every bare-string field
    /// in ledger JSON is a drops position.
    fn default() -> Self {
        Self {
            native: true,
            negative: false,
            mantissa: 0,
            exponent: 0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.negative {
            f.write_str("-")?;
        }
        if self.native {
            return write!(f, "{}", self.mantissa);
        }

        let exponent = i32::from(self.exponent);
        let scientific = exponent != 0 && !(-25..=-5).contains(&exponent);
        if scientific {
            let digits = self.mantissa.to_string();
            let trimmed = digits.trim_end_matches('0');
            let shift = (digits.len() - trimmed.len()) as i32;
            return write!(f, "{}e{}", trimmed, exponent + shift);
        }
        if exponent == 0 {
            return write!(f, "{}", self.mantissa);
        }

        // Positional window: exponent in [-25, -5], mantissa 16 digits.
        let digits = self.mantissa.to_string();
        let point = (-exponent) as usize;
        if point < digits.len() {
            let (int_part, frac_part) = digits.split_at(digits.len() - point);
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                f.write_str(int_part)
            } else {
                write!(f, "{}.{}", int_part, frac_part)
            }
        } else {
            let mut frac = "0".repeat(point - digits.len());
            frac.push_str(&digits);
            write!(f, "0.{}", frac.trim_end_matches('0'))
        }
    }
}

impl Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Value {
    /// A bare JSON string is always a drops position (`Fee`, reserve
    /// fields); issued values only appear inside amount objects, which
    /// parse their `value` member explicitly.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Value::parse_native(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
