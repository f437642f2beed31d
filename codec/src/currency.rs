//! # Currency Codes
//!
//! A currency is 160 bits, but almost nobody wants to read 40 hex
//! characters. The ledger defines a standard layout for the common case:
//! twelve zero bytes, three ASCII characters, five more zero bytes. Codes
//! in that shape travel as their three characters (`USD`, `EUR`, `BTC`);
//! everything else travels as the full hex dump.
//!
//! Two spellings are reserved. The all-zero code is the native currency
//! and prints as `XRP`; and a code whose three-character slot literally
//! spells `XRP` is pushed out of the standard layout into hex form, so
//! that reading `XRP` back always lands on the all-zero code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{CURRENCY_SLOT_LEN, CURRENCY_SLOT_OFFSET};
use crate::error::CodecError;
use crate::hash::{decode_exact, Hash160};

/// A 160-bit currency code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Currency([u8; 20]);

impl Currency {
    /// The native currency: all 160 bits zero.
    pub const NATIVE: Currency = Currency([0u8; 20]);

    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True for the all-zero native code.
    pub fn is_native(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// True when the code fits the standard three-character layout:
    /// zeros everywhere except an uppercase-alphanumeric slot that does
    /// not spell the reserved native name.
    pub fn is_standard(&self) -> bool {
        let (head, rest) = self.0.split_at(CURRENCY_SLOT_OFFSET);
        let (slot, tail) = rest.split_at(CURRENCY_SLOT_LEN);
        head.iter().all(|&b| b == 0)
            && tail.iter().all(|&b| b == 0)
            && slot.iter().all(|&b| b.is_ascii_uppercase() || b.is_ascii_digit())
            && slot != b"XRP"
    }

    fn slot(&self) -> &[u8] {
        &self.0[CURRENCY_SLOT_OFFSET..CURRENCY_SLOT_OFFSET + CURRENCY_SLOT_LEN]
    }
}

impl From<Hash160> for Currency {
    fn from(hash: Hash160) -> Self {
        Self(*hash.as_bytes())
    }
}

impl From<Currency> for Hash160 {
    fn from(currency: Currency) -> Self {
        Hash160::from_bytes(currency.0)
    }
}

impl FromStr for Currency {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "XRP" {
            return Ok(Currency::NATIVE);
        }
        match s.len() {
            3 => {
                let mut code = [0u8; 20];
                code[CURRENCY_SLOT_OFFSET..CURRENCY_SLOT_OFFSET + CURRENCY_SLOT_LEN]
                    .copy_from_slice(s.as_bytes());
                Ok(Self(code))
            }
            40 => decode_exact("Currency", s).map(Self),
            other => Err(CodecError::Format {
                kind: "Currency",
                detail: format!("expected 3 characters or 40 hex characters, got {}", other),
            }),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            f.write_str("XRP")
        } else if self.is_standard() {
            // The standard check guarantees the slot is ASCII.
            for &b in self.slot() {
                write!(f, "{}", b as char)?;
            }
            Ok(())
        } else {
            write!(f, "{}", hex::encode(self.0))
        }
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self)
    }
}

impl Serialize for Currency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            bytes
                .as_slice()
                .try_into()
                .map(Currency)
                .map_err(|_| serde::de::Error::custom("expected 20 bytes"))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
