//! # Account Identifiers
//!
//! An account is 160 bits of key hash. In JSON it travels as a Base58Check
//! address (`rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh`), produced and checked by
//! the `riptide-address` crate. Decoding insists on the account version
//! byte: a well-formed address of some other kind (a seed, a node key) is
//! rejected with the version it actually carried, which makes "you pasted
//! the wrong kind of secret here" a precise error instead of a shrug.
//!
//! The all-zero identifier is special-cased on output. It marks "no
//! account" in ledger structures and encodes to the empty string; whether
//! empty means absent or zero is the caller's call, which is why optional
//! fields in this crate stay `Option<Account>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::hash::Hash160;

fn decode_account_id(kind: &'static str, text: &str) -> Result<[u8; 20], CodecError> {
    let (payload, version) = riptide_address::decode(text)?;
    if version != riptide_address::ACCOUNT_ID {
        return Err(CodecError::VersionMismatch {
            kind,
            expected: riptide_address::ACCOUNT_ID,
            got: version,
        });
    }
    payload
        .as_slice()
        .try_into()
        .map_err(|_| CodecError::Format {
            kind,
            detail: format!("expected a 20 byte payload, got {}", payload.len()),
        })
}

fn encode_account_id(bytes: &[u8; 20]) -> String {
    riptide_address::encode(bytes, riptide_address::ACCOUNT_ID)
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A 20-byte account identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Account([u8; 20]);

impl Account {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True for the all-zero "no account" value.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// The Base58Check address for this account, empty for zero.
    pub fn to_address(&self) -> String {
        if self.is_zero() {
            String::new()
        } else {
            encode_account_id(&self.0)
        }
    }
}

impl From<Hash160> for Account {
    fn from(hash: Hash160) -> Self {
        Self(*hash.as_bytes())
    }
}

impl From<Account> for Hash160 {
    fn from(account: Account) -> Self {
        Hash160::from_bytes(account.0)
    }
}

impl FromStr for Account {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_account_id("Account", s).map(Self)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_address())
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("Account(zero)")
        } else {
            write!(f, "Account({})", self.to_address())
        }
    }
}

impl Serialize for Account {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_address())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Account {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            bytes
                .as_slice()
                .try_into()
                .map(Account)
                .map_err(|_| serde::de::Error::custom("expected 20 bytes"))
        }
    }
}

// ---------------------------------------------------------------------------
// RegularKey
// ---------------------------------------------------------------------------

/// A regular key: an account identifier delegated signing authority.
/// Same bits and same text form as [`Account`], kept as its own type so
/// the two cannot be swapped by accident.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegularKey([u8; 20]);

impl RegularKey {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True for the all-zero value.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl From<Hash160> for RegularKey {
    fn from(hash: Hash160) -> Self {
        Self(*hash.as_bytes())
    }
}

impl From<Account> for RegularKey {
    fn from(account: Account) -> Self {
        Self(*account.as_bytes())
    }
}

impl FromStr for RegularKey {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_account_id("RegularKey", s).map(Self)
    }
}

impl fmt::Display for RegularKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            Ok(())
        } else {
            f.write_str(&encode_account_id(&self.0))
        }
    }
}

impl fmt::Debug for RegularKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("RegularKey(zero)")
        } else {
            write!(f, "RegularKey({})", encode_account_id(&self.0))
        }
    }
}

impl Serialize for RegularKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for RegularKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            bytes
                .as_slice()
                .try_into()
                .map(RegularKey)
                .map_err(|_| serde::de::Error::custom("expected 20 bytes"))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
