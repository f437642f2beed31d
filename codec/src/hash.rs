//! # Fixed-Width Identifiers
//!
//! The ledger is full of byte strings that only ever appear as hex text:
//! transaction hashes, ledger entry indexes, signing keys, email hashes.
//! Each width gets its own type so a 128-bit hash cannot wander into a
//! field that wants 256 bits, and so serde knows exactly how long the hex
//! must be before any bytes are accepted.
//!
//! All of these types own their storage. Decoding copies out of the input
//! text; nothing here borrows from the document it came from.
//!
//! Text rules are uniform: decoding accepts upper, lower, or mixed case
//! and insists on the exact width; encoding always produces lowercase.
//! [`VariableLength`] is the one exception, accepting any even number of
//! hex digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Decode hex text into an exact-width byte array.
pub(crate) fn decode_exact<const N: usize>(
    kind: &'static str,
    text: &str,
) -> Result<[u8; N], CodecError> {
    let bytes = hex::decode(text).map_err(|e| CodecError::Format {
        kind,
        detail: e.to_string(),
    })?;
    if bytes.len() != N {
        return Err(CodecError::Format {
            kind,
            detail: format!("expected {} hex characters, got {}", N * 2, text.len()),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Hash128
// ---------------------------------------------------------------------------

/// A 128-bit identifier. On the wire this is 32 hex characters; the ledger
/// uses it for MD5-shaped values such as account email hashes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash128([u8; 16]);

impl Hash128 {
    /// Width in bytes.
    pub const LEN: usize = 16;

    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl FromStr for Hash128 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_exact("Hash128", s).map(Self)
    }
}

impl fmt::Display for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash128({})", self)
    }
}

impl Serialize for Hash128 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Hash128 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            bytes
                .as_slice()
                .try_into()
                .map(Hash128)
                .map_err(|_| serde::de::Error::custom("expected 16 bytes"))
        }
    }
}

// ---------------------------------------------------------------------------
// Hash160
// ---------------------------------------------------------------------------

/// A 160-bit identifier, 40 hex characters of text. This is the raw form
/// underlying both currency codes and account identifiers; the typed
/// wrappers in [`crate::currency`] and [`crate::account`] convert from it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash160([u8; 20]);

impl Hash160 {
    /// Width in bytes.
    pub const LEN: usize = 20;

    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for Hash160 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_exact("Hash160", s).map(Self)
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash160({})", self)
    }
}

impl Serialize for Hash160 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Hash160 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            bytes
                .as_slice()
                .try_into()
                .map(Hash160)
                .map_err(|_| serde::de::Error::custom("expected 20 bytes"))
        }
    }
}

// ---------------------------------------------------------------------------
// Hash256
// ---------------------------------------------------------------------------

/// A 256-bit identifier, 64 hex characters of text. Transaction hashes,
/// ledger entry indexes, and amendment identifiers all live here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// Width in bytes.
    pub const LEN: usize = 32;

    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// True when every byte is zero. A zero hash is never a real
    /// transaction or entry; it marks "not yet known".
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl FromStr for Hash256 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_exact("Hash256", s).map(Self)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            bytes
                .as_slice()
                .try_into()
                .map(Hash256)
                .map_err(|_| serde::de::Error::custom("expected 32 bytes"))
        }
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A 33-byte compressed public key, 66 hex characters of text. Appears in
/// the `SigningPubKey` position of signed transactions.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 33]);

impl PublicKey {
    /// Width in bytes.
    pub const LEN: usize = 33;

    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 33]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }
}

impl FromStr for PublicKey {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_exact("PublicKey", s).map(Self)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            bytes
                .as_slice()
                .try_into()
                .map(PublicKey)
                .map_err(|_| serde::de::Error::custom("expected 33 bytes"))
        }
    }
}

// ---------------------------------------------------------------------------
// VariableLength
// ---------------------------------------------------------------------------

/// An arbitrary byte string carried as hex text: domains, signatures, fee
/// blobs. Any even number of hex digits is accepted, including zero.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct VariableLength(Vec<u8>);

impl VariableLength {
    /// Wrap raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for VariableLength {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl FromStr for VariableLength {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::decode(s).map(Self).map_err(|e| CodecError::Format {
            kind: "VariableLength",
            detail: e.to_string(),
        })
    }
}

impl fmt::Display for VariableLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for VariableLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariableLength({})", self)
    }
}

impl Serialize for VariableLength {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for VariableLength {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            Ok(Self(<Vec<u8>>::deserialize(deserializer)?))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
