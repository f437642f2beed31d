//! # Riptide Address - Base58Check for the XRP Ledger
//!
//! Every identifier the ledger shows to humans (account addresses, node
//! public keys, seeds) travels as Base58Check text over the ledger's own
//! alphabet:
//!
//! ```text
//! payload (n bytes)
//!     -> prepend version byte                      -> n + 1 bytes
//!     -> append SHA256(SHA256(bytes))[..4]         -> n + 5 bytes
//!     -> base58 over "rpshnaf39w..."               -> rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh
//! ```
//!
//! The version byte selects the identifier kind and doubles as a visual
//! prefix at the standard payload lengths: accounts start with `r`, seeds
//! with `s`, node keys with `n`. The checksum catches transcription errors
//! before they turn into payments to nowhere.
//!
//! This crate only moves bytes to text and back. Interpreting the payload,
//! and deciding which version is acceptable where, is the caller's job.

use thiserror::Error;

/// Version byte for a 20-byte account identifier. Text form starts with `r`.
pub const ACCOUNT_ID: u8 = 0;

/// Version byte for a 33-byte account public key.
pub const ACCOUNT_PUBLIC: u8 = 35;

/// Version byte for a 16-byte seed. Text form starts with `s`.
pub const FAMILY_SEED: u8 = 33;

/// Version byte for a 33-byte node public key. Text form starts with `n`.
pub const NODE_PUBLIC: u8 = 28;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while decoding Base58Check text.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The text contains characters outside the ledger alphabet, is too
    /// short to carry a checksum, or its checksum does not match.
    #[error("base58check decode failed: {0}")]
    Decode(#[from] bs58::decode::Error),

    /// The checksum verified but stripping it left nothing, so there is
    /// no version byte to return.
    #[error("decoded text carries no version byte")]
    MissingVersion,
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Encode `payload` as Base58Check text with `version` prepended.
pub fn encode(payload: &[u8], version: u8) -> String {
    bs58::encode(payload)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check_version(version)
        .into_string()
}

/// Decode Base58Check text into its payload and leading version byte.
///
/// Verifies and strips the 4-byte checksum. The version byte is returned
/// rather than checked; only the caller knows which versions make sense
/// for the identifier it is decoding.
pub fn decode(text: &str) -> Result<(Vec<u8>, u8), AddressError> {
    let decoded = bs58::decode(text)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check(None)
        .into_vec()?;
    match decoded.split_first() {
        Some((&version, payload)) => Ok((payload.to_vec(), version)),
        None => Err(AddressError::MissingVersion),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
