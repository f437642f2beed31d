//! Error types for the codec layer.
//!
//! Every decode or parse in this crate that can fail returns a
//! [`CodecError`]. The variants separate "the text is gibberish" from "the
//! text is well formed but names something outside the tables", because
//! callers treat those differently (reject outright versus log and skip).

use thiserror::Error;

/// Errors that can occur while reading or writing ledger JSON.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text violates the expected layout: wrong length, characters
    /// outside the expected alphabet, or undecodable Base58Check.
    #[error("malformed {kind}: {detail}")]
    Format {
        /// What was being decoded.
        kind: &'static str,
        /// What was wrong with it.
        detail: String,
    },

    /// A transaction envelope is missing a field the decoder keys on.
    #[error("not a valid transaction envelope: missing {0}")]
    MissingField(&'static str),

    /// A name failed lookup in one of the identifier tables.
    #[error("unknown {kind}: {name}")]
    UnknownIdentifier {
        /// Which table was consulted.
        kind: &'static str,
        /// The name that missed.
        name: String,
    },

    /// Base58Check text decoded cleanly but carried the wrong version byte.
    #[error("incorrect version for {kind}: expected {expected}, got {got}")]
    VersionMismatch {
        /// What was being decoded.
        kind: &'static str,
        /// The version byte required here.
        expected: u8,
        /// The version byte the text actually carried.
        got: u8,
    },

    /// A numeric field could not be parsed within protocol bounds.
    #[error("bad numeric value {text:?}: {reason}")]
    NumericParse {
        /// The offending text.
        text: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A JSON body passed the envelope scan but failed structural decode.
    #[error("structural decode of {context} failed: {source}")]
    Structural {
        /// What was being decoded when serde gave up.
        context: &'static str,
        /// The underlying serde failure.
        source: serde_json::Error,
    },
}

impl From<riptide_address::AddressError> for CodecError {
    fn from(err: riptide_address::AddressError) -> Self {
        CodecError::Format {
            kind: "base58check text",
            detail: err.to_string(),
        }
    }
}
