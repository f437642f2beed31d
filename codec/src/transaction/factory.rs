//! # Transaction Factory
//!
//! Maps a [`TransactionType`] to its concrete shape. [`empty`] builds a
//! zero-valued transaction pre-tagged with its type; [`decode`] parses a
//! JSON document against the shape the type selects. Neither ever guesses:
//! an unregistered name fails at the name table, before any structural
//! work, and a registered name decodes against exactly one shape.

use crate::enums::TransactionType;
use crate::error::CodecError;
use crate::transaction::types::{
    AccountSet, EnableAmendment, OfferCancel, OfferCreate, Payment, SetFee,
    SetRegularKey, Transaction, TrustSet, TxBase,
};

fn tagged(tx_type: TransactionType) -> TxBase {
    TxBase {
        transaction_type: tx_type,
        ..TxBase::default()
    }
}

fn structural(tx_type: TransactionType, source: serde_json::Error) -> CodecError {
    CodecError::Structural {
        context: tx_type.name(),
        source,
    }
}

/// Builds the zero-valued transaction for a type, with the base's type tag
/// already set so the result serializes with the right `TransactionType`.
pub fn empty(tx_type: TransactionType) -> Transaction {
    let base = tagged(tx_type);
    match tx_type {
        TransactionType::Payment => Transaction::Payment(Payment {
            base,
            ..Payment::default()
        }),
        TransactionType::AccountSet => Transaction::AccountSet(AccountSet {
            base,
            ..AccountSet::default()
        }),
        TransactionType::SetRegularKey => {
            Transaction::SetRegularKey(SetRegularKey {
                base,
                ..SetRegularKey::default()
            })
        }
        TransactionType::OfferCreate => Transaction::OfferCreate(OfferCreate {
            base,
            ..OfferCreate::default()
        }),
        TransactionType::OfferCancel => Transaction::OfferCancel(OfferCancel {
            base,
            ..OfferCancel::default()
        }),
        TransactionType::TrustSet => Transaction::TrustSet(TrustSet {
            base,
            ..TrustSet::default()
        }),
        TransactionType::EnableAmendment => {
            Transaction::EnableAmendment(EnableAmendment {
                base,
                ..EnableAmendment::default()
            })
        }
        TransactionType::SetFee => Transaction::SetFee(SetFee {
            base,
            ..SetFee::default()
        }),
    }
}

/// Like [`empty`], but starting from a type name. Unregistered names fail
/// with [`CodecError::UnknownIdentifier`].
pub fn empty_by_name(name: &str) -> Result<Transaction, CodecError> {
    TransactionType::from_name(name).map(empty)
}

/// Decodes a full JSON document against the shape `tx_type` selects.
///
/// The whole document is parsed, not just the type-specific fields, so a
/// malformed base field fails here too. Parse failures carry the type name
/// as context in a [`CodecError::Structural`].
pub fn decode(tx_type: TransactionType, text: &str) -> Result<Transaction, CodecError> {
    let tx = match tx_type {
        TransactionType::Payment => Transaction::Payment(
            serde_json::from_str(text).map_err(|e| structural(tx_type, e))?,
        ),
        TransactionType::AccountSet => Transaction::AccountSet(
            serde_json::from_str(text).map_err(|e| structural(tx_type, e))?,
        ),
        TransactionType::SetRegularKey => Transaction::SetRegularKey(
            serde_json::from_str(text).map_err(|e| structural(tx_type, e))?,
        ),
        TransactionType::OfferCreate => Transaction::OfferCreate(
            serde_json::from_str(text).map_err(|e| structural(tx_type, e))?,
        ),
        TransactionType::OfferCancel => Transaction::OfferCancel(
            serde_json::from_str(text).map_err(|e| structural(tx_type, e))?,
        ),
        TransactionType::TrustSet => Transaction::TrustSet(
            serde_json::from_str(text).map_err(|e| structural(tx_type, e))?,
        ),
        TransactionType::EnableAmendment => Transaction::EnableAmendment(
            serde_json::from_str(text).map_err(|e| structural(tx_type, e))?,
        ),
        TransactionType::SetFee => Transaction::SetFee(
            serde_json::from_str(text).map_err(|e| structural(tx_type, e))?,
        ),
    };
    Ok(tx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
