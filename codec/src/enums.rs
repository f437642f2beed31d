//! # Identifier Tables
//!
//! Transaction types, engine result codes, and ledger entry types are
//! closed vocabularies: every member has a numeric wire code and a
//! canonical name, and JSON always carries the name. Each enum here owns
//! its table; the reverse (name to variant) maps are built once, on first
//! use, and never mutated, so lookups are safe to share across threads.
//!
//! Decoding is by name only. The numeric codes matter to the binary wire
//! format and to error classification, but a JSON document that says
//! `"TransactionType": 0` is malformed, not clever.
//!
//! A name outside the table is [`CodecError::UnknownIdentifier`]. That is
//! deliberate: silently mapping unknown names to a catch-all would let a
//! typo ride all the way into a signed transaction.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// The operation a transaction performs.
///
/// These are the types the factory can construct; the set matches what
/// the decoder understands end to end, not every type any network has
/// ever amended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TransactionType {
    /// Move value from one account to another.
    Payment = 0,
    /// Adjust account-level settings and flags.
    AccountSet = 3,
    /// Assign or clear a delegated signing key.
    SetRegularKey = 5,
    /// Place an order on the decentralized exchange.
    OfferCreate = 7,
    /// Withdraw a previously placed order.
    OfferCancel = 8,
    /// Create, change, or delete a trust line.
    TrustSet = 20,
    /// Pseudo-transaction: an amendment gained (or lost) support.
    EnableAmendment = 100,
    /// Pseudo-transaction: the network changed its fee schedule.
    SetFee = 101,
}

static TX_TYPES_BY_NAME: Lazy<HashMap<&'static str, TransactionType>> =
    Lazy::new(|| TransactionType::ALL.iter().map(|&t| (t.name(), t)).collect());

impl TransactionType {
    /// Every registered transaction type.
    pub const ALL: &'static [TransactionType] = &[
        TransactionType::Payment,
        TransactionType::AccountSet,
        TransactionType::SetRegularKey,
        TransactionType::OfferCreate,
        TransactionType::OfferCancel,
        TransactionType::TrustSet,
        TransactionType::EnableAmendment,
        TransactionType::SetFee,
    ];

    /// The canonical name, as it appears in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Payment => "Payment",
            Self::AccountSet => "AccountSet",
            Self::SetRegularKey => "SetRegularKey",
            Self::OfferCreate => "OfferCreate",
            Self::OfferCancel => "OfferCancel",
            Self::TrustSet => "TrustSet",
            Self::EnableAmendment => "EnableAmendment",
            Self::SetFee => "SetFee",
        }
    }

    /// The numeric wire code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Look a name up in the table.
    pub fn from_name(name: &str) -> Result<Self, CodecError> {
        TX_TYPES_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| CodecError::UnknownIdentifier {
                kind: "TransactionType",
                name: name.to_string(),
            })
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Payment
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TransactionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        TransactionType::from_name(&name).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// TransactionResult
// ---------------------------------------------------------------------------

/// Coarse grouping of engine result codes, determined by code band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultClass {
    /// `tes`: applied and succeeded.
    Success,
    /// `tec`: failed, but claimed the fee and was recorded in a ledger.
    ClaimedCost,
    /// `tef`: failed outright; not recorded.
    Failure,
    /// `tel`: rejected by the local server before relay.
    LocalError,
    /// `tem`: the transaction itself is malformed.
    Malformed,
    /// `ter`: failed for now, could succeed in a later ledger.
    Retry,
}

/// An engine result code.
///
/// Names keep the ledger's spelling (`tesSUCCESS`, `tecPATH_DRY`) on the
/// wire and idiomatic spelling in Rust. The table carries the codes the
/// decoder routinely sees; anything outside it decodes to an error, which
/// is the correct reaction to a result code this crate does not know the
/// consequences of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum TransactionResult {
    /// `tesSUCCESS`
    Success = 0,
    /// `tecCLAIM`
    Claim = 100,
    /// `tecPATH_PARTIAL`
    PathPartial = 101,
    /// `tecUNFUNDED_OFFER`
    UnfundedOffer = 103,
    /// `tecUNFUNDED_PAYMENT`
    UnfundedPayment = 104,
    /// `tecDIR_FULL`
    DirFull = 121,
    /// `tecINSUF_RESERVE_LINE`
    InsufficientReserveLine = 122,
    /// `tecINSUF_RESERVE_OFFER`
    InsufficientReserveOffer = 123,
    /// `tecNO_DST`
    NoDestination = 124,
    /// `tecNO_DST_INSUF_XRP`
    NoDestinationInsufficientNative = 125,
    /// `tecPATH_DRY`
    PathDry = 128,
    /// `tecUNFUNDED`
    Unfunded = 129,
    /// `tefFAILURE`
    Failure = -199,
    /// `tefALREADY`
    Already = -198,
    /// `tefBAD_AUTH`
    BadAuth = -196,
    /// `tefPAST_SEQ`
    PastSequence = -190,
    /// `tefMASTER_DISABLED`
    MasterDisabled = -188,
    /// `temMALFORMED`
    Malformed = -299,
    /// `temBAD_AMOUNT`
    BadAmount = -298,
    /// `temBAD_FEE`
    BadFee = -295,
    /// `temBAD_SIGNATURE`
    BadSignature = -284,
    /// `temREDUNDANT`
    Redundant = -277,
    /// `telLOCAL_ERROR`
    LocalError = -399,
    /// `telBAD_DOMAIN`
    BadDomain = -398,
    /// `telINSUF_FEE_P`
    InsufficientFeeProcessing = -394,
    /// `terRETRY`
    Retry = -99,
    /// `terINSUF_FEE_B`
    InsufficientFeeBalance = -97,
    /// `terNO_ACCOUNT`
    NoAccount = -96,
    /// `terPRE_SEQ`
    PreSequence = -92,
}

static RESULTS_BY_NAME: Lazy<HashMap<&'static str, TransactionResult>> =
    Lazy::new(|| TransactionResult::ALL.iter().map(|&r| (r.name(), r)).collect());

impl TransactionResult {
    /// Every registered result code.
    pub const ALL: &'static [TransactionResult] = &[
        TransactionResult::Success,
        TransactionResult::Claim,
        TransactionResult::PathPartial,
        TransactionResult::UnfundedOffer,
        TransactionResult::UnfundedPayment,
        TransactionResult::DirFull,
        TransactionResult::InsufficientReserveLine,
        TransactionResult::InsufficientReserveOffer,
        TransactionResult::NoDestination,
        TransactionResult::NoDestinationInsufficientNative,
        TransactionResult::PathDry,
        TransactionResult::Unfunded,
        TransactionResult::Failure,
        TransactionResult::Already,
        TransactionResult::BadAuth,
        TransactionResult::PastSequence,
        TransactionResult::MasterDisabled,
        TransactionResult::Malformed,
        TransactionResult::BadAmount,
        TransactionResult::BadFee,
        TransactionResult::BadSignature,
        TransactionResult::Redundant,
        TransactionResult::LocalError,
        TransactionResult::BadDomain,
        TransactionResult::InsufficientFeeProcessing,
        TransactionResult::Retry,
        TransactionResult::InsufficientFeeBalance,
        TransactionResult::NoAccount,
        TransactionResult::PreSequence,
    ];

    /// The canonical name, as it appears in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "tesSUCCESS",
            Self::Claim => "tecCLAIM",
            Self::PathPartial => "tecPATH_PARTIAL",
            Self::UnfundedOffer => "tecUNFUNDED_OFFER",
            Self::UnfundedPayment => "tecUNFUNDED_PAYMENT",
            Self::DirFull => "tecDIR_FULL",
            Self::InsufficientReserveLine => "tecINSUF_RESERVE_LINE",
            Self::InsufficientReserveOffer => "tecINSUF_RESERVE_OFFER",
            Self::NoDestination => "tecNO_DST",
            Self::NoDestinationInsufficientNative => "tecNO_DST_INSUF_XRP",
            Self::PathDry => "tecPATH_DRY",
            Self::Unfunded => "tecUNFUNDED",
            Self::Failure => "tefFAILURE",
            Self::Already => "tefALREADY",
            Self::BadAuth => "tefBAD_AUTH",
            Self::PastSequence => "tefPAST_SEQ",
            Self::MasterDisabled => "tefMASTER_DISABLED",
            Self::Malformed => "temMALFORMED",
            Self::BadAmount => "temBAD_AMOUNT",
            Self::BadFee => "temBAD_FEE",
            Self::BadSignature => "temBAD_SIGNATURE",
            Self::Redundant => "temREDUNDANT",
            Self::LocalError => "telLOCAL_ERROR",
            Self::BadDomain => "telBAD_DOMAIN",
            Self::InsufficientFeeProcessing => "telINSUF_FEE_P",
            Self::Retry => "terRETRY",
            Self::InsufficientFeeBalance => "terINSUF_FEE_B",
            Self::NoAccount => "terNO_ACCOUNT",
            Self::PreSequence => "terPRE_SEQ",
        }
    }

    /// The numeric engine code.
    pub fn code(&self) -> i16 {
        *self as i16
    }

    /// Look a name up in the table.
    pub fn from_name(name: &str) -> Result<Self, CodecError> {
        RESULTS_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| CodecError::UnknownIdentifier {
                kind: "TransactionResult",
                name: name.to_string(),
            })
    }

    /// The band this code belongs to.
    pub fn class(&self) -> ResultClass {
        match self.code() {
            0..=99 => ResultClass::Success,
            100..=199 => ResultClass::ClaimedCost,
            -199..=-100 => ResultClass::Failure,
            -299..=-200 => ResultClass::Malformed,
            -399..=-300 => ResultClass::LocalError,
            _ => ResultClass::Retry,
        }
    }

    /// True only for `tesSUCCESS`.
    pub fn is_success(&self) -> bool {
        *self == TransactionResult::Success
    }
}

impl Default for TransactionResult {
    fn default() -> Self {
        TransactionResult::Success
    }
}

impl fmt::Display for TransactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TransactionResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TransactionResult {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        TransactionResult::from_name(&name).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// LedgerEntryType
// ---------------------------------------------------------------------------

/// The kind of a ledger entry touched by a transaction.
///
/// The wire codes are ASCII mnemonics (`a` for account root, `o` for
/// offer), a holdover from the binary format that makes hexdumps almost
/// readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum LedgerEntryType {
    /// The root object of an account.
    AccountRoot = 97,
    /// A contract entry.
    Contract = 99,
    /// A page of an owner or order book directory.
    DirectoryNode = 100,
    /// The amendment voting ledger entry.
    Amendments = 102,
    /// The (retired) generator map.
    GeneratorMap = 103,
    /// Rolling history of recent ledger hashes.
    LedgerHashes = 104,
    /// An order on the decentralized exchange.
    Offer = 111,
    /// One trust line between two accounts.
    RippleState = 114,
    /// The network fee schedule.
    FeeSettings = 115,
}

static ENTRY_TYPES_BY_NAME: Lazy<HashMap<&'static str, LedgerEntryType>> =
    Lazy::new(|| LedgerEntryType::ALL.iter().map(|&t| (t.name(), t)).collect());

impl LedgerEntryType {
    /// Every registered entry type.
    pub const ALL: &'static [LedgerEntryType] = &[
        LedgerEntryType::AccountRoot,
        LedgerEntryType::Contract,
        LedgerEntryType::DirectoryNode,
        LedgerEntryType::Amendments,
        LedgerEntryType::GeneratorMap,
        LedgerEntryType::LedgerHashes,
        LedgerEntryType::Offer,
        LedgerEntryType::RippleState,
        LedgerEntryType::FeeSettings,
    ];

    /// The canonical name, as it appears in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccountRoot => "AccountRoot",
            Self::Contract => "Contract",
            Self::DirectoryNode => "DirectoryNode",
            Self::Amendments => "Amendments",
            Self::GeneratorMap => "GeneratorMap",
            Self::LedgerHashes => "LedgerHashes",
            Self::Offer => "Offer",
            Self::RippleState => "RippleState",
            Self::FeeSettings => "FeeSettings",
        }
    }

    /// The numeric wire code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Look a name up in the table.
    pub fn from_name(name: &str) -> Result<Self, CodecError> {
        ENTRY_TYPES_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| CodecError::UnknownIdentifier {
                kind: "LedgerEntryType",
                name: name.to_string(),
            })
    }
}

impl fmt::Display for LedgerEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for LedgerEntryType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for LedgerEntryType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        LedgerEntryType::from_name(&name).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_names_and_codes() {
        assert_eq!(TransactionType::Payment.name(), "Payment");
        assert_eq!(TransactionType::Payment.code(), 0);
        assert_eq!(TransactionType::TrustSet.code(), 20);
        assert_eq!(TransactionType::SetFee.code(), 101);
        assert_eq!(
            TransactionType::from_name("OfferCancel").unwrap(),
            TransactionType::OfferCancel
        );
    }

    #[test]
    fn unknown_transaction_type_is_reported() {
        let err = TransactionType::from_name("Sandwich").unwrap_err();
        assert_eq!(err.to_string(), "unknown TransactionType: Sandwich");
    }

    #[test]
    fn every_name_is_unique() {
        assert_eq!(TX_TYPES_BY_NAME.len(), TransactionType::ALL.len());
        assert_eq!(RESULTS_BY_NAME.len(), TransactionResult::ALL.len());
        assert_eq!(ENTRY_TYPES_BY_NAME.len(), LedgerEntryType::ALL.len());
    }

    #[test]
    fn every_variant_roundtrips_through_its_name() {
        for &t in TransactionType::ALL {
            assert_eq!(TransactionType::from_name(t.name()).unwrap(), t);
        }
        for &r in TransactionResult::ALL {
            assert_eq!(TransactionResult::from_name(r.name()).unwrap(), r);
        }
        for &l in LedgerEntryType::ALL {
            assert_eq!(LedgerEntryType::from_name(l.name()).unwrap(), l);
        }
    }

    #[test]
    fn result_codes_match_the_ledger() {
        assert_eq!(TransactionResult::Success.code(), 0);
        assert_eq!(TransactionResult::Claim.code(), 100);
        assert_eq!(TransactionResult::PathDry.code(), 128);
        assert_eq!(TransactionResult::Failure.code(), -199);
        assert_eq!(TransactionResult::Malformed.code(), -299);
        assert_eq!(TransactionResult::LocalError.code(), -399);
        assert_eq!(TransactionResult::Retry.code(), -99);
    }

    #[test]
    fn result_classes_follow_the_bands() {
        assert_eq!(TransactionResult::Success.class(), ResultClass::Success);
        assert_eq!(TransactionResult::PathDry.class(), ResultClass::ClaimedCost);
        assert_eq!(TransactionResult::PastSequence.class(), ResultClass::Failure);
        assert_eq!(TransactionResult::BadAmount.class(), ResultClass::Malformed);
        assert_eq!(TransactionResult::BadDomain.class(), ResultClass::LocalError);
        assert_eq!(TransactionResult::NoAccount.class(), ResultClass::Retry);
        assert!(TransactionResult::Success.is_success());
        assert!(!TransactionResult::Claim.is_success());
    }

    #[test]
    fn ledger_entry_codes_are_ascii_mnemonics() {
        assert_eq!(LedgerEntryType::AccountRoot.code(), u16::from(b'a'));
        assert_eq!(LedgerEntryType::Offer.code(), u16::from(b'o'));
        assert_eq!(LedgerEntryType::RippleState.code(), u16::from(b'r'));
        assert_eq!(LedgerEntryType::FeeSettings.code(), u16::from(b's'));
    }

    #[test]
    fn serde_speaks_names_only() {
        assert_eq!(
            serde_json::to_string(&TransactionResult::PathDry).unwrap(),
            "\"tecPATH_DRY\""
        );
        let back: TransactionResult = serde_json::from_str("\"tecPATH_DRY\"").unwrap();
        assert_eq!(back, TransactionResult::PathDry);

        // Numeric codes are not a JSON spelling.
        assert!(serde_json::from_str::<TransactionType>("0").is_err());
        assert!(serde_json::from_str::<TransactionResult>("128").is_err());

        let err = serde_json::from_str::<TransactionResult>("\"tesVICTORY\"").unwrap_err();
        assert!(err.to_string().contains("unknown TransactionResult"));
    }

    #[test]
    fn defaults_are_the_zero_codes() {
        assert_eq!(TransactionType::default(), TransactionType::Payment);
        assert_eq!(TransactionResult::default(), TransactionResult::Success);
    }
}
