//! # Transaction Types
//!
//! The concrete transaction shapes the codec understands, mirroring the
//! upstream ledger's JSON field names. Every shape embeds [`TxBase`] through
//! `#[serde(flatten)]`, so the common fields and the per-type fields live in
//! one flat JSON object on the wire.
//!
//! [`Transaction`] is the closed sum over all registered shapes. It
//! deliberately has no `Deserialize` impl: picking the variant is the
//! factory's job, driven by the declared `TransactionType` name rather than
//! by guessing from the shape of the JSON.

use serde::{Deserialize, Serialize, Serializer};

use crate::account::{Account, RegularKey};
use crate::amount::Amount;
use crate::currency::Currency;
use crate::enums::TransactionType;
use crate::hash::{Hash128, Hash256, PublicKey, VariableLength};
use crate::value::Value;

// ---------------------------------------------------------------------------
// Common base
// ---------------------------------------------------------------------------

/// Fields shared by every transaction shape.
///
/// Optional fields are omitted from the serialized form when unset, matching
/// the ledger's own output. `Sequence` and `Fee` default to zero so that
/// freshly constructed, not-yet-submitted transactions decode cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxBase {
    /// The declared type tag. The factory keeps this consistent with the
    /// enclosing [`Transaction`] variant.
    #[serde(rename = "TransactionType")]
    pub transaction_type: TransactionType,
    /// The sending account.
    #[serde(rename = "Account")]
    pub account: Account,
    /// The sender's sequence number at submission time.
    #[serde(rename = "Sequence", default)]
    pub sequence: u32,
    /// The transaction fee, always a native value.
    #[serde(rename = "Fee", default)]
    pub fee: Value,
    /// Type-specific flag bits.
    #[serde(rename = "Flags", skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    /// Highest ledger sequence this transaction may be included in.
    #[serde(
        rename = "LastLedgerSequence",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_ledger_sequence: Option<u32>,
    /// Public key the signature verifies against.
    #[serde(rename = "SigningPubKey", skip_serializing_if = "Option::is_none")]
    pub signing_pub_key: Option<PublicKey>,
    /// The signature over the transaction's signing form.
    #[serde(rename = "TxnSignature", skip_serializing_if = "Option::is_none")]
    pub txn_signature: Option<VariableLength>,
}

// ---------------------------------------------------------------------------
// Payment paths
// ---------------------------------------------------------------------------

/// One hop in a cross-currency payment path. All fields are optional; the
/// upstream wire format uses lowercase keys for these, unlike transaction
/// fields proper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Account>,
}

/// A single payment path, source to destination.
pub type Path = Vec<PathStep>;

/// The alternative paths a payment may settle through.
pub type PathSet = Vec<Path>;

// ---------------------------------------------------------------------------
// Concrete transaction shapes
// ---------------------------------------------------------------------------

/// Moves value from one account to another, natively or through issued
/// currencies along [`PathSet`] routes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Payment {
    #[serde(flatten)]
    pub base: TxBase,
    /// The receiving account.
    #[serde(rename = "Destination")]
    pub destination: Account,
    /// What the destination receives.
    #[serde(rename = "Amount")]
    pub amount: Amount,
    /// Cap on what the sender is willing to part with, for cross-currency
    /// payments where the two sides differ.
    #[serde(rename = "SendMax", skip_serializing_if = "Option::is_none")]
    pub send_max: Option<Amount>,
    #[serde(rename = "Paths", skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathSet>,
    /// Routing hint for the destination, e.g. a hosted wallet's sub-account.
    #[serde(rename = "DestinationTag", skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
    /// 256-bit payment reference chosen by the sender.
    #[serde(rename = "InvoiceID", skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Hash256>,
}

/// Adjusts properties of the sending account itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountSet {
    #[serde(flatten)]
    pub base: TxBase,
    #[serde(rename = "EmailHash", skip_serializing_if = "Option::is_none")]
    pub email_hash: Option<Hash128>,
    #[serde(rename = "WalletLocator", skip_serializing_if = "Option::is_none")]
    pub wallet_locator: Option<Hash256>,
    #[serde(rename = "WalletSize", skip_serializing_if = "Option::is_none")]
    pub wallet_size: Option<u32>,
    /// Domain the account claims, as raw bytes of the ASCII name.
    #[serde(rename = "Domain", skip_serializing_if = "Option::is_none")]
    pub domain: Option<VariableLength>,
    /// Fee charged on transfers of this account's issuances, in units of
    /// one billionth.
    #[serde(rename = "TransferRate", skip_serializing_if = "Option::is_none")]
    pub transfer_rate: Option<u32>,
    #[serde(rename = "SetFlag", skip_serializing_if = "Option::is_none")]
    pub set_flag: Option<u32>,
    #[serde(rename = "ClearFlag", skip_serializing_if = "Option::is_none")]
    pub clear_flag: Option<u32>,
}

/// Assigns or clears the account's delegate signing key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetRegularKey {
    #[serde(flatten)]
    pub base: TxBase,
    /// Omitted entirely to clear a previously set key.
    #[serde(rename = "RegularKey", skip_serializing_if = "Option::is_none")]
    pub regular_key: Option<RegularKey>,
}

/// Places an order on the decentralized exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OfferCreate {
    #[serde(flatten)]
    pub base: TxBase,
    /// What the offer's taker must pay.
    #[serde(rename = "TakerPays")]
    pub taker_pays: Amount,
    /// What the offer's taker receives.
    #[serde(rename = "TakerGets")]
    pub taker_gets: Amount,
    #[serde(rename = "Expiration", skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
    /// Sequence of an existing offer to replace.
    #[serde(rename = "OfferSequence", skip_serializing_if = "Option::is_none")]
    pub offer_sequence: Option<u32>,
}

/// Withdraws an order from the decentralized exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OfferCancel {
    #[serde(flatten)]
    pub base: TxBase,
    #[serde(rename = "OfferSequence")]
    pub offer_sequence: u32,
}

/// Creates or modifies a trust line to another account's issuances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrustSet {
    #[serde(flatten)]
    pub base: TxBase,
    /// The most of the issuer's currency this account is willing to hold.
    #[serde(rename = "LimitAmount")]
    pub limit_amount: Amount,
    #[serde(rename = "QualityIn", skip_serializing_if = "Option::is_none")]
    pub quality_in: Option<u32>,
    #[serde(rename = "QualityOut", skip_serializing_if = "Option::is_none")]
    pub quality_out: Option<u32>,
}

/// Pseudo-transaction recording an amendment gaining supermajority.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnableAmendment {
    #[serde(flatten)]
    pub base: TxBase,
    /// The amendment's feature hash.
    #[serde(rename = "Amendment")]
    pub amendment: Hash256,
}

/// Pseudo-transaction recording a change to the network fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetFee {
    #[serde(flatten)]
    pub base: TxBase,
    #[serde(rename = "BaseFee")]
    pub base_fee: VariableLength,
    #[serde(rename = "ReferenceFeeUnits")]
    pub reference_fee_units: u32,
    #[serde(rename = "ReserveBase")]
    pub reserve_base: u32,
    #[serde(rename = "ReserveIncrement")]
    pub reserve_increment: u32,
}

// ---------------------------------------------------------------------------
// The closed sum
// ---------------------------------------------------------------------------

/// Any transaction the codec can represent, one variant per registered
/// [`TransactionType`].
///
/// Serialization delegates to the inner shape, so a `Transaction` writes the
/// same flat JSON object the concrete type would. Deserialization goes
/// through the factory, which selects the variant from the declared type
/// name before any structural work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Payment(Payment),
    AccountSet(AccountSet),
    SetRegularKey(SetRegularKey),
    OfferCreate(OfferCreate),
    OfferCancel(OfferCancel),
    TrustSet(TrustSet),
    EnableAmendment(EnableAmendment),
    SetFee(SetFee),
}

impl Transaction {
    /// The shared base fields of whichever variant this is.
    pub fn base(&self) -> &TxBase {
        match self {
            Transaction::Payment(tx) => &tx.base,
            Transaction::AccountSet(tx) => &tx.base,
            Transaction::SetRegularKey(tx) => &tx.base,
            Transaction::OfferCreate(tx) => &tx.base,
            Transaction::OfferCancel(tx) => &tx.base,
            Transaction::TrustSet(tx) => &tx.base,
            Transaction::EnableAmendment(tx) => &tx.base,
            Transaction::SetFee(tx) => &tx.base,
        }
    }

    /// Mutable access to the shared base fields.
    pub fn base_mut(&mut self) -> &mut TxBase {
        match self {
            Transaction::Payment(tx) => &mut tx.base,
            Transaction::AccountSet(tx) => &mut tx.base,
            Transaction::SetRegularKey(tx) => &mut tx.base,
            Transaction::OfferCreate(tx) => &mut tx.base,
            Transaction::OfferCancel(tx) => &mut tx.base,
            Transaction::TrustSet(tx) => &mut tx.base,
            Transaction::EnableAmendment(tx) => &mut tx.base,
            Transaction::SetFee(tx) => &mut tx.base,
        }
    }

    /// The type tag carried in the base fields.
    pub fn tx_type(&self) -> TransactionType {
        self.base().transaction_type
    }
}

impl Serialize for Transaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Transaction::Payment(tx) => tx.serialize(serializer),
            Transaction::AccountSet(tx) => tx.serialize(serializer),
            Transaction::SetRegularKey(tx) => tx.serialize(serializer),
            Transaction::OfferCreate(tx) => tx.serialize(serializer),
            Transaction::OfferCancel(tx) => tx.serialize(serializer),
            Transaction::TrustSet(tx) => tx.serialize(serializer),
            Transaction::EnableAmendment(tx) => tx.serialize(serializer),
            Transaction::SetFee(tx) => tx.serialize(serializer),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SENDER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    #[test]
    fn payment_decodes_flat_fields() {
        let text = format!(
            r#"{{"TransactionType":"Payment","Account":"{SENDER}",
               "Destination":"{SENDER}","Amount":"25000000",
               "Sequence":7,"Fee":"12","Flags":2147483648}}"#
        );
        let tx: Payment = serde_json::from_str(&text).unwrap();
        assert_eq!(tx.base.transaction_type, TransactionType::Payment);
        assert_eq!(tx.base.sequence, 7);
        assert_eq!(tx.base.flags, Some(0x8000_0000));
        assert_eq!(tx.base.fee.to_string(), "12");
        assert_eq!(tx.amount, Amount::Native(25_000_000));
        assert_eq!(tx.destination.to_address(), SENDER);
        assert!(tx.send_max.is_none());
        assert!(tx.base.txn_signature.is_none());
    }

    #[test]
    fn sequence_and_fee_default_to_zero() {
        let text = format!(
            r#"{{"TransactionType":"Payment","Account":"{SENDER}",
               "Destination":"{SENDER}","Amount":"1"}}"#
        );
        let tx: Payment = serde_json::from_str(&text).unwrap();
        assert_eq!(tx.base.sequence, 0);
        assert!(tx.base.fee.is_zero());
    }

    #[test]
    fn unset_optionals_are_omitted() {
        let tx = Payment::default();
        let value = serde_json::to_value(&tx).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("SendMax"));
        assert!(!object.contains_key("Paths"));
        assert!(!object.contains_key("Flags"));
        assert!(!object.contains_key("TxnSignature"));
        assert_eq!(object["TransactionType"], "Payment");
        assert_eq!(object["Amount"], "0");
    }

    #[test]
    fn path_steps_use_lowercase_keys() {
        let text = format!(
            r#"{{"TransactionType":"Payment","Account":"{SENDER}",
               "Destination":"{SENDER}","Amount":"1",
               "Paths":[[{{"currency":"USD","issuer":"{SENDER}"}},
                         {{"account":"{SENDER}"}}]]}}"#
        );
        let tx: Payment = serde_json::from_str(&text).unwrap();
        let paths = tx.paths.as_ref().unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 2);
        assert_eq!(paths[0][0].currency.unwrap().to_string(), "USD");
        assert!(paths[0][0].account.is_none());
        assert!(paths[0][1].currency.is_none());

        let out = serde_json::to_value(&tx).unwrap();
        assert_eq!(out["Paths"][0][0]["currency"], "USD");
        assert!(out["Paths"][0][1].get("issuer").is_none());
    }

    #[test]
    fn offer_cancel_requires_offer_sequence() {
        let text = format!(
            r#"{{"TransactionType":"OfferCancel","Account":"{SENDER}"}}"#
        );
        assert!(serde_json::from_str::<OfferCancel>(&text).is_err());

        let text = format!(
            r#"{{"TransactionType":"OfferCancel","Account":"{SENDER}",
               "OfferSequence":99}}"#
        );
        let tx: OfferCancel = serde_json::from_str(&text).unwrap();
        assert_eq!(tx.offer_sequence, 99);
    }

    #[test]
    fn trust_set_carries_issued_limit() {
        let text = format!(
            r#"{{"TransactionType":"TrustSet","Account":"{SENDER}",
               "LimitAmount":{{"value":"100","currency":"USD",
                               "issuer":"{SENDER}"}}}}"#
        );
        let tx: TrustSet = serde_json::from_str(&text).unwrap();
        assert!(!tx.limit_amount.is_native());
        assert_eq!(tx.limit_amount.to_string(), format!("100/USD/{SENDER}"));
    }

    #[test]
    fn set_fee_shape() {
        let text = format!(
            r#"{{"TransactionType":"SetFee","Account":"{SENDER}",
               "BaseFee":"000000000000000A","ReferenceFeeUnits":10,
               "ReserveBase":20000000,"ReserveIncrement":5000000}}"#
        );
        let tx: SetFee = serde_json::from_str(&text).unwrap();
        assert_eq!(tx.base_fee.to_string(), "000000000000000a");
        assert_eq!(tx.reserve_base, 20_000_000);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let text = format!(
            r#"{{"TransactionType":"AccountSet","Account":"{SENDER}",
               "Domain":"6578616D706C652E636F6D","FutureField":true}}"#
        );
        let tx: AccountSet = serde_json::from_str(&text).unwrap();
        assert_eq!(
            tx.domain.as_ref().unwrap().as_slice(),
            b"example.com"
        );
    }

    #[test]
    fn transaction_serializes_as_inner_shape() {
        let mut inner = OfferCancel {
            offer_sequence: 4,
            ..Default::default()
        };
        inner.base.transaction_type = TransactionType::OfferCancel;
        let tx = Transaction::OfferCancel(inner.clone());
        assert_eq!(
            serde_json::to_value(&tx).unwrap(),
            serde_json::to_value(&inner).unwrap()
        );
        assert_eq!(tx.tx_type(), TransactionType::OfferCancel);
    }

    #[test]
    fn base_mut_reaches_shared_fields() {
        let mut tx = Transaction::Payment(Payment::default());
        tx.base_mut().sequence = 41;
        assert_eq!(tx.base().sequence, 41);
    }

    #[test]
    fn enable_amendment_round_trips() {
        let hash = "42".repeat(32);
        let text = format!(
            r#"{{"TransactionType":"EnableAmendment","Account":"{SENDER}",
               "Amendment":"{hash}"}}"#
        );
        let tx: EnableAmendment = serde_json::from_str(&text).unwrap();
        assert_eq!(tx.amendment.to_string(), hash.to_lowercase());
        let out = serde_json::to_value(&tx).unwrap();
        assert_eq!(out["Amendment"], json!(hash.to_lowercase()));
        assert_eq!(out["Account"], json!(SENDER));
    }
}
