//! # Transaction Envelope
//!
//! A transaction as the ledger reports it: the transaction itself plus its
//! hash, the ledger it landed in, and its execution metadata.
//!
//! The wire form is irregular. The reporting APIs emit the envelope fields
//! spliced into the *same* JSON object as the transaction fields, and the
//! metadata key is spelled `meta` by one API and `metaData` by another, with
//! different siblings in each case. Decoding therefore runs in two passes: a
//! narrow regex scan pulls the declared type name, the claimed hash, and the
//! metadata spelling out of the raw text, then the factory parses the full
//! document against the shape the type name selects, and a second parse
//! collects whichever envelope tail the spelling implies.
//!
//! Encoding always produces the `meta` spelling, with the ledger sequence
//! under both its current and legacy keys.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use tracing::trace;

use crate::enums::TransactionType;
use crate::error::CodecError;
use crate::hash::Hash256;
use crate::sync::Hashable;
use crate::time::RippleTime;
use crate::transaction::factory;
use crate::transaction::metadata::MetaData;
use crate::transaction::types::Transaction;

// ---------------------------------------------------------------------------
// Raw text scan
// ---------------------------------------------------------------------------

static TX_TYPE_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""TransactionType"\s*:\s*"([^"]*)""#)
        .expect("static pattern compiles")
});
static HASH_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""hash"\s*:\s*"([^"]*)""#).expect("static pattern compiles")
});
static META_KEY_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(meta|metaData)"\s*:"#).expect("static pattern compiles")
});

/// Which spelling of the metadata key a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `"meta"`: the per-transaction API shape, where the metadata sits
    /// beside `ledger_index` and `date`.
    Meta,
    /// `"metaData"`: the full-ledger API shape, metadata alone.
    MetaData,
}

/// What a pre-scan of raw envelope text found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discriminator {
    /// The declared transaction type name, unvalidated.
    pub tx_type: String,
    /// The claimed hash, hex, unvalidated.
    pub hash: String,
    /// The metadata spelling, when either key is present.
    pub meta_key: Option<MetaKey>,
}

/// Scans raw text for the three facts that steer envelope decoding, without
/// parsing the document.
///
/// The patterns tolerate arbitrary whitespace around the colon and take the
/// first occurrence of each key in document order. A missing type or hash is
/// a [`CodecError::MissingField`], reported in that order.
pub fn find_discriminator(text: &str) -> Result<Discriminator, CodecError> {
    let tx_type = TX_TYPE_SCAN
        .captures(text)
        .map(|caps| caps[1].to_string())
        .ok_or(CodecError::MissingField("TransactionType"))?;
    let hash = HASH_SCAN
        .captures(text)
        .map(|caps| caps[1].to_string())
        .ok_or(CodecError::MissingField("hash"))?;
    let meta_key = META_KEY_SCAN.captures(text).map(|caps| {
        if &caps[1] == "meta" {
            MetaKey::Meta
        } else {
            MetaKey::MetaData
        }
    });
    Ok(Discriminator {
        tx_type,
        hash,
        meta_key,
    })
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// A transaction together with the ledger's record of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionWithMetaData {
    /// The decoded transaction.
    pub transaction: Transaction,
    /// The transaction hash the document declared.
    pub hash: Hash256,
    /// The ledger the transaction was recorded in, zero while pending.
    pub ledger_sequence: u32,
    /// Close time of that ledger, when the source shape carried one.
    pub date: Option<RippleTime>,
    /// Execution metadata, absent while pending.
    pub metadata: Option<MetaData>,
}

/// Envelope tail in the per-transaction API shape.
#[derive(Deserialize)]
struct ReportedTail {
    meta: MetaData,
    #[serde(default)]
    ledger_index: u32,
    #[serde(default)]
    date: Option<RippleTime>,
}

/// Envelope tail in the full-ledger API shape.
#[derive(Deserialize)]
struct LedgerTail {
    #[serde(rename = "metaData")]
    meta_data: MetaData,
}

fn tail_error(source: serde_json::Error) -> CodecError {
    CodecError::Structural {
        context: "envelope tail",
        source,
    }
}

impl TransactionWithMetaData {
    /// Decodes an envelope from its spliced JSON text.
    ///
    /// The declared type name is checked against the registry before any
    /// structural parse, so an unregistered type fails fast with
    /// [`CodecError::UnknownIdentifier`] rather than a shape mismatch.
    /// Documents carrying neither metadata spelling decode as pending:
    /// no metadata, ledger sequence zero, no date.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        let disc = find_discriminator(text)?;
        let hash: Hash256 = disc.hash.parse()?;
        let tx_type = TransactionType::from_name(&disc.tx_type)?;
        let transaction = factory::decode(tx_type, text)?;
        trace!(
            tx_type = %tx_type,
            meta_key = ?disc.meta_key,
            "decoded transaction envelope"
        );

        let mut envelope = TransactionWithMetaData {
            transaction,
            hash,
            ledger_sequence: 0,
            date: None,
            metadata: None,
        };
        match disc.meta_key {
            Some(MetaKey::Meta) => {
                let tail: ReportedTail =
                    serde_json::from_str(text).map_err(tail_error)?;
                envelope.ledger_sequence = tail.ledger_index;
                envelope.date = tail.date;
                envelope.metadata = Some(tail.meta);
            }
            Some(MetaKey::MetaData) => {
                let tail: LedgerTail =
                    serde_json::from_str(text).map_err(tail_error)?;
                envelope.metadata = Some(tail.meta_data);
            }
            None => {}
        }
        Ok(envelope)
    }

    /// Encodes the envelope by splicing its fields into the transaction's
    /// own JSON object.
    ///
    /// The transaction serializes first; its closing brace is dropped and
    /// the hash, the ledger sequence under both spellings, and the metadata
    /// block are appended in its place. Absent metadata is written as the
    /// zero-valued block, so the output always carries a `meta` key. The
    /// `date` field is not part of the output.
    pub fn to_json(&self) -> Result<String, CodecError> {
        let tx = serde_json::to_string(&self.transaction).map_err(|source| {
            CodecError::Structural {
                context: "transaction body",
                source,
            }
        })?;
        let zero;
        let meta = match &self.metadata {
            Some(meta) => meta,
            None => {
                zero = MetaData::default();
                &zero
            }
        };
        let meta = serde_json::to_string(meta).map_err(tail_error)?;
        trace!(hash = %self.hash, "encoded transaction envelope");
        Ok(format!(
            r#"{},"hash":"{}","inLedger":{},"ledger_index":{},"meta":{}}}"#,
            &tx[..tx.len() - 1],
            self.hash,
            self.ledger_sequence,
            self.ledger_sequence,
            meta
        ))
    }
}

impl FromStr for TransactionWithMetaData {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        TransactionWithMetaData::from_json(text)
    }
}

impl fmt::Display for TransactionWithMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} in ledger {}",
            self.transaction.tx_type(),
            self.hash,
            self.ledger_sequence
        )
    }
}

impl Hashable for TransactionWithMetaData {
    fn content_hash(&self) -> Hash256 {
        self.hash
    }
}

// The serde impls ride on `RawValue` so envelopes nest inside larger JSON
// documents: serialization emits the spliced text verbatim, and
// deserialization hands the element's raw text to [`from_json`].
impl Serialize for TransactionWithMetaData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.to_json().map_err(serde::ser::Error::custom)?;
        let raw = RawValue::from_string(text).map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TransactionWithMetaData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        TransactionWithMetaData::from_json(raw.get()).map_err(D::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TransactionResult;

    const SENDER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const HASH: &str =
        "e08d6e9754025ba2534a78707605e0601f03ace063687a0ca1bddacfcd1698c7";

    fn reported_payment() -> String {
        format!(
            r#"{{"Account":"{SENDER}","Amount":"1000000",
                "Destination":"{SENDER}","Fee":"10","Sequence":2,
                "TransactionType":"Payment",
                "date":435301270,
                "hash":"{HASH}",
                "inLedger":348734,"ledger_index":348734,
                "meta":{{"AffectedNodes":[],"TransactionIndex":3,
                         "TransactionResult":"tesSUCCESS"}}}}"#
        )
    }

    #[test]
    fn discriminator_reads_all_three_facts() {
        let disc = find_discriminator(&reported_payment()).unwrap();
        assert_eq!(disc.tx_type, "Payment");
        assert_eq!(disc.hash, HASH);
        assert_eq!(disc.meta_key, Some(MetaKey::Meta));
    }

    #[test]
    fn discriminator_tolerates_whitespace() {
        let text = r#"{"TransactionType" :  "OfferCancel",
                       "hash"
                         : "ab",
                       "metaData" : {}}"#;
        let disc = find_discriminator(text).unwrap();
        assert_eq!(disc.tx_type, "OfferCancel");
        assert_eq!(disc.hash, "ab");
        assert_eq!(disc.meta_key, Some(MetaKey::MetaData));
    }

    #[test]
    fn discriminator_takes_first_occurrence() {
        let text = r#"{"TransactionType":"Payment","hash":"aa",
                       "meta":{},"metaData":{},"hash":"bb"}"#;
        let disc = find_discriminator(text).unwrap();
        assert_eq!(disc.hash, "aa");
        assert_eq!(disc.meta_key, Some(MetaKey::Meta));
    }

    #[test]
    fn missing_type_reported_before_missing_hash() {
        let err = find_discriminator("{}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "not a valid transaction envelope: missing TransactionType"
        );
        let err =
            find_discriminator(r#"{"TransactionType":"Payment"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "not a valid transaction envelope: missing hash"
        );
    }

    #[test]
    fn decodes_reported_shape() {
        let txm = TransactionWithMetaData::from_json(&reported_payment()).unwrap();
        assert_eq!(txm.hash.to_string(), HASH);
        assert_eq!(txm.ledger_sequence, 348_734);
        assert_eq!(txm.date.unwrap().secs(), 435_301_270);
        let meta = txm.metadata.unwrap();
        assert_eq!(meta.transaction_index, 3);
        assert_eq!(meta.transaction_result, TransactionResult::Success);
        assert_eq!(txm.transaction.tx_type(), TransactionType::Payment);
        assert_eq!(txm.transaction.base().sequence, 2);
    }

    #[test]
    fn decodes_ledger_shape_without_sequence_or_date() {
        let text = format!(
            r#"{{"Account":"{SENDER}","Amount":"5","Destination":"{SENDER}",
                "TransactionType":"Payment","hash":"{HASH}",
                "metaData":{{"AffectedNodes":[],"TransactionIndex":0,
                             "TransactionResult":"tecUNFUNDED"}}}}"#
        );
        let txm = TransactionWithMetaData::from_json(&text).unwrap();
        assert_eq!(txm.ledger_sequence, 0);
        assert!(txm.date.is_none());
        assert_eq!(
            txm.metadata.unwrap().transaction_result,
            TransactionResult::Unfunded
        );
    }

    #[test]
    fn decodes_pending_shape_without_metadata() {
        let text = format!(
            r#"{{"Account":"{SENDER}","Amount":"5","Destination":"{SENDER}",
                "TransactionType":"Payment","hash":"{HASH}"}}"#
        );
        let txm = TransactionWithMetaData::from_json(&text).unwrap();
        assert!(txm.metadata.is_none());
        assert_eq!(txm.ledger_sequence, 0);
        assert!(txm.date.is_none());
    }

    #[test]
    fn rejects_unregistered_type_before_structural_parse() {
        // The body is structurally nonsense for any shape; the name gate
        // must fire first.
        let text = format!(
            r#"{{"TransactionType":"NFTokenMint","hash":"{HASH}",
                "Account":12345}}"#
        );
        let err = TransactionWithMetaData::from_json(&text).unwrap_err();
        assert_eq!(err.to_string(), "unknown TransactionType: NFTokenMint");
    }

    #[test]
    fn rejects_bad_hash() {
        let text = format!(
            r#"{{"Account":"{SENDER}","Amount":"5","Destination":"{SENDER}",
                "TransactionType":"Payment","hash":"abc123"}}"#
        );
        let err = TransactionWithMetaData::from_json(&text).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Format { kind: "Hash256", .. }
        ));
    }

    #[test]
    fn encode_splices_envelope_fields() {
        let txm = TransactionWithMetaData::from_json(&reported_payment()).unwrap();
        let text = txm.to_json().unwrap();
        assert!(text.starts_with('{'));
        assert!(text.ends_with(&format!(
            r#","hash":"{HASH}","inLedger":348734,"ledger_index":348734,"meta":{{"AffectedNodes":[],"TransactionIndex":3,"TransactionResult":"tesSUCCESS"}}}}"#
        )));
        // The spliced text must itself be valid JSON with one object.
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["inLedger"], 348_734);
        assert_eq!(value["ledger_index"], 348_734);
        assert_eq!(value["Amount"], "1000000");
    }

    #[test]
    fn encode_writes_zero_metadata_when_absent() {
        let text = format!(
            r#"{{"Account":"{SENDER}","Amount":"5","Destination":"{SENDER}",
                "TransactionType":"Payment","hash":"{HASH}"}}"#
        );
        let txm = TransactionWithMetaData::from_json(&text).unwrap();
        let out = txm.to_json().unwrap();
        assert!(out.contains(
            r#""meta":{"AffectedNodes":[],"TransactionIndex":0,"TransactionResult":"tesSUCCESS"}"#
        ));
        assert!(out.contains(r#""inLedger":0"#));
    }

    #[test]
    fn encoded_text_decodes_back() {
        let txm = TransactionWithMetaData::from_json(&reported_payment()).unwrap();
        let back = TransactionWithMetaData::from_json(&txm.to_json().unwrap()).unwrap();
        assert_eq!(back.transaction, txm.transaction);
        assert_eq!(back.hash, txm.hash);
        assert_eq!(back.ledger_sequence, txm.ledger_sequence);
        assert_eq!(back.metadata, txm.metadata);
        // The splice does not carry the date, so it does not survive.
        assert!(back.date.is_none());
    }

    #[test]
    fn envelopes_nest_in_larger_documents() {
        let wrapped = format!(
            r#"{{"result":{{"transactions":[{}]}}}}"#,
            reported_payment()
        );
        #[derive(Deserialize)]
        struct TxPage {
            transactions: Vec<TransactionWithMetaData>,
        }
        #[derive(Deserialize)]
        struct Response {
            result: TxPage,
        }
        let response: Response = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(response.result.transactions.len(), 1);
        assert_eq!(
            response.result.transactions[0].ledger_sequence,
            348_734
        );

        let out = serde_json::to_string(&response.result.transactions[0]).unwrap();
        assert!(out.contains(r#""hash":"e08d"#));
    }

    #[test]
    fn content_hash_is_the_declared_hash() {
        let txm = TransactionWithMetaData::from_json(&reported_payment()).unwrap();
        assert_eq!(txm.content_hash(), txm.hash);
        assert_eq!(
            txm.to_string(),
            format!("Payment {HASH} in ledger 348734")
        );
    }
}
