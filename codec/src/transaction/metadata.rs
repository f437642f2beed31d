//! # Transaction Metadata
//!
//! What actually happened when a transaction executed: the ledger entries it
//! touched, its position within the ledger, and the engine's verdict. The
//! per-entry field objects are kept as raw JSON; entry shapes vary by type
//! and are outside this codec's concern, but the entry *type* itself is
//! decoded so callers can dispatch on it.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::enums::{LedgerEntryType, TransactionResult};
use crate::hash::Hash256;

// ---------------------------------------------------------------------------
// Metadata block
// ---------------------------------------------------------------------------

/// The execution record attached to a validated transaction.
///
/// Every field defaults, so `MetaData::default()` is the canonical
/// zero-valued block: no touched entries, index zero, `tesSUCCESS`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetaData {
    /// The ledger entries this transaction created, modified, or deleted.
    #[serde(rename = "AffectedNodes", default)]
    pub affected_nodes: Vec<NodeEffect>,
    /// Position of the transaction within its ledger.
    #[serde(rename = "TransactionIndex", default)]
    pub transaction_index: u32,
    /// The engine's verdict.
    #[serde(rename = "TransactionResult", default)]
    pub transaction_result: TransactionResult,
    /// What the destination actually received, for partial payments. Note
    /// the lowercase key; this field is added by the reporting layer, not
    /// the ledger itself.
    #[serde(rename = "delivered_amount", skip_serializing_if = "Option::is_none")]
    pub delivered_amount: Option<Amount>,
}

// ---------------------------------------------------------------------------
// Node effects
// ---------------------------------------------------------------------------

/// One touched ledger entry, tagged by what happened to it. The tag is the
/// JSON key wrapping the node, exactly as the ledger emits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeEffect {
    /// A ledger entry brought into existence.
    CreatedNode(Node),
    /// A ledger entry changed in place.
    ModifiedNode(Node),
    /// A ledger entry removed.
    DeletedNode(Node),
}

impl NodeEffect {
    /// The node inside, regardless of which effect wraps it.
    pub fn node(&self) -> &Node {
        match self {
            NodeEffect::CreatedNode(node)
            | NodeEffect::ModifiedNode(node)
            | NodeEffect::DeletedNode(node) => node,
        }
    }

    /// The type of ledger entry this effect touched.
    pub fn entry_type(&self) -> LedgerEntryType {
        self.node().ledger_entry_type
    }
}

/// A touched ledger entry. Which of the field objects are present depends on
/// the effect: created entries carry `NewFields`, modified entries carry
/// `FinalFields` and `PreviousFields`, deleted entries carry `FinalFields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "LedgerEntryType")]
    pub ledger_entry_type: LedgerEntryType,
    /// The entry's index in the state tree.
    #[serde(rename = "LedgerIndex", skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<Hash256>,
    /// Hash of the previous transaction that touched this entry.
    #[serde(rename = "PreviousTxnID", skip_serializing_if = "Option::is_none")]
    pub previous_txn_id: Option<Hash256>,
    /// Ledger sequence of that previous transaction.
    #[serde(
        rename = "PreviousTxnLgrSeq",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_txn_lgr_seq: Option<u32>,
    #[serde(rename = "NewFields", skip_serializing_if = "Option::is_none")]
    pub new_fields: Option<serde_json::Value>,
    #[serde(rename = "FinalFields", skip_serializing_if = "Option::is_none")]
    pub final_fields: Option<serde_json::Value>,
    #[serde(rename = "PreviousFields", skip_serializing_if = "Option::is_none")]
    pub previous_fields: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_block_is_zero_valued() {
        let meta = MetaData::default();
        assert!(meta.affected_nodes.is_empty());
        assert_eq!(meta.transaction_index, 0);
        assert_eq!(meta.transaction_result, TransactionResult::Success);
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({
                "AffectedNodes": [],
                "TransactionIndex": 0,
                "TransactionResult": "tesSUCCESS"
            })
        );
    }

    #[test]
    fn decodes_a_modified_account_root() {
        let text = r#"{
            "AffectedNodes": [{
                "ModifiedNode": {
                    "FinalFields": {"Balance": "99999988", "Sequence": 2},
                    "LedgerEntryType": "AccountRoot",
                    "LedgerIndex": "B33FDD5CF3445E1A7F2BE9B479E7582B6D48DD54CEF1F88644C964F5D1E1D0E8",
                    "PreviousFields": {"Balance": "100000000", "Sequence": 1},
                    "PreviousTxnLgrSeq": 343555
                }
            }],
            "TransactionIndex": 1,
            "TransactionResult": "tecPATH_DRY"
        }"#;
        let meta: MetaData = serde_json::from_str(text).unwrap();
        assert_eq!(meta.transaction_result, TransactionResult::PathDry);
        assert_eq!(meta.affected_nodes.len(), 1);
        let effect = &meta.affected_nodes[0];
        assert!(matches!(effect, NodeEffect::ModifiedNode(_)));
        assert_eq!(effect.entry_type(), LedgerEntryType::AccountRoot);
        let node = effect.node();
        assert_eq!(node.previous_txn_lgr_seq, Some(343_555));
        assert_eq!(
            node.final_fields.as_ref().unwrap()["Balance"],
            "99999988"
        );
        assert!(node.new_fields.is_none());
    }

    #[test]
    fn effect_tag_round_trips() {
        let effect = NodeEffect::CreatedNode(Node {
            ledger_entry_type: LedgerEntryType::Offer,
            ledger_index: None,
            previous_txn_id: None,
            previous_txn_lgr_seq: None,
            new_fields: Some(json!({"TakerGets": "100"})),
            final_fields: None,
            previous_fields: None,
        });
        let value = serde_json::to_value(&effect).unwrap();
        assert!(value.get("CreatedNode").is_some());
        assert_eq!(value["CreatedNode"]["LedgerEntryType"], "Offer");
        let back: NodeEffect = serde_json::from_value(value).unwrap();
        assert_eq!(back, effect);
    }

    #[test]
    fn delivered_amount_is_optional_and_lowercase() {
        let text = r#"{
            "AffectedNodes": [],
            "TransactionIndex": 0,
            "TransactionResult": "tesSUCCESS",
            "delivered_amount": "1000000"
        }"#;
        let meta: MetaData = serde_json::from_str(text).unwrap();
        assert_eq!(meta.delivered_amount, Some(Amount::Native(1_000_000)));
        let out = serde_json::to_value(&meta).unwrap();
        assert_eq!(out["delivered_amount"], "1000000");
    }

    #[test]
    fn unknown_result_name_fails() {
        let text = r#"{"TransactionResult": "tesWONDERFUL"}"#;
        let err = serde_json::from_str::<MetaData>(text).unwrap_err();
        assert!(err.to_string().contains("tesWONDERFUL"));
    }
}
