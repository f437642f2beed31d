//! # Transaction Module
//!
//! The transaction side of the codec: concrete transaction shapes, the
//! factory that selects among them, execution metadata, and the envelope
//! format the reporting APIs splice it all into.
//!
//! ## Architecture
//!
//! ```text
//! types.rs    — TxBase, the eight concrete shapes, and the Transaction sum
//! factory.rs  — Name-driven construction and strict per-shape decoding
//! metadata.rs — MetaData, NodeEffect, and the touched-entry Node record
//! envelope.rs — TransactionWithMetaData and the spliced wire format
//! ```
//!
//! ## Decode Pipeline
//!
//! 1. **Scan** — [`find_discriminator`] pulls the type name, claimed hash,
//!    and metadata spelling out of the raw text with narrow regexes.
//! 2. **Gate** — the hash must hex-decode and the type name must be
//!    registered, before any structural parsing.
//! 3. **Parse** — the factory decodes the full document against the one
//!    shape the type name selects. No shape guessing.
//! 4. **Tail** — a second parse collects `meta`/`ledger_index`/`date` or
//!    `metaData`, depending on the spelling the scan found.
//!
//! ## Design Decisions
//!
//! - [`Transaction`] is a closed sum. Adding a transaction type is a code
//!   change in `types.rs`, the factory, and the type registry, and the
//!   compiler points at every match that needs extending.
//! - The envelope's encoder rebuilds the spliced form by hand rather than
//!   through a serde struct, because the wire format inlines envelope
//!   fields into the transaction's own object.
//! - Metadata field objects stay as raw JSON values. The codec names which
//!   entries were touched and how; interpreting entry internals is the
//!   caller's business.

pub mod envelope;
pub mod factory;
pub mod metadata;
pub mod types;

pub use envelope::{find_discriminator, Discriminator, MetaKey, TransactionWithMetaData};
pub use metadata::{MetaData, Node, NodeEffect};
pub use types::{
    AccountSet, EnableAmendment, OfferCancel, OfferCreate, Path, PathSet,
    PathStep, Payment, SetFee, SetRegularKey, Transaction, TrustSet, TxBase,
};
