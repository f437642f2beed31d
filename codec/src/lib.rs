// Copyright (c) 2026 Riptide Contributors. MIT License.
// See LICENSE for details.

//! # Riptide — Ledger JSON Codec
//!
//! Faithful JSON codecs for the XRP Ledger's reporting formats. Those
//! formats are irregular in ways that only make sense historically, and
//! this crate's job is to reproduce them exactly, not to improve them.
//!
//! Riptide takes a strict stance: every codec is total over its documented
//! input space. Unknown names are errors, out-of-range numbers are errors,
//! and nothing silently truncates. The one place we stay permissive is
//! unknown JSON fields, which the reporting APIs grow faster than anyone
//! can track.
//!
//! ## Architecture
//!
//! - **hash** — Fixed-width hex blobs: Hash128/160/256, public keys, and
//!   variable-length byte strings.
//! - **currency** — The 20-byte currency code and its three-character face.
//! - **account** — Base58Check account identifiers with version gating.
//! - **decimal** — Sign/mantissa/exponent splitting of decimal numerals.
//! - **value** — The ledger's dual-regime numeric type, native and issued.
//! - **amount** — A value plus its currency and issuer, in both wire shapes.
//! - **enums** — Transaction types, result codes, and ledger entry types.
//! - **time** — Seconds since the ledger epoch, on top of chrono.
//! - **transaction** — Concrete transaction shapes, execution metadata, and
//!   the spliced envelope format.
//! - **sync** — The ledger synchronization contract.
//! - **error** — One error type for every codec, with blame attached.
//! - **config** — Shared constants: epochs, mantissa windows, drop caps.
//!
//! ## Design Philosophy
//!
//! 1. Wire fidelity over elegance. The formats won; we just encode them.
//! 2. Dispatch on declared names, never on guessed shapes.
//! 3. Errors say what was wrong with the input, not where the code gave up.
//! 4. Anything that parses money gets tested from both sides of the wire.

pub mod account;
pub mod amount;
pub mod config;
pub mod currency;
pub mod decimal;
pub mod enums;
pub mod error;
pub mod hash;
pub mod sync;
pub mod time;
pub mod transaction;
pub mod value;
