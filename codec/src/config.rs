//! # Protocol Constants
//!
//! Every magic number the codecs rely on lives here. These values are fixed
//! by the ledger's consensus rules; they are not tunables, and editing them
//! will quietly corrupt everything this crate reads or writes.

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Seconds between the Unix epoch and the ledger epoch (2000-01-01T00:00:00Z).
/// Ledger timestamps count seconds from the later one, so converting is a
/// single addition in one direction and a subtraction in the other.
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

// ---------------------------------------------------------------------------
// Value precision
// ---------------------------------------------------------------------------

/// Smallest canonical mantissa for a non-zero issued value: 10^15.
/// Issued values carry 16 significant decimal digits, no more, no less.
pub const MIN_MANTISSA: u64 = 1_000_000_000_000_000;

/// Largest canonical mantissa for an issued value: 10^16 - 1.
pub const MAX_MANTISSA: u64 = 9_999_999_999_999_999;

/// Smallest exponent an issued value may carry.
pub const MIN_EXPONENT: i32 = -96;

/// Largest exponent an issued value may carry.
pub const MAX_EXPONENT: i32 = 80;

/// Ceiling on a native amount, in drops. One hundred billion units at a
/// million drops each. A parsed drops count above this is not money, it is
/// a typo.
pub const MAX_DROPS: u64 = 100_000_000_000_000_000;

/// Drops per whole native unit.
pub const DROPS_PER_UNIT: u64 = 1_000_000;

// ---------------------------------------------------------------------------
// Currency layout
// ---------------------------------------------------------------------------

/// Offset of the three-character currency slot inside a 160-bit code.
pub const CURRENCY_SLOT_OFFSET: usize = 12;

/// Width of the currency slot in bytes.
pub const CURRENCY_SLOT_LEN: usize = 3;
