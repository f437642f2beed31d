//! # Ledger Synchronization Contract
//!
//! The interface between a ledger store and whatever machinery keeps it
//! current. This module defines the contract only; fetching strategy,
//! bookkeeping, and storage are the implementor's business.

use std::fmt;

use crate::hash::Hash256;

/// Anything identified by a 256-bit content hash.
pub trait Hashable {
    /// The hash identifying this item's content.
    fn content_hash(&self) -> Hash256;
}

/// An inclusive range of ledger sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerRange {
    pub start: u32,
    pub end: u32,
}

impl LedgerRange {
    pub fn new(start: u32, end: u32) -> Self {
        LedgerRange { start, end }
    }

    pub fn contains(&self, seq: u32) -> bool {
        self.start <= seq && seq <= self.end
    }
}

impl fmt::Display for LedgerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A batch of ledgers a synchronizer wants fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Work {
    pub range: LedgerRange,
}

/// The synchronization schedule a ledger store exposes.
///
/// A driver loop tells the schedule where the network tip is, asks it what
/// is still missing, fetches, and submits the results. Implementations may
/// track in-flight requests, which is why [`missing`](Self::missing) takes
/// `&mut self`.
pub trait SyncSchedule {
    /// Notes the network's current validated ledger sequence.
    fn current(&mut self, seq: u32);

    /// The next batch worth fetching within `range`, or `None` when the
    /// store wants nothing there.
    fn missing(&mut self, range: &LedgerRange) -> Option<Work>;

    /// Accepts fetched items into the store.
    fn submit(&mut self, items: &[&dyn Hashable]);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    struct Fixed(Hash256);

    impl Hashable for Fixed {
        fn content_hash(&self) -> Hash256 {
            self.0
        }
    }

    /// Gap-tracking schedule, just enough to exercise the contract.
    #[derive(Default)]
    struct MemorySchedule {
        tip: u32,
        acquired: BTreeSet<u32>,
        submitted: Vec<Hash256>,
    }

    impl SyncSchedule for MemorySchedule {
        fn current(&mut self, seq: u32) {
            self.tip = self.tip.max(seq);
        }

        fn missing(&mut self, range: &LedgerRange) -> Option<Work> {
            let mut start = None;
            let mut end = range.start;
            for seq in range.start..=range.end.min(self.tip) {
                if self.acquired.contains(&seq) {
                    if start.is_some() {
                        break;
                    }
                } else {
                    start.get_or_insert(seq);
                    end = seq;
                }
            }
            start.map(|start| Work {
                range: LedgerRange::new(start, end),
            })
        }

        fn submit(&mut self, items: &[&dyn Hashable]) {
            self.submitted
                .extend(items.iter().map(|item| item.content_hash()));
        }
    }

    #[test]
    fn range_contains_is_inclusive() {
        let range = LedgerRange::new(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
        assert_eq!(range.to_string(), "10-20");
    }

    #[test]
    fn schedule_reports_first_gap_up_to_the_tip() {
        let mut schedule = MemorySchedule::default();
        schedule.current(8);
        schedule.acquired.extend([1, 2, 5]);

        let work = schedule.missing(&LedgerRange::new(1, 100)).unwrap();
        assert_eq!(work.range, LedgerRange::new(3, 4));

        schedule.acquired.extend([3, 4]);
        let work = schedule.missing(&LedgerRange::new(1, 100)).unwrap();
        assert_eq!(work.range, LedgerRange::new(6, 8));

        schedule.acquired.extend([6, 7, 8]);
        assert!(schedule.missing(&LedgerRange::new(1, 100)).is_none());
    }

    #[test]
    fn submitted_items_surface_their_hashes() {
        let mut schedule = MemorySchedule::default();
        let first = Fixed(Hash256::from_bytes([1; 32]));
        let second = Fixed(Hash256::from_bytes([2; 32]));
        schedule.submit(&[&first, &second]);
        assert_eq!(
            schedule.submitted,
            vec![first.content_hash(), second.content_hash()]
        );
    }
}
