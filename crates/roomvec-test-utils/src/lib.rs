//! Test utilities and instrumented element types for roomvec development.
//!
//! Provides [`DropLedger`] / [`Tracked`] for counting constructions and
//! drops, [`CloneBudget`] / [`Fragile`] for elements whose `Clone` panics
//! after a set number of copies, and reference room fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counters of tracked elements created and dropped.
///
/// Cloning the ledger shares the counters.
#[derive(Clone, Debug, Default)]
pub struct DropLedger {
    created: Arc<AtomicUsize>,
    dropped: Arc<AtomicUsize>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new element recorded against this ledger.
    pub fn track(&self, id: u32) -> Tracked {
        self.created.fetch_add(1, Ordering::SeqCst);
        Tracked {
            id,
            ledger: self.clone(),
        }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Elements created but not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// An element that reports its construction and drop to a [`DropLedger`].
///
/// Clones count as new constructions.
#[derive(Debug)]
pub struct Tracked {
    id: u32,
    ledger: DropLedger,
}

impl Tracked {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.ledger.track(self.id)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

/// Shared allowance of clones; [`Fragile`] panics once it is spent.
#[derive(Clone, Debug)]
pub struct CloneBudget {
    remaining: Arc<AtomicUsize>,
}

impl CloneBudget {
    pub fn new(clones: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(clones)),
        }
    }

    pub fn make(&self, value: i32) -> Fragile {
        Fragile {
            value,
            budget: self.clone(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::SeqCst)
    }
}

/// An element whose `Clone` panics once its [`CloneBudget`] is exhausted.
#[derive(Debug)]
pub struct Fragile {
    pub value: i32,
    budget: CloneBudget,
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        let spent = self
            .budget
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        assert!(spent.is_ok(), "clone budget exhausted");
        self.budget.make(self.value)
    }
}

impl PartialEq for Fragile {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_counts_clones_and_drops() {
        let ledger = DropLedger::new();
        let a = ledger.track(1);
        let b = a.clone();
        assert_eq!(ledger.created(), 2);
        drop(a);
        assert_eq!(ledger.live(), 1);
        drop(b);
        assert_eq!(ledger.dropped(), 2);
    }

    #[test]
    #[should_panic(expected = "clone budget exhausted")]
    fn fragile_panics_when_budget_spent() {
        let budget = CloneBudget::new(1);
        let item = budget.make(3);
        let _first = item.clone();
        let _second = item.clone();
    }
}
