// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifier sources for outline nodes.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::types::NodeId;

/// A generator of fresh [`NodeId`]s.
///
/// Every node created by the parser or by an [`OutlineBuilder`](crate::OutlineBuilder)
/// takes exactly one identifier from its source, in document order.
pub trait IdSource {
    /// Mint the next identifier.
    fn next_id(&mut self) -> NodeId;
}

impl<T: IdSource + ?Sized> IdSource for &mut T {
    fn next_id(&mut self) -> NodeId {
        (**self).next_id()
    }
}

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-wide identifier source.
///
/// All `SessionIds` values share one atomic counter, so identifiers never repeat
/// within a process, whichever thread or parse minted them.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionIds;

impl IdSource for SessionIds {
    fn next_id(&mut self) -> NodeId {
        NodeId::from_raw(SESSION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Caller-owned counter producing a deterministic sequence of identifiers.
///
/// Useful for tests and for hosts that persist their own id space. Uniqueness
/// only holds among identifiers minted by the same `SequentialIds` value.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates a source whose first identifier has raw value `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a source whose first identifier has raw value `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId::from_raw(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn session_ids_do_not_repeat() {
        let mut a = SessionIds;
        let mut b = SessionIds;
        let ids: Vec<NodeId> = (0..64)
            .flat_map(|_| [a.next_id(), b.next_id()])
            .collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate id {id}");
        }
    }

    #[test]
    fn sequential_ids_are_deterministic() {
        let mut ids = SequentialIds::starting_at(10);
        assert_eq!(ids.next_id(), NodeId::from_raw(10));
        assert_eq!(ids.next_id(), NodeId::from_raw(11));

        // Borrowed sources keep advancing the owner.
        fn mint<S: IdSource>(mut source: S) -> NodeId {
            source.next_id()
        }
        assert_eq!(mint(&mut ids), NodeId::from_raw(12));
        assert_eq!(ids.next_id(), NodeId::from_raw(13));
    }
}
