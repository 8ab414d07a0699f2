// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for outlines: node handles, identifiers, and flags.

use core::fmt;

/// Handle of a node within an [`Outline`](crate::Outline).
///
/// Handles are only meaningful for the outline that produced them. They are
/// dense arena indices: the root is always [`Outline::ROOT`](crate::Outline::ROOT),
/// and the remaining nodes follow in creation order (document order for parsed
/// outlines).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub(crate) u32);

impl NodeIndex {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeIndex uses 32-bit indices by design."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        debug_assert!(idx <= u32::MAX as usize, "outline exceeds 32-bit node indices");
        Self(idx as u32)
    }

    /// Returns the arena slot of this handle.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

/// Opaque identifier of a node.
///
/// Identifiers are freshly minted for every node by an [`IdSource`](crate::IdSource),
/// including on every re-parse of the same text. They can be compared and hashed,
/// but carry no ordering and their content is not meant to be interpreted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw value minted by an [`IdSource`](crate::IdSource).
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value, for hosts that need to persist or hash it themselves.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{:016x}", self.0)
    }
}

bitflags::bitflags! {
    /// Presentation hints attached to a node.
    ///
    /// Flags never change the structure of an outline: layout and serialization
    /// treat flagged and unflagged nodes alike.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// The node's children are hidden by the host UI.
        const COLLAPSED = 0b0000_0001;
    }
}
